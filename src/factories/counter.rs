//! Counter factory

use crate::commands::CounterVmCommandManager;
use crate::mvvm::{
    Command, CreateGuard, Factory, Infrastructure, ReentryPolicy, RelayCommand, Resolver,
    Result, VmDataSource, VmInitializer,
};
use crate::page_key::PageKey;
use crate::view_models::CounterVm;
use std::fmt;
use std::sync::Arc;

pub type CounterInfrastructure = Infrastructure<CounterVm, dyn VmInitializer>;

/// Binds the increment command, starts the counter data source and hands back
/// the bundle. Optionally seeds the model inline.
pub struct CounterFactory {
    counter_vm: Arc<CounterVm>,
    counter_vm_data_source: Arc<dyn VmDataSource>,
    counter_vm_initializer: Arc<dyn VmInitializer>,
    counter_vm_command_manager: Arc<CounterVmCommandManager>,
    initialize_on_create: bool,
    guard: CreateGuard<CounterInfrastructure>,
}

impl CounterFactory {
    /// Resolve the counter data source and initializer; fails with `KeyNotFound`
    /// if either is not registered.
    pub fn new(
        counter_vm: Arc<CounterVm>,
        data_source_resolver: &Resolver<PageKey, dyn VmDataSource>,
        initializer_resolver: &Resolver<PageKey, dyn VmInitializer>,
        counter_vm_command_manager: Arc<CounterVmCommandManager>,
        policy: ReentryPolicy,
    ) -> Result<Self> {
        Ok(Self {
            counter_vm,
            counter_vm_data_source: data_source_resolver.resolve(PageKey::Counter)?,
            counter_vm_initializer: initializer_resolver.resolve(PageKey::Counter)?,
            counter_vm_command_manager,
            initialize_on_create: false,
            guard: CreateGuard::new("CounterFactory", policy),
        })
    }

    /// Run the initializer as the last step of `create`
    pub fn initialize_on_create(mut self, enabled: bool) -> Self {
        self.initialize_on_create = enabled;
        self
    }

    fn build(&self) -> Result<CounterInfrastructure> {
        // Start first so a rejected create leaves the ViewModel untouched
        self.counter_vm_data_source.start()?;

        let manager = Arc::clone(&self.counter_vm_command_manager);
        let increment_count_command: Arc<dyn Command> = Arc::new(RelayCommand::new(
            "IncrementCount",
            move |parameter: &()| manager.increment_count_execute(parameter),
        ));
        self.counter_vm.set_commands(increment_count_command)?;

        if self.initialize_on_create {
            self.counter_vm_initializer.initialize()?;
        }

        CounterInfrastructure::builder()
            .view_model(Arc::clone(&self.counter_vm))
            .data_source(Arc::clone(&self.counter_vm_data_source))
            .initializer(Arc::clone(&self.counter_vm_initializer))
            .build()
    }
}

impl Factory for CounterFactory {
    type Output = CounterInfrastructure;

    fn create(&self) -> Result<CounterInfrastructure> {
        self.guard.create_with(|| self.build())
    }

    fn is_created(&self) -> bool {
        self.guard.is_created()
    }
}

impl fmt::Debug for CounterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterFactory")
            .field("initialize_on_create", &self.initialize_on_create)
            .field("guard", &self.guard)
            .finish()
    }
}
