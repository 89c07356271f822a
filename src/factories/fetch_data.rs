//! Forecast list factory

use crate::mvvm::{
    CreateGuard, Factory, Infrastructure, ReentryPolicy, Resolver, Result, VmDataSource,
    VmInitializerAsync,
};
use crate::page_key::PageKey;
use crate::view_models::FetchDataVm;
use std::fmt;
use std::sync::Arc;

pub type FetchDataInfrastructure = Infrastructure<FetchDataVm, dyn VmInitializerAsync>;

/// Starts the forecast data source and hands back the bundle. Initialization is
/// left to the caller because it needs a cancellation token.
pub struct FetchDataFactory {
    fetch_data_vm: Arc<FetchDataVm>,
    fetch_data_vm_data_source: Arc<dyn VmDataSource>,
    fetch_data_vm_initializer: Arc<dyn VmInitializerAsync>,
    guard: CreateGuard<FetchDataInfrastructure>,
}

impl FetchDataFactory {
    pub fn new(
        fetch_data_vm: Arc<FetchDataVm>,
        data_source_resolver: &Resolver<PageKey, dyn VmDataSource>,
        initializer_resolver: &Resolver<PageKey, dyn VmInitializerAsync>,
        policy: ReentryPolicy,
    ) -> Result<Self> {
        Ok(Self {
            fetch_data_vm,
            fetch_data_vm_data_source: data_source_resolver.resolve(PageKey::FetchData)?,
            fetch_data_vm_initializer: initializer_resolver.resolve(PageKey::FetchData)?,
            guard: CreateGuard::new("FetchDataFactory", policy),
        })
    }
}

impl Factory for FetchDataFactory {
    type Output = FetchDataInfrastructure;

    fn create(&self) -> Result<FetchDataInfrastructure> {
        self.guard.create_with(|| {
            self.fetch_data_vm_data_source.start()?;
            FetchDataInfrastructure::builder()
                .view_model(Arc::clone(&self.fetch_data_vm))
                .data_source(Arc::clone(&self.fetch_data_vm_data_source))
                .initializer(Arc::clone(&self.fetch_data_vm_initializer))
                .build()
        })
    }

    fn is_created(&self) -> bool {
        self.guard.is_created()
    }
}

impl fmt::Debug for FetchDataFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchDataFactory")
            .field("guard", &self.guard)
            .finish()
    }
}
