//! Counter data source
//!
//! Two-way binding `CounterModel.Counter <-> CounterVm.CurrentCounter`.
//! Each handler writes to the opposite side only when the value differs, so a
//! propagated write is never echoed back.

use crate::models::CounterModel;
use crate::mvvm::{
    DataSourceLifecycle, DataSourceState, NotifyPropertyChanged, PropertyChanged,
    PropertyChangedHandler, ReentryPolicy, Result, Subscription, VmDataSource,
};
use crate::view_models::CounterVm;
use std::sync::Arc;

const NAME: &str = "CounterVmDataSource";

pub struct CounterVmDataSource {
    counter_vm: Arc<CounterVm>,
    counter_model: Arc<CounterModel>,
    lifecycle: DataSourceLifecycle,
}

impl CounterVmDataSource {
    pub fn new(
        counter_vm: Arc<CounterVm>,
        counter_model: Arc<CounterModel>,
        policy: ReentryPolicy,
    ) -> Self {
        Self {
            counter_vm,
            counter_model,
            lifecycle: DataSourceLifecycle::new(NAME, policy),
        }
    }

    /// ViewModel -> Model
    fn on_counter_vm_property_changed(
        counter_vm: &CounterVm,
        counter_model: &CounterModel,
        event: &PropertyChanged,
    ) -> Result<()> {
        if event.property_name == CounterVm::CURRENT_COUNTER {
            let value = counter_vm.current_counter();
            if counter_model.counter() != value {
                tracing::debug!("{NAME}: CurrentCounter -> Counter = {value}");
                counter_model.set_counter(value)?;
            }
        }
        Ok(())
    }

    /// Model -> ViewModel
    fn on_counter_model_property_changed(
        counter_vm: &CounterVm,
        counter_model: &CounterModel,
        event: &PropertyChanged,
    ) -> Result<()> {
        if event.property_name == CounterModel::COUNTER {
            let value = counter_model.counter();
            if counter_vm.current_counter() != value {
                tracing::debug!("{NAME}: Counter -> CurrentCounter = {value}");
                counter_vm.set_current_counter(value)?;
            }
        }
        Ok(())
    }

    fn subscribe(&self) -> Vec<Subscription> {
        let vm_weak = Arc::downgrade(&self.counter_vm);
        let model_weak = Arc::downgrade(&self.counter_model);

        let vm_handler: PropertyChangedHandler = {
            let vm_weak = vm_weak.clone();
            let model_weak = model_weak.clone();
            Arc::new(move |event: &PropertyChanged| {
                if let (Some(vm), Some(model)) = (vm_weak.upgrade(), model_weak.upgrade()) {
                    if let Err(e) = Self::on_counter_vm_property_changed(&vm, &model, event) {
                        tracing::error!("{NAME}: failed to propagate to model: {e}");
                    }
                }
            })
        };
        let model_handler: PropertyChangedHandler = {
            let vm_weak = vm_weak.clone();
            let model_weak = model_weak.clone();
            Arc::new(move |event: &PropertyChanged| {
                if let (Some(vm), Some(model)) = (vm_weak.upgrade(), model_weak.upgrade()) {
                    if let Err(e) = Self::on_counter_model_property_changed(&vm, &model, event) {
                        tracing::error!("{NAME}: failed to propagate to view model: {e}");
                    }
                }
            })
        };

        let vm_id = self.counter_vm.subscribe(vm_handler);
        let model_id = self.counter_model.subscribe(model_handler);

        vec![
            Subscription::new(move || {
                if let Some(vm) = vm_weak.upgrade() {
                    vm.unsubscribe(vm_id);
                }
            }),
            Subscription::new(move || {
                if let Some(model) = model_weak.upgrade() {
                    model.unsubscribe(model_id);
                }
            }),
        ]
    }
}

impl VmDataSource for CounterVmDataSource {
    fn start(&self) -> Result<()> {
        self.lifecycle.start_with(|| self.subscribe())
    }

    fn dispose(&self) {
        self.lifecycle.dispose();
    }

    fn state(&self) -> DataSourceState {
        self.lifecycle.state()
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

impl Drop for CounterVmDataSource {
    fn drop(&mut self) {
        self.lifecycle.dispose();
    }
}
