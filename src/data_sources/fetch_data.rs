//! Forecast list data source
//!
//! One-way binding from `FetchDataModel.forecasts` to `FetchDataVm.forecasts`.
//! Added forecasts are mapped to new `ForecastVm` rows; a reset clears the
//! rows. The ViewModel list has no write-back path.

use crate::models::{FetchDataModel, WeatherForecast};
use crate::mvvm::{
    CollectionChanged, CollectionChangedHandler, DataSourceLifecycle, DataSourceState,
    ReentryPolicy, Result, Subscription, VmDataSource,
};
use crate::view_models::{FetchDataVm, ForecastVm};
use std::sync::Arc;

const NAME: &str = "FetchDataVmDataSource";

pub struct FetchDataVmDataSource {
    fetch_data_vm: Arc<FetchDataVm>,
    fetch_data_model: Arc<FetchDataModel>,
    lifecycle: DataSourceLifecycle,
}

impl FetchDataVmDataSource {
    pub fn new(
        fetch_data_vm: Arc<FetchDataVm>,
        fetch_data_model: Arc<FetchDataModel>,
        policy: ReentryPolicy,
    ) -> Self {
        Self {
            fetch_data_vm,
            fetch_data_model,
            lifecycle: DataSourceLifecycle::new(NAME, policy),
        }
    }

    fn on_forecasts_collection_changed(
        fetch_data_vm: &FetchDataVm,
        change: &CollectionChanged<WeatherForecast>,
    ) {
        match change {
            CollectionChanged::Added { items, .. } => {
                tracing::debug!("{NAME}: mapping {} added forecasts", items.len());
                fetch_data_vm.forecasts().extend(
                    items
                        .iter()
                        .map(|forecast| Arc::new(ForecastVm::from_forecast(forecast))),
                );
            }
            CollectionChanged::Reset => {
                tracing::debug!("{NAME}: forecasts reset");
                fetch_data_vm.forecasts().clear();
            }
        }
    }

    fn subscribe(&self) -> Vec<Subscription> {
        let vm_weak = Arc::downgrade(&self.fetch_data_vm);
        let model_weak = Arc::downgrade(&self.fetch_data_model);

        let handler: CollectionChangedHandler<WeatherForecast> =
            Arc::new(move |change: &CollectionChanged<WeatherForecast>| {
                if let Some(vm) = vm_weak.upgrade() {
                    Self::on_forecasts_collection_changed(&vm, change);
                }
            });
        let id = self.fetch_data_model.forecasts().subscribe(handler);

        vec![Subscription::new(move || {
            if let Some(model) = model_weak.upgrade() {
                model.forecasts().unsubscribe(id);
            }
        })]
    }
}

impl VmDataSource for FetchDataVmDataSource {
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

impl Drop for FetchDataVmDataSource {
    fn drop(&mut self) {
        self.lifecycle.dispose();
    }
}
