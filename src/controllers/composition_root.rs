//! # Composition Root
//!
//! Wires one session's Models, ViewModels, data sources and initializers
//! together and hands out the page factories.

use crate::commands::CounterVmCommandManager;
use crate::config::SessionConfig;
use crate::data_sources::{CounterVmDataSource, FetchDataVmDataSource};
use crate::factories::{CounterFactory, FetchDataFactory};
use crate::initializers::{CounterVmInitializer, FetchDataVmInitializer};
use crate::models::{CounterModel, FetchDataModel};
use crate::mvvm::{Resolver, Result, VmDataSource, VmInitializer, VmInitializerAsync};
use crate::page_key::PageKey;
use crate::services::WeatherForecastService;
use crate::view_models::{CounterVm, FetchDataVm};
use std::fmt;
use std::sync::Arc;

/// Session-scoped object graph.
///
/// Each Model/ViewModel pair gets exactly one data source, registered as a
/// singleton. Initializers hold no state of their own and are built on every
/// resolve.
pub struct CompositionRoot {
    config: SessionConfig,
    counter_model: Arc<CounterModel>,
    counter_vm: Arc<CounterVm>,
    fetch_data_model: Arc<FetchDataModel>,
    fetch_data_vm: Arc<FetchDataVm>,
    counter_vm_command_manager: Arc<CounterVmCommandManager>,
    data_sources: Resolver<PageKey, dyn VmDataSource>,
    initializers: Resolver<PageKey, dyn VmInitializer>,
    async_initializers: Resolver<PageKey, dyn VmInitializerAsync>,
}

impl CompositionRoot {
    pub fn new(config: SessionConfig, forecast_service: Arc<dyn WeatherForecastService>) -> Self {
        let counter_model = Arc::new(CounterModel::new());
        let counter_vm = Arc::new(CounterVm::new());
        let fetch_data_model = Arc::new(FetchDataModel::new());
        let fetch_data_vm = Arc::new(FetchDataVm::new());
        let counter_vm_command_manager =
            Arc::new(CounterVmCommandManager::new(Arc::clone(&counter_model)));

        let counter_vm_data_source: Arc<dyn VmDataSource> = Arc::new(CounterVmDataSource::new(
            Arc::clone(&counter_vm),
            Arc::clone(&counter_model),
            config.reentry_policy,
        ));
        let fetch_data_vm_data_source: Arc<dyn VmDataSource> =
            Arc::new(FetchDataVmDataSource::new(
                Arc::clone(&fetch_data_vm),
                Arc::clone(&fetch_data_model),
                config.reentry_policy,
            ));
        let data_sources = Resolver::builder()
            .register_singleton(PageKey::Counter, counter_vm_data_source)
            .register_singleton(PageKey::FetchData, fetch_data_vm_data_source)
            .build();

        let initializers = {
            let model = Arc::clone(&counter_model);
            let seed = config.counter_seed;
            Resolver::<PageKey, dyn VmInitializer>::builder()
                .register(PageKey::Counter, move || {
                    Arc::new(CounterVmInitializer::new(Arc::clone(&model), seed))
                        as Arc<dyn VmInitializer>
                })
                .build()
        };

        let async_initializers = {
            let model = Arc::clone(&fetch_data_model);
            let start_date = config.forecast_start;
            Resolver::<PageKey, dyn VmInitializerAsync>::builder()
                .register(PageKey::FetchData, move || {
                    let initializer = FetchDataVmInitializer::new(
                        Arc::clone(&model),
                        Arc::clone(&forecast_service),
                    );
                    let initializer = match start_date {
                        Some(date) => initializer.with_start_date(date),
                        None => initializer,
                    };
                    Arc::new(initializer) as Arc<dyn VmInitializerAsync>
                })
                .build()
        };

        tracing::info!(
            "Composition root ready: {} data sources, seed {}, policy {:?}",
            data_sources.len(),
            config.counter_seed,
            config.reentry_policy
        );

        Self {
            config,
            counter_model,
            counter_vm,
            fetch_data_model,
            fetch_data_vm,
            counter_vm_command_manager,
            data_sources,
            initializers,
            async_initializers,
        }
    }

    pub fn counter_factory(&self) -> Result<CounterFactory> {
        Ok(CounterFactory::new(
            Arc::clone(&self.counter_vm),
            &self.data_sources,
            &self.initializers,
            Arc::clone(&self.counter_vm_command_manager),
            self.config.reentry_policy,
        )?
        .initialize_on_create(self.config.initialize_on_create))
    }

    pub fn fetch_data_factory(&self) -> Result<FetchDataFactory> {
        FetchDataFactory::new(
            Arc::clone(&self.fetch_data_vm),
            &self.data_sources,
            &self.async_initializers,
            self.config.reentry_policy,
        )
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn counter_model(&self) -> &Arc<CounterModel> {
        &self.counter_model
    }

    pub fn fetch_data_model(&self) -> &Arc<FetchDataModel> {
        &self.fetch_data_model
    }

    pub fn data_sources(&self) -> &Resolver<PageKey, dyn VmDataSource> {
        &self.data_sources
    }
}

impl fmt::Debug for CompositionRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionRoot")
            .field("config", &self.config)
            .field("data_sources", &self.data_sources.len())
            .finish()
    }
}
