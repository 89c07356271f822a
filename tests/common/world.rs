//! Cucumber world for the binding runtime
//!
//! Each scenario gets a fresh `CompositionRoot` backed by a scripted forecast
//! service, so no state leaks between scenarios.

use async_trait::async_trait;
use bindline::config::SessionConfig;
use bindline::controllers::CompositionRoot;
use bindline::factories::{CounterFactory, CounterInfrastructure, FetchDataFactory, FetchDataInfrastructure};
use bindline::models::WeatherForecast;
use bindline::mvvm::{
    CancellationToken, Factory, MvvmError, NotifyPropertyChanged, PropertyChanged,
    PropertyChangedHandler,
};
use bindline::services::WeatherForecastService;
use chrono::NaiveDate;
use cucumber::World;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Forecast service whose behavior each scenario scripts up front
#[derive(Default)]
pub struct ScriptedForecastService {
    forecasts: Mutex<Vec<WeatherForecast>>,
    failure: Mutex<Option<String>>,
    cancel_during_fetch: Mutex<Option<CancellationToken>>,
    calls: AtomicUsize,
}

impl ScriptedForecastService {
    pub fn set_forecasts(&self, forecasts: Vec<WeatherForecast>) {
        *self.forecasts.lock() = forecasts;
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock() = Some(message.to_string());
    }

    /// Cancel `token` while the fetch is in flight
    pub fn cancel_during_fetch(&self, token: CancellationToken) {
        *self.cancel_during_fetch.lock() = Some(token);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherForecastService for ScriptedForecastService {
    async fn get_forecast(&self, _start_date: NaiveDate) -> anyhow::Result<Vec<WeatherForecast>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if let Some(token) = self.cancel_during_fetch.lock().as_ref() {
            token.cancel();
        }
        if let Some(message) = self.failure.lock().clone() {
            anyhow::bail!(message);
        }
        Ok(self.forecasts.lock().clone())
    }
}

#[derive(World)]
#[world(init = Self::new)]
pub struct BindlineWorld {
    pub config: SessionConfig,
    pub service: Arc<ScriptedForecastService>,
    root: Option<CompositionRoot>,

    pub counter_factory: Option<CounterFactory>,
    pub counter: Option<CounterInfrastructure>,
    pub fetch_data_factory: Option<FetchDataFactory>,
    pub fetch_data: Option<FetchDataInfrastructure>,
    pub token: Option<CancellationToken>,
    pub resolved_name: Option<&'static str>,

    /// Property names raised by the counter ViewModel
    pub vm_notifications: Arc<Mutex<Vec<String>>>,
    /// Property names raised by the counter Model
    pub model_notifications: Arc<Mutex<Vec<String>>>,

    pub last_error: Option<MvvmError>,
}

impl std::fmt::Debug for BindlineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindlineWorld")
            .field("config", &self.config)
            .field("counter_created", &self.counter.is_some())
            .field("fetch_data_created", &self.fetch_data.is_some())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl BindlineWorld {
    pub fn new() -> Self {
        Self {
            config: SessionConfig {
                forecast_start: NaiveDate::from_ymd_opt(2024, 1, 1),
                ..SessionConfig::default()
            },
            service: Arc::new(ScriptedForecastService::default()),
            root: None,
            counter_factory: None,
            counter: None,
            fetch_data_factory: None,
            fetch_data: None,
            token: None,
            resolved_name: None,
            vm_notifications: Arc::new(Mutex::new(Vec::new())),
            model_notifications: Arc::new(Mutex::new(Vec::new())),
            last_error: None,
        }
    }

    /// The session graph, built from the current config on first use
    pub fn root(&mut self) -> &CompositionRoot {
        if self.root.is_none() {
            let service: Arc<dyn WeatherForecastService> = self.service.clone();
            self.root = Some(CompositionRoot::new(self.config.clone(), service));
        }
        self.root.as_ref().expect("composition root")
    }

    /// Keep the error for a later `Then` step instead of failing the `When`
    pub fn record<T>(&mut self, result: Result<T, MvvmError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(e) => {
                tracing::debug!("Recorded error: {e}");
                self.last_error = Some(e);
                None
            }
        }
    }

    pub fn create_counter_page(&mut self) {
        if self.counter_factory.is_none() {
            let factory = self.root().counter_factory().expect("counter factory");
            self.counter_factory = Some(factory);
        }
        let result = self.counter_factory.as_ref().expect("counter factory").create();
        if let Some(bundle) = self.record(result) {
            if self.counter.is_none() {
                self.watch_counter(&bundle);
                self.counter = Some(bundle);
            }
        }
    }

    pub fn create_fetch_data_page(&mut self) {
        if self.fetch_data_factory.is_none() {
            let factory = self.root().fetch_data_factory().expect("fetch data factory");
            self.fetch_data_factory = Some(factory);
        }
        let result = self
            .fetch_data_factory
            .as_ref()
            .expect("fetch data factory")
            .create();
        if let Some(bundle) = self.record(result) {
            self.fetch_data.get_or_insert(bundle);
        }
    }

    pub fn counter(&self) -> &CounterInfrastructure {
        self.counter.as_ref().expect("counter page has not been created")
    }

    pub fn fetch_data(&self) -> &FetchDataInfrastructure {
        self.fetch_data
            .as_ref()
            .expect("fetch data page has not been created")
    }

    pub fn clear_notifications(&self) {
        self.vm_notifications.lock().clear();
        self.model_notifications.lock().clear();
    }

    fn watch_counter(&mut self, bundle: &CounterInfrastructure) {
        bundle
            .view_model()
            .subscribe(recorder(Arc::clone(&self.vm_notifications)));
        let model = Arc::clone(self.root().counter_model());
        model.subscribe(recorder(Arc::clone(&self.model_notifications)));
    }
}

impl Default for BindlineWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn recorder(log: Arc<Mutex<Vec<String>>>) -> PropertyChangedHandler {
    Arc::new(move |event: &PropertyChanged| {
        log.lock().push(event.property_name.clone());
    })
}
