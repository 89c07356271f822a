//! Forecast list initializer
//!
//! Clears the model, fetches forecasts, then applies them unless cancellation
//! was requested. The fetch always runs to completion; only the application
//! step is cancellable, so a late cancel discards the whole result and the
//! model never receives partial or stale data.

use crate::models::FetchDataModel;
use crate::mvvm::guard::require;
use crate::mvvm::{CancellationToken, Result, VmInitializerAsync};
use crate::services::WeatherForecastService;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

pub struct FetchDataVmInitializer {
    fetch_data_model: Arc<FetchDataModel>,
    weather_forecast_service: Arc<dyn WeatherForecastService>,
    start_date: Option<NaiveDate>,
}

impl FetchDataVmInitializer {
    pub fn new(
        fetch_data_model: Arc<FetchDataModel>,
        weather_forecast_service: Arc<dyn WeatherForecastService>,
    ) -> Self {
        Self {
            fetch_data_model,
            weather_forecast_service,
            start_date: None,
        }
    }

    /// Fetch from a fixed date instead of today
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    fn start_date(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[async_trait]
impl VmInitializerAsync for FetchDataVmInitializer {
    async fn initialize_async(&self, token: Option<&CancellationToken>) -> Result<()> {
        let token = require(token, "token")?;
        let forecasts = self.fetch_data_model.forecasts();

        forecasts.clear();
        let start_date = self.start_date();
        tracing::debug!("Fetching forecasts from {}", start_date);
        let fetched = self.weather_forecast_service.get_forecast(start_date).await?;

        if token.is_cancellation_requested() {
            tracing::warn!(
                "Initialization cancelled, discarding {} fetched forecasts",
                fetched.len()
            );
            return Ok(());
        }

        tracing::debug!("Applying {} forecasts", fetched.len());
        for forecast in fetched {
            forecasts.push(forecast);
        }
        Ok(())
    }
}

impl fmt::Debug for FetchDataVmInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchDataVmInitializer")
            .field("start_date", &self.start_date)
            .finish()
    }
}
