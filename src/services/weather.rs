//! # Weather Forecast Service
//!
//! The forecast-fetching collaborator consumed by the FetchData initializer,
//! plus an in-process sample implementation used by the binary.

use crate::models::WeatherForecast;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use rand::Rng;
use std::time::Duration;

/// Source of forecasts. Transport errors are returned unchanged to the caller.
#[async_trait]
pub trait WeatherForecastService: Send + Sync {
    async fn get_forecast(&self, start_date: NaiveDate) -> Result<Vec<WeatherForecast>>;
}

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Random forecasts for consecutive days
#[derive(Debug, Clone)]
pub struct SampleWeatherForecastService {
    days: u64,
    latency: Duration,
}

impl SampleWeatherForecastService {
    pub fn new(days: u64) -> Self {
        Self {
            days,
            latency: Duration::ZERO,
        }
    }

    /// Simulate a slow backend
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl WeatherForecastService for SampleWeatherForecastService {
    async fn get_forecast(&self, start_date: NaiveDate) -> Result<Vec<WeatherForecast>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rng = rand::thread_rng();
        let forecasts = (0..self.days)
            .map(|offset| {
                let date = start_date
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(|| anyhow::anyhow!("forecast date out of range"))?;
                let summary = SUMMARIES[rng.gen_range(0..SUMMARIES.len())];
                Ok(WeatherForecast::new(date, rng.gen_range(-20..55), summary))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Generated {} sample forecasts from {}", forecasts.len(), start_date);
        Ok(forecasts)
    }
}
