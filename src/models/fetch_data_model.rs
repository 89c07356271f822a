//! Forecast list model

use super::weather_forecast::WeatherForecast;
use crate::mvvm::ObservableCollection;

/// Authoritative list of fetched forecasts
#[derive(Debug, Default)]
pub struct FetchDataModel {
    forecasts: ObservableCollection<WeatherForecast>,
}

impl FetchDataModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forecasts(&self) -> &ObservableCollection<WeatherForecast> {
        &self.forecasts
    }
}
