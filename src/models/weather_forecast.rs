//! Weather forecast domain record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of forecast as returned by the forecast service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: String,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: impl Into<String>) -> Self {
        Self {
            date,
            temperature_c,
            summary: summary.into(),
        }
    }
}
