//! Forecast row ViewModel
//!
//! Presentation shape of one `WeatherForecast`: the date as short text and a
//! derived Fahrenheit temperature.

use crate::models::WeatherForecast;
use crate::mvvm::{NotifyPropertyChanged, PropertyChangedNotifier, Result};
use parking_lot::Mutex;
use serde::Serialize;

const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Celsius to Fahrenheit, rounded to the nearest degree.
///
/// Rounds instead of truncating, so 20 °C reads 68 °F rather than 67 °F.
/// Results outside the `i32` range saturate.
pub fn fahrenheit(temperature_c: i32) -> i32 {
    (32.0 + (f64::from(temperature_c) / 0.5556).round()) as i32
}

/// Plain copy of a row for rendering or serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRow {
    pub date: String,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

#[derive(Debug)]
struct ForecastFields {
    date: String,
    temperature_c: i32,
    summary: String,
}

#[derive(Debug)]
pub struct ForecastVm {
    model: WeatherForecast,
    fields: Mutex<ForecastFields>,
    notifier: PropertyChangedNotifier,
}

impl ForecastVm {
    pub const DATE: &'static str = "Date";
    pub const TEMPERATURE_C: &'static str = "TemperatureC";
    pub const TEMPERATURE_F: &'static str = "TemperatureF";
    pub const SUMMARY: &'static str = "Summary";

    /// Map a domain forecast into its presentation record
    pub fn from_forecast(forecast: &WeatherForecast) -> Self {
        Self {
            model: forecast.clone(),
            fields: Mutex::new(ForecastFields {
                date: forecast.date.format(SHORT_DATE_FORMAT).to_string(),
                temperature_c: forecast.temperature_c,
                summary: forecast.summary.clone(),
            }),
            notifier: PropertyChangedNotifier::new("ForecastVm"),
        }
    }

    /// The forecast this row was built from
    pub fn model(&self) -> &WeatherForecast {
        &self.model
    }

    pub fn date(&self) -> String {
        self.fields.lock().date.clone()
    }

    pub fn temperature_c(&self) -> i32 {
        self.fields.lock().temperature_c
    }

    pub fn temperature_f(&self) -> i32 {
        fahrenheit(self.temperature_c())
    }

    pub fn summary(&self) -> String {
        self.fields.lock().summary.clone()
    }

    pub fn set_date(&self, date: impl Into<String>) -> Result<bool> {
        let date = date.into();
        {
            let mut fields = self.fields.lock();
            if fields.date == date {
                return Ok(false);
            }
            fields.date = date;
        }
        self.notifier.notify_changed(Self::DATE)?;
        Ok(true)
    }

    /// Also raises `TemperatureF`, which is derived from it
    pub fn set_temperature_c(&self, temperature_c: i32) -> Result<bool> {
        {
            let mut fields = self.fields.lock();
            if fields.temperature_c == temperature_c {
                return Ok(false);
            }
            fields.temperature_c = temperature_c;
        }
        self.notifier.notify_changed(Self::TEMPERATURE_C)?;
        self.notifier.notify_changed(Self::TEMPERATURE_F)?;
        Ok(true)
    }

    pub fn set_summary(&self, summary: impl Into<String>) -> Result<bool> {
        let summary = summary.into();
        {
            let mut fields = self.fields.lock();
            if fields.summary == summary {
                return Ok(false);
            }
            fields.summary = summary;
        }
        self.notifier.notify_changed(Self::SUMMARY)?;
        Ok(true)
    }

    pub fn row(&self) -> ForecastRow {
        let fields = self.fields.lock();
        ForecastRow {
            date: fields.date.clone(),
            temperature_c: fields.temperature_c,
            temperature_f: fahrenheit(fields.temperature_c),
            summary: fields.summary.clone(),
        }
    }
}

impl NotifyPropertyChanged for ForecastVm {
    fn notifier(&self) -> &PropertyChangedNotifier {
        &self.notifier
    }
}
