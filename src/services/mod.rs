//! # Services Layer
//!
//! External collaborators injected into initializers. The runtime treats them
//! as opaque capabilities and never defines their transport.

pub mod weather;

pub use weather::{SampleWeatherForecastService, WeatherForecastService, SUMMARIES};
