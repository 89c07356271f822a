//! # Models
//!
//! Domain state holders. Models are the source of truth and know nothing
//! about the ViewModels that mirror them.

pub mod counter_model;
pub mod fetch_data_model;
pub mod weather_forecast;

pub use counter_model::CounterModel;
pub use fetch_data_model::FetchDataModel;
pub use weather_forecast::WeatherForecast;
