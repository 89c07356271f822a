//! # ViewModels
//!
//! Presentation-shaped mirrors of the Models. A ViewModel never writes to a
//! Model; every cross-boundary update goes through a data source.

pub mod counter_vm;
pub mod fetch_data_vm;
pub mod forecast_vm;

pub use counter_vm::CounterVm;
pub use fetch_data_vm::FetchDataVm;
pub use forecast_vm::{fahrenheit, ForecastRow, ForecastVm};
