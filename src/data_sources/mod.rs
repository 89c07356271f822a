//! # Data Sources
//!
//! Synchronization engines between each Model and its ViewModel.
//! Every data source follows the same template: named handlers registered on
//! the observable side(s), filtering on the property names they understand and
//! writing to the paired field only when its value differs.

pub mod counter;
pub mod fetch_data;

pub use counter::CounterVmDataSource;
pub use fetch_data::FetchDataVmDataSource;
