//! # Factories
//!
//! One-shot assemblers for each page family.

pub mod counter;
pub mod fetch_data;

pub use counter::{CounterFactory, CounterInfrastructure};
pub use fetch_data::{FetchDataFactory, FetchDataInfrastructure};
