//! # Initializers
//!
//! Seed each page's Model with its initial content.

pub mod counter;
pub mod fetch_data;

pub use counter::CounterVmInitializer;
pub use fetch_data::FetchDataVmInitializer;
