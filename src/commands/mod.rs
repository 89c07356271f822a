//! # Command Implementations
//!
//! Delegates that back the commands factories bind into ViewModels.

pub mod counter;

pub use counter::CounterVmCommandManager;
