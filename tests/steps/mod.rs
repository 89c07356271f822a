//! Step definitions for Cucumber tests
//!
//! Steps are organized by page family:
//! - `counter` - two-way counter binding, increment command, lifecycle
//! - `fetch_data` - forecast collection binding and cancellable initialization
//! - `composition` - key resolution against the composition root

pub mod composition;
pub mod counter;
pub mod fetch_data;
