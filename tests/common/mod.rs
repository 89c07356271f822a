//! Common test utilities and infrastructure
//!
//! This module provides the Cucumber world and the scripted collaborators it
//! injects into the composition root.

pub mod world;

#[allow(unused_imports)]
pub use world::{BindlineWorld, ScriptedForecastService};
