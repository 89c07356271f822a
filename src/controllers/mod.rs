//! # Controllers
//!
//! Session wiring and the command-line driver that exercises it.

pub mod app_controller;
pub mod composition_root;

pub use app_controller::AppController;
pub use composition_root::CompositionRoot;
