//! # Bindline - MVVM Binding Runtime
//!
//! Keeps a ViewModel and its Model synchronized without either side knowing
//! about the other, assembled per page by one-shot factories.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  PropertyChanged  ┌──────────────┐  PropertyChanged  ┌─────────┐
//! │  ViewModel  │──────────────────►│  DataSource  │◄──────────────────│  Model  │
//! │             │◄──────────────────│              │──────────────────►│         │
//! │ - Bindables │   guarded write   │ - Handlers   │   guarded write   │ - State │
//! │ - Commands  │                   │ - Lifecycle  │                   │         │
//! └─────────────┘                   └──────────────┘                   └─────────┘
//!        ▲                                                                  ▲
//!        │ bundle                                                   seed    │
//! ┌──────────────┐        resolve         ┌──────────┐            ┌─────────────┐
//! │   Factory    │───────────────────────►│ Resolver │───────────►│ Initializer │
//! └──────────────┘                        └──────────┘            └─────────────┘
//! ```
//!
//! A data source only writes when the target value differs, so a change
//! crossing the boundary stops after one hop instead of echoing forever.

pub mod cmd_args;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod data_sources;
pub mod factories;
pub mod initializers;
pub mod models;
pub mod mvvm;
pub mod page_key;
pub mod services;
pub mod view_models;

// Re-export main types for easy access
pub use controllers::{AppController, CompositionRoot};
pub use mvvm::{MvvmError, Result};
pub use page_key::PageKey;
