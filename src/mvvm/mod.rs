//! # MVVM Runtime
//!
//! Reusable primitives that keep a ViewModel synchronized with its Model.
//! Page-specific Models, ViewModels, data sources, initializers and factories
//! are built on top of these in the sibling modules.

pub mod collection;
pub mod commands;
pub mod data_source;
pub mod error;
pub mod events;
pub mod factory;
pub mod guard;
pub mod initializer;
pub mod resolver;

// Re-export core types
pub use collection::{CollectionChanged, CollectionChangedHandler, ObservableCollection};
pub use commands::{CanExecuteChanged, Command, RelayCommand};
pub use data_source::{
    DataSourceLifecycle, DataSourceState, ReentryPolicy, Subscription, VmDataSource,
};
pub use error::{MvvmError, Result};
pub use events::{
    EventHandler, EventNotifier, NotifyPropertyChanged, PropertyChanged, PropertyChangedHandler,
    PropertyChangedNotifier, SubscriptionId,
};
pub use factory::{CreateGuard, Factory, Infrastructure, InfrastructureBuilder};
pub use initializer::{CancellationToken, VmInitializer, VmInitializerAsync};
pub use resolver::{Resolver, ResolverBuilder};
