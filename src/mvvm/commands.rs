//! # Command Pattern
//!
//! Commands expose user actions to the presentation layer.
//! A command pairs an action with an optional executability guard and
//! raises `CanExecuteChanged` when asked to, so observers can re-query it.
//!
//! `execute` never checks `can_execute` itself. The invoking control is
//! responsible for asking first.

use super::error::Result;
use super::events::{EventHandler, EventNotifier, SubscriptionId};
use std::fmt;

/// Event raised by `raise_can_execute_changed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanExecuteChanged {
    pub command: &'static str,
}

/// Command trait for MVVM pattern
pub trait Command<P = ()>: Send + Sync {
    /// Whether the command may run for this parameter
    fn can_execute(&self, parameter: &P) -> bool;

    /// Run the action
    fn execute(&self, parameter: &P) -> Result<()>;

    /// Notify observers that `can_execute` should be re-queried
    fn raise_can_execute_changed(&self);

    fn subscribe_can_execute_changed(&self, handler: EventHandler<CanExecuteChanged>)
        -> SubscriptionId;

    fn unsubscribe_can_execute_changed(&self, id: SubscriptionId) -> bool;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

type ExecuteFn<P> = Box<dyn Fn(&P) -> Result<()> + Send + Sync>;
type CanExecuteFn<P> = Box<dyn Fn(&P) -> bool + Send + Sync>;

/// Command built from closures
pub struct RelayCommand<P = ()> {
    name: &'static str,
    execute: ExecuteFn<P>,
    can_execute: Option<CanExecuteFn<P>>,
    can_execute_changed: EventNotifier<CanExecuteChanged>,
}

impl<P> RelayCommand<P> {
    /// Command that is always executable
    pub fn new(
        name: &'static str,
        execute: impl Fn(&P) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            execute: Box::new(execute),
            can_execute: None,
            can_execute_changed: EventNotifier::new(),
        }
    }

    /// Command guarded by a predicate
    pub fn with_guard(
        name: &'static str,
        execute: impl Fn(&P) -> Result<()> + Send + Sync + 'static,
        can_execute: impl Fn(&P) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            execute: Box::new(execute),
            can_execute: Some(Box::new(can_execute)),
            can_execute_changed: EventNotifier::new(),
        }
    }
}

impl<P: 'static> Command<P> for RelayCommand<P> {
    fn can_execute(&self, parameter: &P) -> bool {
        match &self.can_execute {
            Some(predicate) => predicate(parameter),
            None => true,
        }
    }

    fn execute(&self, parameter: &P) -> Result<()> {
        tracing::debug!("Executing command {}", self.name);
        (self.execute)(parameter)
    }

    fn raise_can_execute_changed(&self) {
        self.can_execute_changed.publish(&CanExecuteChanged { command: self.name });
    }

    fn subscribe_can_execute_changed(
        &self,
        handler: EventHandler<CanExecuteChanged>,
    ) -> SubscriptionId {
        self.can_execute_changed.subscribe(handler)
    }

    fn unsubscribe_can_execute_changed(&self, id: SubscriptionId) -> bool {
        self.can_execute_changed.unsubscribe(id)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<P> fmt::Debug for RelayCommand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("name", &self.name)
            .field("guarded", &self.can_execute.is_some())
            .finish()
    }
}
