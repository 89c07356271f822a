//! # Data Source Lifecycle
//!
//! A data source keeps one Model and one ViewModel in sync by observing both.
//! Concrete data sources live in `crate::data_sources`; this module holds the
//! shared trait and the `Created -> Started -> Disposed` state machine.

use super::error::{MvvmError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::str::FromStr;

/// What a second `start` / `create` does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReentryPolicy {
    /// The repeated call fails
    #[default]
    Strict,
    /// The repeated call is a no-op
    Tolerant,
}

impl FromStr for ReentryPolicy {
    type Err = MvvmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "tolerant" => Ok(Self::Tolerant),
            other => Err(MvvmError::invalid_argument(
                "reentry_policy",
                format!("expected `strict` or `tolerant`, got `{other}`"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceState {
    Created,
    Started,
    Disposed,
}

/// Synchronization engine between a Model and a ViewModel
pub trait VmDataSource: Send + Sync {
    /// Begin observing both sides
    fn start(&self) -> Result<()>;

    /// Stop observing. Terminal; calling it again does nothing.
    fn dispose(&self);

    fn state(&self) -> DataSourceState;

    fn name(&self) -> &'static str;
}

/// Handle that removes one registered handler when cancelled
pub struct Subscription {
    cancel: Box<dyn FnOnce() + Send>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}

struct LifecycleInner {
    state: DataSourceState,
    subscriptions: Vec<Subscription>,
}

/// State machine shared by every concrete data source
pub struct DataSourceLifecycle {
    name: &'static str,
    policy: ReentryPolicy,
    inner: Mutex<LifecycleInner>,
}

impl DataSourceLifecycle {
    pub fn new(name: &'static str, policy: ReentryPolicy) -> Self {
        Self {
            name,
            policy,
            inner: Mutex::new(LifecycleInner {
                state: DataSourceState::Created,
                subscriptions: Vec::new(),
            }),
        }
    }

    /// Transition to `Started`, registering the handlers returned by `subscribe`.
    ///
    /// `subscribe` only runs on the `Created -> Started` transition.
    pub fn start_with(&self, subscribe: impl FnOnce() -> Vec<Subscription>) -> Result<()> {
        let mut inner = self.inner.lock();
        match inner.state {
            DataSourceState::Created => {
                inner.subscriptions = subscribe();
                inner.state = DataSourceState::Started;
                tracing::debug!(
                    "{} started with {} subscriptions",
                    self.name,
                    inner.subscriptions.len()
                );
                Ok(())
            }
            DataSourceState::Started => match self.policy {
                ReentryPolicy::Strict => Err(MvvmError::AlreadyStarted(self.name)),
                ReentryPolicy::Tolerant => {
                    tracing::debug!("{} already started, ignoring start", self.name);
                    Ok(())
                }
            },
            DataSourceState::Disposed => Err(MvvmError::Disposed(self.name)),
        }
    }

    /// Transition to `Disposed` and cancel every subscription
    pub fn dispose(&self) {
        let subscriptions = {
            let mut inner = self.inner.lock();
            if inner.state == DataSourceState::Disposed {
                return;
            }
            inner.state = DataSourceState::Disposed;
            std::mem::take(&mut inner.subscriptions)
        };

        tracing::debug!(
            "{} disposed, releasing {} subscriptions",
            self.name,
            subscriptions.len()
        );
        for subscription in subscriptions {
            subscription.cancel();
        }
    }

    pub fn state(&self) -> DataSourceState {
        self.inner.lock().state
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> ReentryPolicy {
        self.policy
    }
}

impl fmt::Debug for DataSourceLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceLifecycle")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("state", &self.state())
            .finish()
    }
}
