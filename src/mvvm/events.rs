//! # Change Notification
//!
//! Observer primitives used by Models, ViewModels and Commands.
//!
//! Delivery is synchronous: `publish` invokes every current subscriber on the
//! caller's thread before returning. There is no re-entrancy protection. A
//! handler that writes back to the property it is observing will be notified
//! again from inside its own call, so every cross-boundary write must be
//! guarded by an equality check (see `data_sources`).

use super::error::Result;
use super::guard::ensure_not_blank;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Token returned by `subscribe`, used to remove the handler again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared handler invoked for every published event
pub type EventHandler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Event raised when a named property of an observable object changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChanged {
    /// Type name of the object that raised the event
    pub source: &'static str,
    pub property_name: String,
}

/// Handler type for property change events
pub type PropertyChangedHandler = EventHandler<PropertyChanged>;

/// In-memory subscriber list for a single event stream
pub struct EventNotifier<E> {
    handlers: Mutex<Vec<(SubscriptionId, EventHandler<E>)>>,
    next_id: AtomicU64,
}

impl<E> EventNotifier<E> {
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a handler; it stays registered until `unsubscribe`
    pub fn subscribe(&self, handler: EventHandler<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.lock().push((id, handler));
        id
    }

    /// Remove a handler. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Invoke every current subscriber with the event
    pub fn publish(&self, event: &E) {
        // Snapshot so handlers may subscribe, unsubscribe or publish re-entrantly
        let handlers: Vec<EventHandler<E>> = self
            .handlers
            .lock()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().len()
    }
}

impl<E> Default for EventNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Property change broadcaster embedded in every observable object
#[derive(Debug)]
pub struct PropertyChangedNotifier {
    source: &'static str,
    inner: EventNotifier<PropertyChanged>,
}

impl PropertyChangedNotifier {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            inner: EventNotifier::new(),
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn subscribe(&self, handler: PropertyChangedHandler) -> SubscriptionId {
        self.inner.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Broadcast that `property_name` changed.
    ///
    /// Names are not validated against any schema, but blank names are rejected.
    pub fn notify_changed(&self, property_name: &str) -> Result<()> {
        ensure_not_blank(property_name, "property_name")?;
        self.inner.publish(&PropertyChanged {
            source: self.source,
            property_name: property_name.to_string(),
        });
        Ok(())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

/// Observable capability of Models and ViewModels
pub trait NotifyPropertyChanged {
    /// The notifier owned by this object
    fn notifier(&self) -> &PropertyChangedNotifier;

    fn subscribe(&self, handler: PropertyChangedHandler) -> SubscriptionId {
        self.notifier().subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier().unsubscribe(id)
    }
}
