//! # Observable Collection
//!
//! Ordered collection that broadcasts structural changes.
//! Only two change kinds exist: items appended and the whole collection reset.

use super::events::{EventHandler, EventNotifier, SubscriptionId};
use parking_lot::Mutex;
use std::fmt;

/// Structural change raised by an `ObservableCollection`
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionChanged<T> {
    /// Items were appended starting at `start_index`
    Added { items: Vec<T>, start_index: usize },

    /// The collection was cleared
    Reset,
}

pub type CollectionChangedHandler<T> = EventHandler<CollectionChanged<T>>;

pub struct ObservableCollection<T> {
    items: Mutex<Vec<T>>,
    changed: EventNotifier<CollectionChanged<T>>,
}

impl<T: Clone> ObservableCollection<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            changed: EventNotifier::new(),
        }
    }

    pub fn subscribe(&self, handler: CollectionChangedHandler<T>) -> SubscriptionId {
        self.changed.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Append one item and raise `Added`
    pub fn push(&self, item: T) {
        let start_index = {
            let mut items = self.items.lock();
            items.push(item.clone());
            items.len() - 1
        };
        self.changed.publish(&CollectionChanged::Added {
            items: vec![item],
            start_index,
        });
    }

    /// Append every item and raise a single `Added`. Nothing is raised for an
    /// empty batch.
    pub fn extend(&self, batch: impl IntoIterator<Item = T>) {
        let batch: Vec<T> = batch.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        let start_index = {
            let mut items = self.items.lock();
            let start_index = items.len();
            items.extend(batch.iter().cloned());
            start_index
        };
        self.changed.publish(&CollectionChanged::Added {
            items: batch,
            start_index,
        });
    }

    /// Remove everything and raise `Reset`
    pub fn clear(&self) {
        self.items.lock().clear();
        self.changed.publish(&CollectionChanged::Reset);
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.items.lock().get(index).cloned()
    }

    /// Copy of the current items
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T: Clone> Default for ObservableCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCollection")
            .field("items", &*self.items.lock())
            .field("changed", &self.changed)
            .finish()
    }
}
