//! Counter model
//!
//! Holds the authoritative counter value. Written by the counter initializer
//! and by the data source when the ViewModel side changes.

use crate::mvvm::{NotifyPropertyChanged, PropertyChangedNotifier, Result};
use parking_lot::Mutex;

#[derive(Debug)]
pub struct CounterModel {
    counter: Mutex<i32>,
    notifier: PropertyChangedNotifier,
}

impl CounterModel {
    pub const COUNTER: &'static str = "Counter";

    pub fn new() -> Self {
        Self {
            counter: Mutex::new(0),
            notifier: PropertyChangedNotifier::new("CounterModel"),
        }
    }

    pub fn counter(&self) -> i32 {
        *self.counter.lock()
    }

    /// Set the counter, raising `Counter` only if the value changed.
    /// Returns whether it changed.
    pub fn set_counter(&self, value: i32) -> Result<bool> {
        {
            let mut counter = self.counter.lock();
            if *counter == value {
                return Ok(false);
            }
            *counter = value;
        }
        self.notifier.notify_changed(Self::COUNTER)?;
        Ok(true)
    }
}

impl Default for CounterModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyPropertyChanged for CounterModel {
    fn notifier(&self) -> &PropertyChangedNotifier {
        &self.notifier
    }
}
