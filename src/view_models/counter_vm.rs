//! Counter ViewModel
//!
//! Presentation mirror of `CounterModel` plus the increment command the view
//! binds its button to.

use crate::mvvm::{Command, NotifyPropertyChanged, PropertyChangedNotifier, Result};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;

pub struct CounterVm {
    current_counter: Mutex<i32>,
    increment_count_command: RwLock<Option<Arc<dyn Command>>>,
    notifier: PropertyChangedNotifier,
}

impl CounterVm {
    pub const CURRENT_COUNTER: &'static str = "CurrentCounter";
    pub const INCREMENT_COUNT_COMMAND: &'static str = "IncrementCountCommand";

    pub fn new() -> Self {
        Self {
            current_counter: Mutex::new(0),
            increment_count_command: RwLock::new(None),
            notifier: PropertyChangedNotifier::new("CounterVm"),
        }
    }

    pub fn current_counter(&self) -> i32 {
        *self.current_counter.lock()
    }

    /// Set the displayed counter, raising `CurrentCounter` only on change
    pub fn set_current_counter(&self, value: i32) -> Result<bool> {
        {
            let mut current = self.current_counter.lock();
            if *current == value {
                return Ok(false);
            }
            *current = value;
        }
        self.notifier.notify_changed(Self::CURRENT_COUNTER)?;
        Ok(true)
    }

    pub fn increment_count_command(&self) -> Option<Arc<dyn Command>> {
        self.increment_count_command.read().clone()
    }

    /// Bind the commands created by the counter factory
    pub fn set_commands(&self, increment_count_command: Arc<dyn Command>) -> Result<()> {
        *self.increment_count_command.write() = Some(increment_count_command);
        self.notifier.notify_changed(Self::INCREMENT_COUNT_COMMAND)
    }
}

impl Default for CounterVm {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyPropertyChanged for CounterVm {
    fn notifier(&self) -> &PropertyChangedNotifier {
        &self.notifier
    }
}

impl fmt::Debug for CounterVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterVm")
            .field("current_counter", &self.current_counter())
            .field(
                "increment_count_command",
                &self.increment_count_command().map(|command| command.name()),
            )
            .finish()
    }
}
