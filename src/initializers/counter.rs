//! Counter initializer

use crate::models::CounterModel;
use crate::mvvm::{Result, VmInitializer};
use std::sync::Arc;

/// Seeds `CounterModel` with a starting value
#[derive(Debug)]
pub struct CounterVmInitializer {
    counter_model: Arc<CounterModel>,
    seed: i32,
}

impl CounterVmInitializer {
    pub fn new(counter_model: Arc<CounterModel>, seed: i32) -> Self {
        Self {
            counter_model,
            seed,
        }
    }
}

impl VmInitializer for CounterVmInitializer {
    fn initialize(&self) -> Result<()> {
        tracing::debug!("Seeding counter with {}", self.seed);
        self.counter_model.set_counter(self.seed)?;
        Ok(())
    }
}
