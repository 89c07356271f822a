//! Counter command delegates
//!
//! Actions bound into `CounterVm` commands. They write to the Model; the
//! change reaches the ViewModel through `CounterVmDataSource`.

use crate::models::CounterModel;
use crate::mvvm::Result;
use std::sync::Arc;

#[derive(Debug)]
pub struct CounterVmCommandManager {
    counter_model: Arc<CounterModel>,
}

impl CounterVmCommandManager {
    pub fn new(counter_model: Arc<CounterModel>) -> Self {
        Self { counter_model }
    }

    /// Action behind `IncrementCountCommand`
    pub fn increment_count_execute(&self, _parameter: &()) -> Result<()> {
        let next = self.counter_model.counter().saturating_add(1);
        self.counter_model.set_counter(next)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_should_write_through_to_model() {
        let model = Arc::new(CounterModel::new());
        let manager = CounterVmCommandManager::new(Arc::clone(&model));

        manager.increment_count_execute(&()).unwrap();
        manager.increment_count_execute(&()).unwrap();

        assert_eq!(model.counter(), 2);
    }

    #[test]
    fn increment_should_saturate_at_max() {
        let model = Arc::new(CounterModel::new());
        model.set_counter(i32::MAX).unwrap();
        let manager = CounterVmCommandManager::new(Arc::clone(&model));

        manager.increment_count_execute(&()).unwrap();

        assert_eq!(model.counter(), i32::MAX);
    }
}
