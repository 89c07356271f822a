//! Forecast list ViewModel

use super::forecast_vm::{ForecastRow, ForecastVm};
use crate::mvvm::{NotifyPropertyChanged, ObservableCollection, PropertyChangedNotifier};
use std::sync::Arc;

#[derive(Debug)]
pub struct FetchDataVm {
    forecasts: ObservableCollection<Arc<ForecastVm>>,
    notifier: PropertyChangedNotifier,
}

impl FetchDataVm {
    pub fn new() -> Self {
        Self {
            forecasts: ObservableCollection::new(),
            notifier: PropertyChangedNotifier::new("FetchDataVm"),
        }
    }

    pub fn forecasts(&self) -> &ObservableCollection<Arc<ForecastVm>> {
        &self.forecasts
    }

    /// Current rows in display order
    pub fn rows(&self) -> Vec<ForecastRow> {
        self.forecasts
            .snapshot()
            .iter()
            .map(|forecast| forecast.row())
            .collect()
    }
}

impl Default for FetchDataVm {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyPropertyChanged for FetchDataVm {
    fn notifier(&self) -> &PropertyChangedNotifier {
        &self.notifier
    }
}
