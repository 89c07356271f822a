//! Resolver keys for the page families

use crate::mvvm::MvvmError;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a page family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Counter,
    FetchData,
}

impl PageKey {
    pub const ALL: [PageKey; 2] = [PageKey::Counter, PageKey::FetchData];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Counter => "counter",
            PageKey::FetchData => "fetch-data",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = MvvmError;

    /// Accepts the short token or the type name of the registered component
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counter" | "CounterVmDataSource" | "CounterVmInitializer" => Ok(PageKey::Counter),
            "fetch-data" | "FetchDataVmDataSource" | "FetchDataVmInitializer" => {
                Ok(PageKey::FetchData)
            }
            other => Err(MvvmError::KeyNotFound(other.to_string())),
        }
    }
}
