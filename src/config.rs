//! Configuration constants and utilities for bindline
//!
//! Session defaults can be overridden through environment variables and then
//! again through command-line flags.

use crate::mvvm::ReentryPolicy;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::str::FromStr;
use std::time::Duration;

/// Value the counter initializer seeds the model with
pub const DEFAULT_COUNTER_SEED: i32 = 10;

/// Number of days the sample forecast service returns
pub const DEFAULT_FORECAST_DAYS: u64 = 5;

pub const LOG_LEVEL_ENV_VAR: &str = "BINDLINE_LOG_LEVEL";
pub const COUNTER_SEED_ENV_VAR: &str = "BINDLINE_COUNTER_SEED";
pub const FORECAST_DAYS_ENV_VAR: &str = "BINDLINE_FORECAST_DAYS";
pub const REENTRY_POLICY_ENV_VAR: &str = "BINDLINE_REENTRY_POLICY";

/// Map a level name to a tracing level, defaulting to ERROR to reduce noise
pub fn parse_log_level(value: &str) -> tracing::Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    }
}

/// Log level from the environment
pub fn get_log_level() -> tracing::Level {
    std::env::var(LOG_LEVEL_ENV_VAR)
        .map(|value| parse_log_level(&value))
        .unwrap_or(tracing::Level::ERROR)
}

/// Settings for one composition root
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub counter_seed: i32,
    pub forecast_days: u64,
    pub forecast_start: Option<NaiveDate>,
    pub forecast_latency: Duration,
    pub reentry_policy: ReentryPolicy,
    pub initialize_on_create: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            counter_seed: DEFAULT_COUNTER_SEED,
            forecast_days: DEFAULT_FORECAST_DAYS,
            forecast_start: None,
            forecast_latency: Duration::ZERO,
            reentry_policy: ReentryPolicy::Strict,
            initialize_on_create: false,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `BINDLINE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(COUNTER_SEED_ENV_VAR) {
            config.counter_seed = parse_var(COUNTER_SEED_ENV_VAR, &value)?;
        }
        if let Some(value) = lookup(FORECAST_DAYS_ENV_VAR) {
            config.forecast_days = parse_var(FORECAST_DAYS_ENV_VAR, &value)?;
        }
        if let Some(value) = lookup(REENTRY_POLICY_ENV_VAR) {
            config.reentry_policy = value
                .parse::<ReentryPolicy>()
                .with_context(|| format!("invalid {REENTRY_POLICY_ENV_VAR}"))?;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid {name}: `{value}`"))
}
