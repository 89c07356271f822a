//! # Application Controller
//!
//! Drives one page family end to end from the command line: build the
//! factory, create the bundle, initialize it, exercise it and print the
//! ViewModel state.

use crate::cmd_args::CommandLineArgs;
use crate::config::SessionConfig;
use crate::controllers::CompositionRoot;
use crate::mvvm::{CancellationToken, Factory};
use crate::page_key::PageKey;
use crate::services::{SampleWeatherForecastService, WeatherForecastService};
use crate::view_models::ForecastRow;
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;

pub struct AppController {
    args: CommandLineArgs,
    root: CompositionRoot,
}

impl AppController {
    /// Session configuration from the environment, overridden by `args`,
    /// backed by the sample forecast service
    pub fn new(args: CommandLineArgs) -> Result<Self> {
        let config = args.apply_to(SessionConfig::from_env()?);
        let service = SampleWeatherForecastService::new(config.forecast_days)
            .with_latency(config.forecast_latency);
        Ok(Self::with_service(args, config, Arc::new(service)))
    }

    /// Inject the configuration and forecast service directly
    pub fn with_service(
        args: CommandLineArgs,
        config: SessionConfig,
        forecast_service: Arc<dyn WeatherForecastService>,
    ) -> Self {
        Self {
            args,
            root: CompositionRoot::new(config, forecast_service),
        }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::info!("Running page `{}`", self.args.page());
        match self.args.page() {
            PageKey::Counter => self.run_counter(out),
            PageKey::FetchData => self.run_fetch_data(out).await,
        }
    }

    fn run_counter<W: Write>(&self, out: &mut W) -> Result<()> {
        let bundle = self
            .root
            .counter_factory()?
            .create()
            .context("failed to create counter page")?;

        if !self.root.config().initialize_on_create {
            bundle.initializer().initialize()?;
        }

        let view_model = bundle.view_model();
        writeln!(out, "Counter: {}", view_model.current_counter())?;

        let command = view_model
            .increment_count_command()
            .context("increment command was not bound")?;
        for _ in 0..self.args.increments() {
            if command.can_execute(&()) {
                command.execute(&())?;
            }
        }

        writeln!(out, "Counter: {}", view_model.current_counter())?;
        Ok(())
    }

    async fn run_fetch_data<W: Write>(&self, out: &mut W) -> Result<()> {
        let bundle = self
            .root
            .fetch_data_factory()?
            .create()
            .context("failed to create forecast page")?;

        let token = CancellationToken::new();
        if self.args.cancel() {
            token.cancel();
        }
        bundle.initializer().initialize_async(Some(&token)).await?;

        let rows = bundle.view_model().rows();
        if token.is_cancellation_requested() {
            writeln!(out, "Initialization cancelled; no forecasts applied.")?;
        }

        if self.args.json() {
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        } else {
            write_table(out, &rows)?;
        }
        Ok(())
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[ForecastRow]) -> Result<()> {
    writeln!(
        out,
        "{:<12}{:>10}{:>10}  {}",
        "Date", "Temp. (C)", "Temp. (F)", "Summary"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<12}{:>10}{:>10}  {}",
            row.date, row.temperature_c, row.temperature_f, row.summary
        )?;
    }
    Ok(())
}
