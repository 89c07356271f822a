use crate::config::SessionConfig;
use crate::mvvm::ReentryPolicy;
use crate::page_key::PageKey;
use chrono::NaiveDate;
use std::ffi::OsString;
use std::time::Duration;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Page family to drive: `counter` or `fetch-data`
    #[clap(short = 'p', long, default_value = "counter", help = "page to run")]
    page: PageKey,

    /// Number of times the increment command is executed on the counter page
    #[clap(short = 'n', long, default_value_t = 1, help = "increment count")]
    increments: u32,

    #[clap(short = 's', long, help = "counter seed (overrides BINDLINE_COUNTER_SEED)")]
    seed: Option<i32>,

    #[clap(short = 'd', long, help = "forecast days (overrides BINDLINE_FORECAST_DAYS)")]
    days: Option<u64>,

    /// First forecast date, `YYYY-MM-DD`. Defaults to today.
    #[clap(long, help = "first forecast date")]
    start_date: Option<NaiveDate>,

    #[clap(long, help = "simulated forecast latency in milliseconds")]
    latency_ms: Option<u64>,

    /// Cancel the token before the forecast fetch completes
    #[clap(long, help = "cancel forecast initialization")]
    cancel: bool,

    #[clap(long, help = "print forecasts as JSON")]
    json: bool,

    /// Repeat start/create calls become no-ops instead of errors
    #[clap(long, help = "tolerate repeated start/create")]
    tolerant: bool,

    #[clap(long, help = "seed the counter while the factory creates it")]
    initialize_on_create: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    page: PageKey,
    increments: u32,
    seed: Option<i32>,
    days: Option<u64>,
    start_date: Option<NaiveDate>,
    latency_ms: Option<u64>,
    cancel: bool,
    json: bool,
    tolerant: bool,
    initialize_on_create: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            page: args.page,
            increments: args.increments,
            seed: args.seed,
            days: args.days,
            start_date: args.start_date,
            latency_ms: args.latency_ms,
            cancel: args.cancel,
            json: args.json,
            tolerant: args.tolerant,
            initialize_on_create: args.initialize_on_create,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn page(&self) -> PageKey {
        self.page
    }

    pub fn increments(&self) -> u32 {
        self.increments
    }

    pub fn cancel(&self) -> bool {
        self.cancel
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Layer flags given on the command line over `config`
    pub fn apply_to(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(seed) = self.seed {
            config.counter_seed = seed;
        }
        if let Some(days) = self.days {
            config.forecast_days = days;
        }
        if let Some(start_date) = self.start_date {
            config.forecast_start = Some(start_date);
        }
        if let Some(latency_ms) = self.latency_ms {
            config.forecast_latency = Duration::from_millis(latency_ms);
        }
        if self.tolerant {
            config.reentry_policy = ReentryPolicy::Tolerant;
        }
        if self.initialize_on_create {
            config.initialize_on_create = true;
        }
        config
    }
}
