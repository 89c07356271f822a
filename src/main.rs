//! # Bindline Main Entry Point
//!
//! Runs one page family against the sample forecast service.

use anyhow::Result;
use bindline::cmd_args::CommandLineArgs;
use bindline::{config, AppController};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so page output stays machine-readable
    tracing_subscriber::fmt()
        .with_max_level(config::get_log_level())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let app = AppController::new(args)?;

    let mut stdout = std::io::stdout().lock();
    app.run(&mut stdout).await?;
    Ok(())
}
