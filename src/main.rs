//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Scheme inference and validation of the target URL
//! - Report rendering to stdout or a file
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_audit::initialization::init_logger_with;
use page_audit::{render, validate_and_normalize_url, Auditor, Config};

async fn run(config: Config) -> Result<()> {
    let url = validate_and_normalize_url(&config.url).context("Invalid target URL")?;

    let auditor = Auditor::new(&config).context("Failed to initialize HTTP client")?;
    let result = auditor
        .run_audit(&url)
        .await
        .with_context(|| format!("Audit of {url} failed"))?;

    let report = render(&result, config.format).context("Failed to render report")?;
    match &config.output {
        Some(path) => {
            std::fs::write(path, format!("{report}\n"))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("page_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
