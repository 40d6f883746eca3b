//! Phone Book - Main entry point
//!
//! Imports an optional CSV file into a fresh directory and prints the
//! records matching the configured query.

use anyhow::{Context, Result};
use phone_book::{Config, Directory};
use std::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the results)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut directory = Directory::new();

    if let Some(path) = &config.csv_path {
        let csv = fs::read_to_string(path)
            .with_context(|| format!("Failed to read CSV file {}", path.display()))
            .inspect_err(|e| error!("{:#}", e))?;

        let imported = directory.import_from_csv(&csv);
        info!(
            "Imported {} records from {} ({} stored)",
            imported,
            path.display(),
            directory.len()
        );
    }

    for line in directory.find(&config.query) {
        println!("{}", line);
    }

    Ok(())
}
