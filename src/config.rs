//! Configuration management for the phone book binary.
//!
//! Values come from environment variables, with an optional `.env` file
//! loaded first.

use crate::directory::WILDCARD;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the phone book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to import at startup, if any
    pub csv_path: Option<PathBuf>,

    /// Query whose results are printed after import (default: "*")
    pub query: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_BOOK_CSV`: path of a `name;phone;email` file to import
    /// - `PHONE_BOOK_QUERY`: search query to print (default: "*")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let csv_path = match env::var("PHONE_BOOK_CSV") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONE_BOOK_CSV".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let query = env::var("PHONE_BOOK_QUERY").unwrap_or_else(|_| WILDCARD.to_string());
        if query.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_BOOK_QUERY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            csv_path,
            query,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: None,
            query: WILDCARD.to_string(),
            log_level: "error".to_string(),
        }
    }
}
