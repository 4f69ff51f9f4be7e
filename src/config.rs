//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! The library itself never reads it implicitly; embedding applications can
//! use it to resolve a default storage path and log level.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default file name used when `CONTACT_BOOK_PATH` is not set.
const DEFAULT_STORAGE_PATH: &str = "contact_book.json";

/// Configuration for an embedding application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book snapshot file
    pub storage_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: snapshot file path (default: `contact_book.json`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is fine.
        let _ = dotenvy::dotenv();

        let storage_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_BOOK_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: "error".to_string(),
        }
    }
}
