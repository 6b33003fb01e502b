//! Runtime configuration
//!
//! The only required setting is the source ICS feed URL, read from the
//! environment at startup. A missing or empty URL is fatal before any
//! network request is made.

use crate::error::{AppError, AppResult};
use std::env;

/// Environment variable holding the source calendar feed URL
pub const FEED_URL_ENV: &str = "ICS_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - the feed URL is set and non-empty
    /// * `Err(AppError::Config)` - the variable is missing or blank
    pub fn from_env() -> AppResult<Self> {
        let feed_url = env::var(FEED_URL_ENV).map_err(|_| {
            AppError::config(format!(
                "Missing {} environment variable. Please set it to the source calendar feed URL.",
                FEED_URL_ENV
            ))
        })?;

        if feed_url.trim().is_empty() {
            return Err(AppError::config(format!(
                "{} is set but empty. Please provide a valid calendar feed URL.",
                FEED_URL_ENV
            )));
        }

        Ok(Self { feed_url })
    }
}
