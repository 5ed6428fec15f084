//! Tool Configuration
//!
//! Handles loading configuration from environment variables, honoring a
//! `.env` file when present.

use serde::Deserialize;

use crate::encoder::HEX_WORD_LEN;

/// Tool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Output column width for the emitted blob
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

fn default_line_width() -> usize {
    HEX_WORD_LEN
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self {
            line_width: std::env::var("LINE_WIDTH")
                .ok()
                .and_then(|w| w.parse().ok())
                .filter(|w| *w > 0)
                .unwrap_or_else(default_line_width),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            json_logs: std::env::var("JSON_LOGS").unwrap_or_default() == "true",
        }
    }
}
