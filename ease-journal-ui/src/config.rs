//! Embedded Configuration
//!
//! The app ships with `ease-journal.toml` compiled in.

use ease_journal::{Config, ConfigError};

const EMBEDDED_CONFIG: &str = include_str!("../ease-journal.toml");

/// Parse the compiled-in configuration
pub fn embedded() -> Result<Config, ConfigError> {
    Config::from_toml_str(EMBEDDED_CONFIG)
}
