//! Docent configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docent_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ConversationConfig, DocentConfig, DocumentInjectionMode, LogLevel, LoggingConfig,
    ModelConfig, RequestConfig,
};

use docent_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<DocentConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// trigger for creating the default.
pub fn load_config_from(path: &Path) -> Result<DocentConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
