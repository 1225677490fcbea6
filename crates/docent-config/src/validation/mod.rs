//! Full configuration validation.
//!
//! Validates numeric ranges and required strings for every section, and
//! collects all problems into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::DocentConfig;
use docent_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DocentConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_model(&mut errors, config);
    sections::validate_conversation(&mut errors, config);
    sections::validate_request(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
