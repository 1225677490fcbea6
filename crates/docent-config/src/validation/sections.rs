//! Per-section validators: model, conversation, and request.

use crate::schema::DocentConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate model constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &DocentConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.name", &model.name);
    validate_non_empty(errors, "model.api_key_env", &model.api_key_env);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);

    if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
        errors.push(format!(
            "model.base_url = {:?} must start with http:// or https://",
            model.base_url
        ));
    }
}

/// Validate conversation constraints.
pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &DocentConfig) {
    validate_non_empty(
        errors,
        "conversation.system_prompt",
        &config.conversation.system_prompt,
    );
    validate_non_empty(
        errors,
        "conversation.summarizer_prompt",
        &config.conversation.summarizer_prompt,
    );
}

/// Validate request policy constraints.
pub(crate) fn validate_request(errors: &mut Vec<String>, config: &DocentConfig) {
    validate_range(
        errors,
        "request.timeout_secs",
        config.request.timeout_secs,
        0,
        3600,
    );
    validate_range(errors, "request.retries", config.request.retries, 0, 10);
}
