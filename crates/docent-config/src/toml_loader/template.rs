//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Docent Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gpt-4o"
# temperature = 0.4                      # 0.0-2.0
# base_url = "https://api.openai.com/v1"
# api_key_env = "OPENAI_API_KEY"         # env var read at request time

[conversation]
# system_prompt = "You are a helpful assistant."
# summarizer_prompt = "You are a helpful assistant that summarizes documents."
# document_injection = "every_turn"      # every_turn | once

[request]
# timeout_secs = 0                       # 0 = wait indefinitely, max 3600
# retries = 0                            # extra attempts on transient errors, max 10

[logging]
# level = "warn"                         # trace | debug | info | warn | error
"##
}
