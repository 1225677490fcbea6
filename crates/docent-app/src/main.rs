mod cli;
mod repl;

use std::sync::Arc;

use docent_ai::{
    CompletionGateway, Conversation, DocumentInjection, OpenAiClient, OpenAiConfig,
    RequestPolicy,
};
use docent_config::{DocentConfig, DocumentInjectionMode, LogLevel};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a `.env` file in the working directory
/// (KEY=VALUE lines). Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn init_logging(cli_directive: Option<&str>, level: LogLevel) {
    let fallback = format!("docent={}", level.as_str());
    let directive: tracing_subscriber::filter::Directive = cli_directive
        .and_then(|d| d.parse().ok())
        .unwrap_or_else(|| fallback.parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn client_config(config: &DocentConfig, model_override: Option<&str>) -> OpenAiConfig {
    let model = model_override.unwrap_or(&config.model.name);
    OpenAiConfig::from_env_var(&config.model.api_key_env)
        .with_model(model)
        .with_temperature(config.model.temperature)
        .with_base_url(&config.model.base_url)
}

fn build_gateway(config: &DocentConfig, model_override: Option<&str>) -> CompletionGateway {
    let client_config = client_config(config, model_override);

    if client_config.api_key.is_none() {
        tracing::warn!(
            "{} is not set; completion requests will fail until it is",
            client_config.api_key_env
        );
    }
    tracing::info!(model = %client_config.model, "completion client ready");

    CompletionGateway::new(Arc::new(OpenAiClient::new(client_config)))
        .with_policy(RequestPolicy::from_secs(
            config.request.timeout_secs,
            config.request.retries,
        ))
        .with_summarizer_prompt(&config.conversation.summarizer_prompt)
}

fn build_conversation(config: &DocentConfig) -> Conversation {
    let injection = match config.conversation.document_injection {
        DocumentInjectionMode::EveryTurn => DocumentInjection::EveryTurn,
        DocumentInjectionMode::Once => DocumentInjection::Once,
    };
    Conversation::new(&config.conversation.system_prompt).with_injection(injection)
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    let loaded = match args.config.as_deref() {
        Some(path) => docent_config::load_config_from(path),
        None => docent_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (DocentConfig::default(), Some(e)),
    };

    init_logging(args.log_level.as_deref(), config.logging.level);
    tracing::info!("Docent v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let gateway = build_gateway(&config, args.model.as_deref());
    let conversation = build_conversation(&config);

    let mut repl = match repl::Repl::new(conversation, gateway) {
        Ok(repl) => repl,
        Err(e) => {
            tracing::error!("Failed to start line editor: {e}");
            eprintln!("docent: cannot read from the terminal: {e}");
            return;
        }
    };

    repl.run().await;
    tracing::info!("Shutdown complete");
}
