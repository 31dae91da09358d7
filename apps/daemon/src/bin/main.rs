//! Kelp daemon binary entry point.
//!
//! Loads TOML configuration, constructs the Slack channel and the
//! Claude provider, wires the responder, and runs the axum server
//! with graceful shutdown on ctrl-c.

use anyhow::{Context, Result};
use claude::{Claude, Request};
use history::History;
use kelpd::{AppState, DaemonConfig, router};
use relay::Responder;
use slack::SlackChannel;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "kelp.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        let config = DaemonConfig::load(std::path::Path::new(&config_path))?;
        tracing::info!("loaded configuration from {config_path}");
        config
    } else {
        tracing::info!("no config file at {config_path}, using defaults and environment");
        DaemonConfig::from_toml(kelpd::DEFAULT_CONFIG)?
    };

    if config.slack.bot_token.is_empty() {
        anyhow::bail!("slack bot token is not set (SLACK_BOT_TOKEN or [slack] bot_token)");
    }
    if config.llm.api_key.is_empty() {
        anyhow::bail!("llm api key is not set (ANTHROPIC_API_KEY or [llm] api_key)");
    }

    // Construct the Slack channel and identify ourselves.
    let channel = Arc::new(SlackChannel::new(config.slack.bot_token.as_str()));
    let bot_user = channel
        .auth_test()
        .await
        .context("auth.test failed, check the bot token")?;
    tracing::info!("authenticated as bot user {bot_user}");

    // Construct the provider and responder.
    let provider = Claude::new(llm::Client::new(), &config.llm.api_key)?;
    let request = Request::new(config.llm.model.clone())
        .with_max_tokens(config.llm.max_tokens)
        .with_system(config.llm.system_prompt.clone());
    tracing::info!("provider initialized for model {}", config.llm.model);

    let history = Arc::new(History::with_max_turns(config.history.max_turns));
    let responder = Arc::new(Responder::new(provider, request, history));

    // Bind and serve.
    let app = router(AppState {
        responder,
        channel,
        bot_user,
    });
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("daemon shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
