use crate::{
    config::Config,
    errors::{BotResult, ConfigError},
    practicum::PracticumClient,
    tasks::{status_poller::runner::StatusPoller, types::STARTUP_MESSAGE},
    telegram::{Notifier, TelegramNotifier},
};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Poll until the shutdown token is cancelled.
    Forever,
    /// Run a single cycle and return its result.
    Once,
}

/// Check credentials, greet the chat, then poll. Returns before any network activity if a
/// token is missing.
pub async fn run(config: &Config, mode: RunMode, shutdown: CancellationToken) -> BotResult<()> {
    if !config.check_tokens() {
        return Err(ConfigError::MissingTokens(config.missing_tokens()).into());
    }

    info!(
        ?mode,
        endpoint = %config.endpoint,
        suppression = %config.suppression,
        "Bot started"
    );

    let notifier = TelegramNotifier::new(config);
    notifier.send_message(STARTUP_MESSAGE).await;

    let api = PracticumClient::new(config);
    let mut poller = StatusPoller::new(api, notifier, config.suppression);

    match mode {
        RunMode::Once => {
            let outcome = poller.run_logged_cycle().await?;
            info!(?outcome, "Single cycle finished");
        }
        RunMode::Forever => poller.run(config.retry_period, shutdown).await,
    }

    Ok(())
}
