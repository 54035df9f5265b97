use super::client::TelegramClient;
use super::types::TelegramConfig;
use crate::config::Config;
use async_trait::async_trait;
use tracing::{debug, error};

/// Delivers notification text to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns whether delivery was confirmed. Failures are logged here and never
    /// reach the caller.
    async fn send_message(&self, message: &str) -> bool;
}

pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            client: TelegramClient::new(TelegramConfig::from_config(config)),
            chat_id: config.telegram_chat_id.clone(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, message: &str) -> bool {
        match self.client.send_message(&self.chat_id, message).await {
            Ok(result) => {
                debug!(message_id = result.message_id, "Message sent: {message}");
                true
            }
            Err(e) => {
                error!("Error sending Telegram message: {e}");
                false
            }
        }
    }
}
