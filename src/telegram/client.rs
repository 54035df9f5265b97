use super::types::{MessageResult, TelegramConfig, TelegramMessage, TelegramResponse};
use crate::errors::TelegramError;
use reqwest::Client;

pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a plain-text message.
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
    ) -> Result<MessageResult, TelegramError> {
        let message = TelegramMessage {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            disable_web_page_preview: Some(true),
        };

        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let description = response.text().await?;
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description,
            });
        }

        let telegram_response: TelegramResponse<MessageResult> = response.json().await?;

        if !telegram_response.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: telegram_response
                    .description
                    .unwrap_or_else(|| "Unknown Telegram API error".to_string()),
            });
        }

        telegram_response.result.ok_or(TelegramError::EmptyResult)
    }
}
