use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize, Deserialize)]
pub struct TelegramMessage {
    pub chat_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResult {
    pub message_id: i64,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub api_base_url: Url,
}

impl TelegramConfig {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            bot_token: config.telegram_token.clone(),
            api_base_url: config.telegram_api_url.clone(),
        }
    }

    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base_url.as_str().trim_end_matches('/'),
            self.bot_token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        let config = TelegramConfig {
            bot_token: "123:abc".to_string(),
            api_base_url: Url::parse("https://api.telegram.org").unwrap(),
        };
        assert_eq!(
            config.send_message_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_message_skips_unset_fields() {
        let message = TelegramMessage {
            chat_id: "42".to_string(),
            text: "Нет изменений".to_string(),
            disable_web_page_preview: None,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"chat_id": "42", "text": "Нет изменений"}));
    }
}
