use crate::config::Config;
use crate::errors::{PollError, PollResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{error, info};
use url::Url;

/// Source of homework status responses.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch every status change since `timestamp` (Unix seconds).
    async fn get_api_answer(&self, timestamp: i64) -> PollResult<Value>;
}

pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_api_answer(&self, timestamp: i64) -> PollResult<Value> {
        info!(from_date = timestamp, "Requesting homework statuses");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| {
                error!("Error calling the homework API: {e}");
                PollError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::ApiResponse {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(PollError::InvalidBody)
    }
}
