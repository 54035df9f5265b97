use crate::errors::ConfigError;
use crate::tasks::status_poller::types::SuppressionPolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "program.log";
pub const DEFAULT_LOG_LEVEL: &str = "homework_bot=debug,info";

/// Credentials that must be present before the bot starts polling.
pub const REQUIRED_TOKENS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl From<&str> for LogFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_file: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Everything the bot needs, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: Url,
    pub telegram_api_url: Url,
    pub retry_period: Duration,
    pub suppression: SuppressionPolicy,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Absent tokens become empty strings so
    /// that [`Config::check_tokens`] can report them; malformed optional values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = |key: &str| lookup(key).unwrap_or_default();

        let endpoint = parse_url("PRACTICUM_ENDPOINT", lookup("PRACTICUM_ENDPOINT"), DEFAULT_ENDPOINT)?;
        let telegram_api_url =
            parse_url("TELEGRAM_API_URL", lookup("TELEGRAM_API_URL"), DEFAULT_TELEGRAM_API_URL)?;

        let retry_period = match lookup("RETRY_PERIOD") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::invalid_value("RETRY_PERIOD", &value, e))?;
                if secs == 0 {
                    return Err(ConfigError::invalid_value(
                        "RETRY_PERIOD",
                        &value,
                        "must be greater than zero",
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        let suppression = match lookup("SUPPRESS_ON") {
            Some(value) => value
                .parse::<SuppressionPolicy>()
                .map_err(|e| ConfigError::invalid_value("SUPPRESS_ON", &value, e))?,
            None => SuppressionPolicy::default(),
        };

        let logging = LoggingConfig {
            log_file: lookup("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: lookup("LOG_FORMAT")
                .as_deref()
                .map(LogFormat::from)
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(Self {
            practicum_token: token("PRACTICUM_TOKEN"),
            telegram_token: token("TELEGRAM_TOKEN"),
            telegram_chat_id: token("TELEGRAM_CHAT_ID"),
            endpoint,
            telegram_api_url,
            retry_period,
            suppression,
            logging,
        })
    }

    /// True iff all three credentials are non-empty.
    pub fn check_tokens(&self) -> bool {
        self.missing_tokens().is_empty()
    }

    pub fn missing_tokens(&self) -> Vec<&'static str> {
        let values = [
            &self.practicum_token,
            &self.telegram_token,
            &self.telegram_chat_id,
        ];
        REQUIRED_TOKENS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &redact(&self.practicum_token))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("telegram_api_url", &self.telegram_api_url.as_str())
            .field("retry_period", &self.retry_period)
            .field("suppression", &self.suppression)
            .field("logging", &self.logging)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

fn parse_url(key: &'static str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::invalid_value(key, &raw, e))
}
