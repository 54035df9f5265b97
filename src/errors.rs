use thiserror::Error;

/// Startup errors. Any of these stops the bot before the first poll.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl ConfigError {
    pub fn invalid_value(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised inside a single poll cycle. The runner logs them and keeps going.
#[derive(Debug, Error)]
pub enum PollError {
    // Fetch
    #[error("Request to the homework API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Homework API returned status {status}, expected 200")]
    ApiResponse { status: u16 },
    #[error("Homework API returned a body that is not JSON: {0}")]
    InvalidBody(#[source] reqwest::Error),

    // Response shape
    #[error("{what} is not {expected}")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
    },
    #[error("Key `{0}` is missing from the API response")]
    MissingKey(&'static str),

    // Homework record
    #[error("Key `{0}` is missing from the homework record")]
    MissingField(&'static str),
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}

impl PollError {
    pub fn type_mismatch(what: &'static str, expected: &'static str) -> Self {
        PollError::TypeMismatch { what, expected }
    }
}

/// Bot API failures. These never leave the notifier.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Network error talking to Telegram: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Telegram API error ({status}): {description}")]
    Api { status: u16, description: String },
    #[error("No result in Telegram response")]
    EmptyResult,
}

/// Anything that can end [`crate::bot::run`].
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Poll(#[from] PollError),
}

pub type PollResult<T> = Result<T, PollError>;
pub type BotResult<T> = Result<T, BotError>;
