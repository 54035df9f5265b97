pub mod bot;
pub mod config;
pub mod errors;
pub mod observability;
pub mod practicum;
pub mod tasks;
pub mod telegram;
#[cfg(test)]
pub mod test_helpers;

pub use bot::{run, RunMode};
pub use config::Config;
pub use errors::{BotError, ConfigError, PollError};
