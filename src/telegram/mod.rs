pub mod client;
pub mod notifier;
pub mod types;

pub use notifier::{Notifier, TelegramNotifier};
