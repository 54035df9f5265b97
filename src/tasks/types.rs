/// Sent when the latest fetch returned no homework updates.
pub const NO_CHANGES_MESSAGE: &str = "Нет изменений";

/// Sent once after the startup checks pass.
pub const STARTUP_MESSAGE: &str = "Умею работать. Люблю работать.";

/// Printed and logged when a credential is missing at startup.
pub const MISSING_TOKENS_MESSAGE: &str = "Отсутствует токен. Бот остановлен!";

/// Prefix of the error line logged when a poll cycle or the whole run fails.
pub const PROGRAM_FAILURE_MESSAGE: &str = "Сбой в работе программы";
