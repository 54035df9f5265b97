use crate::errors::{PollError, PollResult};
use serde_json::Value;
use std::str::FromStr;
use tracing::info;

/// Review states the homework API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }
}

/// Turn a homework record into the notification text.
pub fn parse_status(homework: &Value) -> PollResult<String> {
    info!("Extracting homework status");

    let name = match homework.get("homework_name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => return Err(PollError::MissingField("homework_name")),
    };

    let status = match homework.get("status") {
        Some(Value::String(status)) => status.parse::<HomeworkStatus>()?,
        Some(other) => return Err(PollError::UnknownStatus(other.to_string())),
        None => return Err(PollError::UnknownStatus("<missing>".to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_message() {
        let homework = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&homework).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_every_status_uses_its_verdict() {
        for (code, status) in [
            ("approved", HomeworkStatus::Approved),
            ("reviewing", HomeworkStatus::Reviewing),
            ("rejected", HomeworkStatus::Rejected),
        ] {
            let homework = json!({"homework_name": "sprint_7", "status": code, "id": 7});
            let message = parse_status(&homework).unwrap();
            assert_eq!(
                message,
                format!(
                    "Изменился статус проверки работы \"sprint_7\". {}",
                    status.verdict()
                )
            );
        }
    }

    #[test]
    fn test_unknown_status_fails() {
        let homework = json!({"homework_name": "hw2", "status": "bogus"});
        match parse_status(&homework) {
            Err(PollError::UnknownStatus(status)) => assert_eq!(status, "bogus"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_status_fails_like_unknown() {
        let homework = json!({"homework_name": "hw2"});
        assert!(matches!(
            parse_status(&homework),
            Err(PollError::UnknownStatus(_))
        ));

        let homework = json!({"homework_name": "hw2", "status": null});
        assert!(matches!(
            parse_status(&homework),
            Err(PollError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let homework = json!({"homework_name": "hw2", "status": "Approved"});
        assert!(matches!(
            parse_status(&homework),
            Err(PollError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_missing_homework_name() {
        let homework = json!({"status": "approved"});
        assert!(matches!(
            parse_status(&homework),
            Err(PollError::MissingField("homework_name"))
        ));
    }

    #[test]
    fn test_name_checked_before_status() {
        let homework = json!({"status": "bogus"});
        assert!(matches!(
            parse_status(&homework),
            Err(PollError::MissingField("homework_name"))
        ));
    }
}
