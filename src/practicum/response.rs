use crate::errors::{PollError, PollResult};
use serde_json::Value;
use tracing::info;

/// Validate the shape of an API response and return its `homeworks` list.
pub fn check_response(response: &Value) -> PollResult<&[Value]> {
    info!("Checking API response");

    let object = response
        .as_object()
        .ok_or_else(|| PollError::type_mismatch("API response", "an object"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingKey("homeworks"))?;
    if !object.contains_key("current_date") {
        return Err(PollError::MissingKey("current_date"));
    }

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| PollError::type_mismatch("homeworks", "a list"))
}
