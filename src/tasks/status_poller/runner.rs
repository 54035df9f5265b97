use super::types::{CycleOutcome, SuppressionPolicy};
use crate::{
    errors::PollResult,
    practicum::{check_response, parse_status, HomeworkApi},
    tasks::types::{NO_CHANGES_MESSAGE, PROGRAM_FAILURE_MESSAGE},
    telegram::Notifier,
};
use chrono::Utc;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, Instrument};

/// Polls the homework API and forwards status changes to the notifier.
pub struct StatusPoller<A, N> {
    api: A,
    notifier: N,
    policy: SuppressionPolicy,
    cursor: i64,
    last_message: Option<String>,
    cycles: u64,
}

impl<A: HomeworkApi, N: Notifier> StatusPoller<A, N> {
    pub fn new(api: A, notifier: N, policy: SuppressionPolicy) -> Self {
        Self {
            api,
            notifier,
            policy,
            cursor: now(),
            last_message: None,
            cycles: 0,
        }
    }

    /// Start polling from `cursor` instead of the current time.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// The `from_date` the next fetch will use.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run cycles every `period` until `shutdown` is cancelled. Cycle errors are logged and
    /// never end the loop.
    pub async fn run(&mut self, period: Duration, shutdown: CancellationToken) {
        info!(period_secs = period.as_secs(), "Starting homework status poller");
        loop {
            if shutdown.is_cancelled() {
                break;
            }

            if let Err(e) = self.run_logged_cycle().await {
                error!("{PROGRAM_FAILURE_MESSAGE}: {e}");
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(period) => {}
            }
        }
        info!(cycles = self.cycles, "Homework status poller stopped");
    }

    /// One cycle inside its own `cycle{id}` span.
    pub async fn run_logged_cycle(&mut self) -> PollResult<CycleOutcome> {
        self.cycles += 1;
        let span = info_span!("cycle", id = self.cycles);
        self.run_cycle().instrument(span).await
    }

    /// Fetch, advance the cursor, validate, translate, and notify if the text changed.
    pub async fn run_cycle(&mut self) -> PollResult<CycleOutcome> {
        let response = self.api.get_api_answer(self.cursor).await?;

        self.cursor = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or_else(now);
        debug!(cursor = self.cursor, "Cursor advanced");

        let homeworks = check_response(&response)?;
        let message = match homeworks.first() {
            Some(homework) => parse_status(homework)?,
            None => NO_CHANGES_MESSAGE.to_string(),
        };

        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("Status unchanged, nothing to send");
            return Ok(CycleOutcome::Unchanged);
        }

        let delivered = self.notifier.send_message(&message).await;
        if self.policy.should_record(delivered) {
            self.last_message = Some(message);
        }

        Ok(CycleOutcome::Sent { delivered })
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}
