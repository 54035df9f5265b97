use crate::errors::{PollError, PollResult};
use crate::observability::LineFormat;
use crate::practicum::HomeworkApi;
use crate::telegram::Notifier;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Subscriber;

/// Homework API that replays canned responses and records every `from_date` it was asked for.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<VecDeque<PollResult<Value>>>,
    requested: Mutex<Vec<i64>>,
}

impl FakeApi {
    pub fn with_responses(responses: Vec<PollResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomeworkApi for FakeApi {
    async fn get_api_answer(&self, timestamp: i64) -> PollResult<Value> {
        self.requested.lock().unwrap().push(timestamp);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(PollError::ApiResponse { status: 503 }))
    }
}

/// Notifier that records messages instead of sending them.
pub struct FakeNotifier {
    deliver: bool,
    sent: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
}

impl Default for FakeNotifier {
    fn default() -> Self {
        Self {
            deliver: true,
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
        }
    }
}

impl FakeNotifier {
    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            deliver: false,
            ..Default::default()
        }
    }

    /// Messages that were delivered.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send_message(&self, message: &str) -> bool {
        *self.attempts.lock().unwrap() += 1;
        if self.deliver {
            self.sent.lock().unwrap().push(message.to_string());
        }
        self.deliver
    }
}

/// In-memory log sink shared between a subscriber and the test reading it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut *self.0.lock().unwrap(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Subscriber writing every event in the log file format to the returned buffer.
pub fn line_subscriber() -> (impl Subscriber + Send + Sync, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .event_format(LineFormat)
        .finish();
    (subscriber, buffer)
}
