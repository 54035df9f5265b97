use std::fmt;
use std::str::FromStr;

/// When the runner records a message as "last sent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuppressionPolicy {
    /// Record after every dispatch attempt, even if delivery failed. A failed send of a
    /// message is not retried until the computed text changes.
    #[default]
    OnAttempt,
    /// Record only after the notifier confirms delivery. A failed send is retried on the
    /// next cycle.
    OnDelivery,
}

impl SuppressionPolicy {
    pub fn should_record(self, delivered: bool) -> bool {
        match self {
            SuppressionPolicy::OnAttempt => true,
            SuppressionPolicy::OnDelivery => delivered,
        }
    }
}

impl FromStr for SuppressionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attempt" => Ok(SuppressionPolicy::OnAttempt),
            "delivery" => Ok(SuppressionPolicy::OnDelivery),
            other => Err(format!("expected `attempt` or `delivery`, got `{other}`")),
        }
    }
}

impl fmt::Display for SuppressionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuppressionPolicy::OnAttempt => write!(f, "attempt"),
            SuppressionPolicy::OnDelivery => write!(f, "delivery"),
        }
    }
}

/// What a successful cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The computed message matched the last sent one; nothing was dispatched.
    Unchanged,
    Sent { delivered: bool },
}
