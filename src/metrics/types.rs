use std::time::Duration;

use reqwest::StatusCode;

/// What one dispatched request produced. Exactly one variant per request,
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A response was received; the body has been drained and discarded.
    Success { status: StatusCode, latency: Duration },
    /// The request could not be built, or the transport failed.
    Failure { error: String },
}

impl Outcome {
    #[must_use]
    pub const fn failure(error: String) -> Self {
        Outcome::Failure { error }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Numeric status code for reporting; 0 when no response was received.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Success { status, .. } => status.as_u16(),
            Outcome::Failure { .. } => 0,
        }
    }

    /// Latency in whole milliseconds; 0 for failures.
    #[must_use]
    pub fn latency_ms(&self) -> u64 {
        match self {
            Outcome::Success { latency, .. } => {
                u64::try_from(latency.as_millis()).unwrap_or(u64::MAX)
            }
            Outcome::Failure { .. } => 0,
        }
    }

    /// The HTTP status line, e.g. `200 OK`.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        match self {
            Outcome::Success { status, .. } => Some(match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            }),
            Outcome::Failure { .. } => None,
        }
    }
}

/// Arrival-ordered collection of outcomes for one run.
///
/// Created empty, populated through the collection channel while request
/// tasks complete, and sealed once every dispatched request has reported.
/// Arrival order is completion order, not launch order.
#[derive(Debug, Default)]
pub struct ResultSet {
    outcomes: Vec<Outcome>,
}

impl ResultSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
