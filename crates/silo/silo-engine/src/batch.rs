use silo_core::AlarmOutcome;
use silo_events::{ProductCode, ProductCodeError};
use tracing::warn;

use crate::Insertion;

/// Counters for one accepted batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub inserted: usize,
    pub alarms_raised: usize,
    pub alarms_cleared: usize,
}

impl BatchSummary {
    pub(crate) fn record(&mut self, insertion: &Insertion) {
        self.inserted += 1;
        match insertion.alarm {
            AlarmOutcome::Raised(_) => self.alarms_raised += 1,
            AlarmOutcome::Cleared => self.alarms_cleared += 1,
            AlarmOutcome::Quiet => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("batch rejected: {} malformed token(s)", .rejected.len())]
pub struct BatchError {
    /// In batch order
    pub rejected: Vec<RejectedToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token #{position} '{token}' rejected")]
pub struct RejectedToken {
    /// 0-based index among the comma-separated fields, blanks included
    pub position: usize,
    /// Trimmed token text
    pub token: String,
    #[source]
    pub source: ProductCodeError,
}

/// Non-blank fields of `batch` with their field index.
pub fn tokens(batch: &str) -> impl Iterator<Item = (usize, &str)> {
    batch
        .split(',')
        .enumerate()
        .filter(|(_, token)| !token.trim().is_empty())
}

pub(crate) fn parse_batch(batch: &str) -> Result<Vec<ProductCode>, BatchError> {
    let mut codes = Vec::new();
    let mut rejected = Vec::new();

    for (position, token) in tokens(batch) {
        match ProductCode::parse(token) {
            Ok(code) => codes.push(code),
            Err(source) => {
                warn!(position, token = token.trim(), error = %source, "rejected token");
                rejected.push(RejectedToken {
                    position,
                    token: token.trim().to_string(),
                    source,
                });
            }
        }
    }

    if rejected.is_empty() {
        Ok(codes)
    } else {
        Err(BatchError { rejected })
    }
}
