//! Low-stock surveillance.
//!
//! After every insertion the engine hands the new queue length to
//! [`AlarmPolicy::check`]. A length at or below the threshold raises a
//! [`LowStockAlarm`], which is both logged and appended to the [`AlarmLog`].
//! The log also remembers which keys currently sit in alarm, so a key that
//! grows past the threshold has its alarm cleared.

use std::collections::BTreeSet;
use std::fmt;

use silo_events::StockKey;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmPolicy {
    /// Inclusive upper bound for a low-stock queue length
    pub threshold: usize,
}

impl AlarmPolicy {
    pub const DEFAULT_THRESHOLD: usize = 2;

    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn is_low(&self, count: usize) -> bool {
        count <= self.threshold
    }

    /// Checks the post-insertion `count` of `key` and records the result.
    pub fn check(&self, count: usize, key: StockKey, log: &mut AlarmLog) -> AlarmOutcome {
        if self.is_low(count) {
            let alarm = LowStockAlarm { key, count };
            warn!(key = %key, count, threshold = self.threshold, "low stock");
            log.record(alarm);
            return AlarmOutcome::Raised(alarm);
        }

        if log.clear(&key) {
            info!(key = %key, count, threshold = self.threshold, "stock recovered");
            return AlarmOutcome::Cleared;
        }

        AlarmOutcome::Quiet
    }
}

impl Default for AlarmPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

/// A single low-stock notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockAlarm {
    pub key: StockKey,
    /// Queue length when the alarm fired
    pub count: usize,
}

impl fmt::Display for LowStockAlarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surveillance : Stock faible sur {} ({} restants)",
            self.key, self.count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmOutcome {
    Raised(LowStockAlarm),
    /// The key was in alarm and is now above the threshold
    Cleared,
    Quiet,
}

#[derive(Debug, Default)]
pub struct AlarmLog {
    entries: Vec<LowStockAlarm>,
    active: BTreeSet<StockKey>,
}

impl AlarmLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, alarm: LowStockAlarm) {
        self.active.insert(alarm.key);
        self.entries.push(alarm);
    }

    fn clear(&mut self, key: &StockKey) -> bool {
        self.active.remove(key)
    }

    /// Every notification raised so far, oldest first.
    pub fn entries(&self) -> &[LowStockAlarm] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_active(&self, key: &StockKey) -> bool {
        self.active.contains(key)
    }

    /// Keys currently in alarm, sorted.
    pub fn active(&self) -> impl Iterator<Item = &StockKey> + '_ {
        self.active.iter()
    }
}
