pub mod batch;
pub mod report;

pub use batch::{BatchError, BatchSummary, RejectedToken};
pub use report::StockReport;

use silo_core::{AlarmLog, AlarmOutcome, AlarmPolicy, StockStore};
use silo_events::{ItemId, ProductCode, ProductCodeError};
use tracing::{debug, info};

/// Owns the stock map and the alarm log; every mutation goes through here.
#[derive(Debug, Default)]
pub struct InventoryEngine {
    stock: StockStore,
    alarms: AlarmLog,
    policy: AlarmPolicy,
}

/// Result of a single insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub item: ItemId,
    /// Queue length after the push
    pub count: usize,
    pub alarm: AlarmOutcome,
}

impl InventoryEngine {
    pub fn new(policy: AlarmPolicy) -> Self {
        Self {
            stock: StockStore::new(),
            alarms: AlarmLog::new(),
            policy,
        }
    }

    pub fn stock(&self) -> &StockStore {
        &self.stock
    }

    pub fn alarms(&self) -> &AlarmLog {
        &self.alarms
    }

    pub fn policy(&self) -> AlarmPolicy {
        self.policy
    }

    /// Parses `raw` and adds one unit to its queue.
    pub fn insert(&mut self, raw: &str) -> Result<Insertion, ProductCodeError> {
        let code = ProductCode::parse(raw)?;
        Ok(self.insert_code(code))
    }

    /// Adds one unit for an already parsed code, then runs the alarm check
    /// against the new queue length.
    pub fn insert_code(&mut self, code: ProductCode) -> Insertion {
        let key = code.stock_key();

        let queue = self.stock.get_or_create(key);
        let item = queue.push();
        let count = queue.len();
        debug!(key = %key, item = %item, count, "item stored");

        let alarm = self.policy.check(count, key, &mut self.alarms);
        Insertion { item, count, alarm }
    }

    /// Processes a comma-separated batch such as `"A1, A1, B5"`.
    ///
    /// Blank tokens are skipped. Every remaining token is parsed before any
    /// of them is inserted: if one is malformed the whole batch is rejected,
    /// the error lists every bad token, and the engine is left unchanged.
    /// Otherwise tokens are inserted left to right, duplicates included.
    pub fn process_batch(&mut self, batch: &str) -> Result<BatchSummary, BatchError> {
        let codes = batch::parse_batch(batch)?;

        let mut summary = BatchSummary::default();
        for code in codes {
            let insertion = self.insert_code(code);
            summary.record(&insertion);
        }

        info!(
            inserted = summary.inserted,
            alarms_raised = summary.alarms_raised,
            alarms_cleared = summary.alarms_cleared,
            keys = self.stock.len(),
            "batch processed"
        );
        Ok(summary)
    }

    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_to_one_queue_and_checks_alarm() {
        let mut engine = InventoryEngine::default();

        let first = engine.insert(" a1 ").unwrap();
        assert_eq!(first.item.to_string(), "A1_ID_0");
        assert_eq!(first.count, 1);
        assert!(matches!(first.alarm, AlarmOutcome::Raised(_)));

        let second = engine.insert("A1").unwrap();
        assert_eq!(second.item.to_string(), "A1_ID_1");
        assert_eq!(second.count, 2);

        assert_eq!(engine.stock().len(), 1);
        assert_eq!(engine.alarms().len(), 2);
    }

    #[test]
    fn insert_rejects_malformed_code_without_side_effects() {
        let mut engine = InventoryEngine::default();
        assert!(matches!(
            engine.insert("7"),
            Err(ProductCodeError::Format { .. })
        ));
        assert_eq!(engine.insert(""), Err(ProductCodeError::Empty));
        assert!(engine.stock().is_empty());
        assert!(engine.alarms().is_empty());
    }

    #[test]
    fn threshold_comes_from_policy() {
        let mut engine = InventoryEngine::new(AlarmPolicy::new(0));
        engine.process_batch("A1, A1").unwrap();
        assert!(engine.alarms().is_empty());
        assert_eq!(engine.policy().threshold, 0);
    }
}
