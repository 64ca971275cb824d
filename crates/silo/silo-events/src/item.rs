use std::fmt;

use crate::StockKey;

/// Synthetic identifier tagging one unit in a queue.
///
/// `seq` is taken from the queue's insertion counter, which equals the queue
/// length before the push as long as nothing has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    pub key: StockKey,
    pub seq: u64,
}

impl ItemId {
    pub fn new(key: StockKey, seq: u64) -> Self {
        Self { key, seq }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_ID_{}", self.key, self.seq)
    }
}
