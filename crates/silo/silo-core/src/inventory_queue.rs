// One FIFO per stock key.
// Units enter at the front and would be consumed from the back, so iterating
// the queue walks from the newest arrival to the oldest one.
// Nothing consumes stock yet; the queue only grows.

use std::collections::VecDeque;

use silo_events::{ItemId, StockKey};

#[derive(Debug, Clone)]
pub struct InventoryQueue {
    /// Key every item in this queue belongs to
    key: StockKey,

    /// Newest at the front, oldest at the back
    items: VecDeque<ItemId>,

    /// Sequence handed to the next pushed item. Never reused, so ids stay
    /// unique even if a consumption path is added later.
    next_seq: u64,
}

impl InventoryQueue {
    pub fn new(key: StockKey) -> Self {
        Self {
            key,
            items: VecDeque::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn key(&self) -> StockKey {
        self.key
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit at the insertion end and returns its identifier.
    pub fn push(&mut self) -> ItemId {
        let id = ItemId::new(self.key, self.next_seq);
        self.next_seq += 1;
        self.items.push_front(id);
        id
    }

    /// Item that would be consumed first.
    pub fn oldest(&self) -> Option<&ItemId> {
        self.items.back()
    }

    pub fn newest(&self) -> Option<&ItemId> {
        self.items.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silo_events::ProductCode;

    fn key(raw: &str) -> StockKey {
        ProductCode::parse(raw).unwrap().stock_key()
    }

    #[test]
    fn push_numbers_items_by_prior_length() {
        let mut queue = InventoryQueue::new(key("A1"));
        for expected in 0..4u64 {
            let before = queue.len() as u64;
            let id = queue.push();
            assert_eq!(id.seq, before);
            assert_eq!(id.seq, expected);
        }
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn iterates_newest_first_and_keeps_oldest_at_the_back() {
        let mut queue = InventoryQueue::new(key("B5"));
        queue.push();
        queue.push();
        queue.push();

        let rendered: Vec<String> = queue.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["B5_ID_2", "B5_ID_1", "B5_ID_0"]);
        assert_eq!(queue.oldest().unwrap().seq, 0);
        assert_eq!(queue.newest().unwrap().seq, 2);
    }

    #[test]
    fn fresh_queue_is_empty() {
        let queue = InventoryQueue::new(key("C1"));
        assert!(queue.is_empty());
        assert!(queue.oldest().is_none());
        assert_eq!(queue.key().to_string(), "C1");
    }
}
