// StockStore — per-key inventory queue storage
//
// The engine needs a container that maps
//     StockKey  ->  InventoryQueue
// and creates the queue the first time a key is seen.
//
// Unlike a dense numeric id, StockKey spans letter x u32, so direct array
// indexing is out. A HashMap gives O(1) fetch-or-create through the entry
// API. HashMap iteration order is arbitrary though, and the stock report
// lists keys in the order they first appeared, so a Vec<StockKey> is kept
// alongside as the iteration index. It is only touched when a key is
// created, never on a plain insertion into an existing queue.
//
// Keys are never removed.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use silo_events::StockKey;

use crate::inventory_queue::InventoryQueue;

#[derive(Debug, Default)]
pub struct StockStore {
    queues: HashMap<StockKey, InventoryQueue>,
    /// Keys in first-insertion order
    order: Vec<StockKey>,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the queue for `key`, creating an empty one on first use.
    /// After this call the store always has an entry for `key`.
    pub fn get_or_create(&mut self, key: StockKey) -> &mut InventoryQueue {
        match self.queues.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(key);
                entry.insert(InventoryQueue::new(key))
            }
        }
    }

    pub fn get(&self, key: &StockKey) -> Option<&InventoryQueue> {
        self.queues.get(key)
    }

    pub fn contains(&self, key: &StockKey) -> bool {
        self.queues.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total units across every queue.
    pub fn total_items(&self) -> usize {
        self.queues.values().map(InventoryQueue::len).sum()
    }

    /// Queues in the order their keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &InventoryQueue> + '_ {
        self.order.iter().filter_map(|key| self.queues.get(key))
    }
}
