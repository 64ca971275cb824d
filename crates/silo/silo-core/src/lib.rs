pub mod alarm;
pub mod inventory_queue;
pub mod stock_store;

pub use alarm::{AlarmLog, AlarmOutcome, AlarmPolicy, LowStockAlarm};
pub use inventory_queue::InventoryQueue;
pub use stock_store::StockStore;
