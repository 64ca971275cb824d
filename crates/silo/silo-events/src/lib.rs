pub mod item;
pub mod product_code;

pub use item::ItemId;
pub use product_code::{
    FormatReason, ProductCode, ProductCodeError, ProductType, StockKey, Volume,
};
