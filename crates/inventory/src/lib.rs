//! Inventory entity kind: item schema, derived views, and seed data.

pub mod item;
pub mod seed;

pub use item::{
    distinct_category_count, items_in_category, low_stock_items, summary, total_value, Inventory,
    InventorySummary, InventoryStore, ItemFields, ItemId, ItemPatch, ItemRecord,
};
pub use seed::seed_items;
