//! Inventory item schema and derived views.

use serde::{Deserialize, Serialize};

use backoffice_core::{record_id_newtype, EntitySchema, EntityStore, Record, RecordId};

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub RecordId);

record_id_newtype!(ItemId);

/// Schema fields of an inventory item.
///
/// No uniqueness is enforced on `sku`; duplicates are accepted silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub supplier: String,
    pub sku: String,
    pub location: String,
    pub min_stock_level: i64,
}

/// Partial update of an inventory item: every field optional.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub supplier: Option<String>,
    pub sku: Option<String>,
    pub location: Option<String>,
    pub min_stock_level: Option<i64>,
}

impl ItemPatch {
    /// Stock adjustment shorthand: patch only the quantity.
    pub fn set_quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

/// Schema marker for the inventory store.
#[derive(Debug)]
pub enum Inventory {}

impl EntitySchema for Inventory {
    type Id = ItemId;
    type Fields = ItemFields;
    type Patch = ItemPatch;

    const KIND: &'static str = "inventory_item";

    fn apply_patch(fields: &mut ItemFields, patch: ItemPatch) {
        if let Some(name) = patch.name {
            fields.name = name;
        }
        if let Some(description) = patch.description {
            fields.description = description;
        }
        if let Some(category) = patch.category {
            fields.category = category;
        }
        if let Some(quantity) = patch.quantity {
            fields.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            fields.unit_price = unit_price;
        }
        if let Some(supplier) = patch.supplier {
            fields.supplier = supplier;
        }
        if let Some(sku) = patch.sku {
            fields.sku = sku;
        }
        if let Some(location) = patch.location {
            fields.location = location;
        }
        if let Some(min_stock_level) = patch.min_stock_level {
            fields.min_stock_level = min_stock_level;
        }
    }
}

pub type InventoryStore = EntityStore<Inventory>;
pub type ItemRecord = Record<Inventory>;

/// Items at or below their minimum stock level, in insertion order.
pub fn low_stock_items(store: &InventoryStore) -> Vec<ItemRecord> {
    store.query(|record| record.fields().quantity <= record.fields().min_stock_level)
}

/// Items in the given category, in insertion order.
pub fn items_in_category(store: &InventoryStore, category: &str) -> Vec<ItemRecord> {
    store.query(|record| record.fields().category == category)
}

/// Total inventory value: Σ quantity × unit price.
pub fn total_value(items: &[ItemRecord]) -> f64 {
    items
        .iter()
        .map(|record| record.fields().quantity as f64 * record.fields().unit_price)
        .sum()
}

/// Number of distinct categories present.
pub fn distinct_category_count(items: &[ItemRecord]) -> usize {
    items
        .iter()
        .map(|record| record.fields().category.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len()
}

/// Dashboard summary of the inventory collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub total_value: f64,
    pub categories: usize,
}

pub fn summary(store: &InventoryStore) -> InventorySummary {
    InventorySummary {
        total_items: store.len(),
        low_stock_items: low_stock_items(store).len(),
        total_value: total_value(store.records()),
        categories: distinct_category_count(store.records()),
    }
}
