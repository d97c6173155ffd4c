//! Sample inventory records loaded at store construction.

use crate::item::ItemFields;

/// Initial inventory collection shown on first launch.
pub fn seed_items() -> Vec<ItemFields> {
    vec![
        ItemFields {
            name: "Laptop Dell XPS 13".to_string(),
            description: "High-performance laptop for development work".to_string(),
            category: "Electronics".to_string(),
            quantity: 15,
            unit_price: 1299.99,
            supplier: "Dell Technologies".to_string(),
            sku: "DELL-XPS13-001".to_string(),
            location: "Warehouse A - Shelf 1".to_string(),
            min_stock_level: 5,
        },
        ItemFields {
            name: "Office Chair Ergonomic".to_string(),
            description: "Comfortable ergonomic office chair".to_string(),
            category: "Furniture".to_string(),
            quantity: 3,
            unit_price: 299.99,
            supplier: "Office Depot".to_string(),
            sku: "CHAIR-ERG-001".to_string(),
            location: "Warehouse B - Section 2".to_string(),
            min_stock_level: 10,
        },
        ItemFields {
            name: "Wireless Mouse".to_string(),
            description: "Bluetooth wireless mouse with USB receiver".to_string(),
            category: "Electronics".to_string(),
            quantity: 25,
            unit_price: 29.99,
            supplier: "Logitech".to_string(),
            sku: "MOUSE-WIRELESS-001".to_string(),
            location: "Warehouse A - Shelf 3".to_string(),
            min_stock_level: 15,
        },
    ]
}
