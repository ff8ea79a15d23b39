use super::types::Item;

/// Records the store starts with when seeding is enabled.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("1", "Laptop", "A high-performance laptop for development."),
        Item::new("2", "Keyboard", "A mechanical keyboard with RGB lighting."),
        Item::new("3", "Monitor", "A 27-inch 4K monitor with high color accuracy."),
    ]
}
