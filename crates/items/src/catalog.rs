use catalog_core::ItemId;

use crate::item::Item;

/// The fixed, ordered set of items held in memory for the process lifetime.
///
/// There is deliberately no add/remove operation: the catalog is read-only
/// after construction, so it can be shared across request handlers without
/// locking. A datastore-backed catalog would slot in as another constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from an explicit item list (tests, future backends).
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The production catalog: the literal seed set, in serving order.
    pub fn seeded() -> Self {
        Self::new(vec![
            Item::new(
                ItemId::new(1),
                "Wireless Mouse",
                "Compact 2.4GHz wireless mouse",
                "A compact 2.4GHz wireless mouse with ergonomic design, \
                 silent clicks, and up to 12 months of battery life.",
            ),
            Item::new(
                ItemId::new(2),
                "Mechanical Keyboard",
                "RGB mechanical keyboard (blue switches)",
                "Full-size mechanical keyboard with RGB backlight, blue switches, \
                 and detachable USB-C cable for gamers and programmers.",
            ),
            Item::new(
                ItemId::new(3),
                "Noise Cancelling Headphones",
                "Over-ear ANC Bluetooth headphones",
                "Over-ear Bluetooth headphones with active noise cancellation, \
                 30 hours battery life, and fast charging support.",
            ),
        ])
    }

    /// All items, in initialization order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Scan for the item with the given identifier, first match wins.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
