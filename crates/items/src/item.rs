use serde::{Deserialize, Serialize};

use catalog_core::ItemId;

/// A catalog entry.
///
/// Items are created once at process start from the seed list and never
/// mutated; callers only ever see serialized copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        short_description: impl Into<String>,
        full_description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            short_description: short_description.into(),
            full_description: full_description.into(),
        }
    }
}
