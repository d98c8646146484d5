use serde::{Deserialize, Serialize};

use catalog_items::Item;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

// -------------------------
// Response DTOs
// -------------------------

/// Wire representation of an item. The compatibility contract uses camelCase
/// field names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name.clone(),
            short_description: item.short_description.clone(),
            full_description: item.full_description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ItemId;

    #[test]
    fn item_response_serializes_with_camel_case_keys() {
        let item = Item::new(ItemId::new(1), "Wireless Mouse", "short", "full");
        let json = serde_json::to_value(ItemResponse::from(&item)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Wireless Mouse",
                "shortDescription": "short",
                "fullDescription": "full",
            })
        );
    }
}
