//! Item catalog entries from `GET /items`

use serde::{Deserialize, Serialize};

/// One tradable item: display name plus the identifier used in market URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "item_name")]
    pub name: String,
    pub url_name: String,
}

/// A catalog entry selected for pricing
pub type ResolvedItem = CatalogEntry;

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_name: url_name.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    pub payload: ItemsPayload,
}

#[derive(Debug, Deserialize)]
pub struct ItemsPayload {
    pub items: Vec<CatalogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_response_deserializes_and_ignores_extra_fields() {
        let json = r#"{
            "payload": {
                "items": [
                    {"id": "54aae292e7798909064f1575", "item_name": "Forma Blueprint", "url_name": "forma_blueprint", "thumb": "x.png"},
                    {"item_name": "Vasto Prime Barrel", "url_name": "vasto_prime_barrel"}
                ]
            }
        }"#;

        let response: ItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.payload.items.len(), 2);
        assert_eq!(
            response.payload.items[0],
            CatalogEntry::new("Forma Blueprint", "forma_blueprint")
        );
    }

    #[test]
    fn entry_serializes_with_wire_names() {
        let json = serde_json::to_value(CatalogEntry::new("Forma Blueprint", "forma_blueprint"))
            .unwrap();
        assert_eq!(json["item_name"], "Forma Blueprint");
        assert_eq!(json["url_name"], "forma_blueprint");
    }
}
