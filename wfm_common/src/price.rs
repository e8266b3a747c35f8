//! Per-item pricing result

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};

const ITEM_PAGE_URL: &str = "https://warframe.market/items";

/// Priced item, emitted exactly once per resolved input item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub name: String,
    pub url_name: String,
    pub lowest_price: Option<f64>,
    pub avg_price: Option<i64>,
    pub sold_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PriceResult {
    /// Result with every price field unset
    pub fn empty(item: &CatalogEntry) -> Self {
        Self {
            name: item.name.clone(),
            url_name: item.url_name.clone(),
            lowest_price: None,
            avg_price: None,
            sold_count: None,
            error: None,
        }
    }

    /// Failure result: numeric fields unset, error description recorded
    pub fn failed(item: &CatalogEntry, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::empty(item)
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Public market page for this item
    pub fn market_url(&self) -> String {
        format!("{}/{}", ITEM_PAGE_URL, self.url_name)
    }
}
