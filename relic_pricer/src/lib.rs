//! Relic Pricer - Warframe relic reward price checker
//!
//! Reads reward item names from a screenshot (or a typed search), resolves
//! them against the Warframe Market item catalog and looks up live sell
//! orders and recent trade statistics for each item concurrently.

pub mod aggregator;
pub mod catalog_cache;
pub mod config;
pub mod extraction;
pub mod formatters;
pub mod item_index;
pub mod market;
pub mod pricing;
pub mod scan;

pub use aggregator::{collect_prices, fetch_prices, order_by_input, price_item};
pub use catalog_cache::{CatalogCache, CatalogStore, Clock, FileStore, MemoryStore, SystemClock};
pub use config::MarketConfig;
pub use extraction::{Extractor, GeminiExtractor, OcrSpaceExtractor};
pub use item_index::ItemIndex;
pub use market::MarketClient;
pub use scan::{scan_image, search_price, ScanReport};
pub use wfm_common::{CatalogEntry, MarketError, Platform, PriceResult, Result};
