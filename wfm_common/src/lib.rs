//! Shared types for Warframe Market price lookups
//!
//! Wire types mirror the JSON returned by the public `api.warframe.market/v1`
//! endpoints. Domain types (`CatalogEntry`, `PriceResult`) are what the
//! pricing code passes around and what gets cached or printed.

pub mod catalog;
pub mod error;
pub mod orders;
pub mod platform;
pub mod price;
pub mod statistics;

pub use catalog::{CatalogEntry, ItemsPayload, ItemsResponse, ResolvedItem};
pub use error::{MarketError, Result};
pub use orders::{Order, OrderType, OrderUser, OrdersPayload, OrdersResponse, UserStatus};
pub use platform::Platform;
pub use price::PriceResult;
pub use statistics::{ClosedStatistics, StatBucket, StatisticsPayload, StatisticsResponse};
