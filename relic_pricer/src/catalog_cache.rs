//! Time-boxed cache of the full item catalog
//!
//! The catalog is persisted as a single JSON snapshot tagged with its fetch
//! time. Snapshots younger than 24 hours are served without network access;
//! older ones are replaced wholesale.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use wfm_common::{CatalogEntry, MarketError, Result};

use crate::market::MarketClient;

/// Snapshot lifetime in milliseconds (24 hours)
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Bumped whenever the snapshot layout changes; other versions are ignored
pub const CACHE_SCHEMA_VERSION: u32 = 1;

/// Source of the current time in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Persisted catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub version: u32,
    /// Fetch time in epoch milliseconds
    pub timestamp: i64,
    pub items: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn new(timestamp: i64, items: Vec<CatalogEntry>) -> Self {
        Self {
            version: CACHE_SCHEMA_VERSION,
            timestamp,
            items,
        }
    }

    /// Current schema and younger than the TTL
    pub fn is_fresh(&self, now_millis: i64) -> bool {
        self.version == CACHE_SCHEMA_VERSION && now_millis - self.timestamp < CACHE_TTL_MS
    }
}

/// Where snapshots are kept. `save` must replace the previous snapshot atomically.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> Option<CatalogSnapshot>;
    fn save(&self, snapshot: &CatalogSnapshot) -> Result<()>;
}

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: <user cache dir>/relic_pricer/market_items.json
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("relic_pricer")
            .join("market_items.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-process scratch file next to the snapshot
    fn temp_path(&self) -> PathBuf {
        self.path
            .with_extension(format!("json.{}.tmp", std::process::id()))
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Option<CatalogSnapshot> {
        if !self.path.exists() {
            return None;
        }
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    log::warn!("Failed to parse catalog cache, ignoring it: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Could not read from catalog cache: {}", e);
                None
            }
        }
    }

    fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write next to the target and rename over it so readers never see half a file
        let tmp_path = self.temp_path();
        let content = serde_json::to_string(snapshot)?;
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        log::debug!(
            "Saved catalog cache with {} items to {}",
            snapshot.items.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process store, used in tests and when no cache file is wanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<CatalogSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> Option<CatalogSnapshot> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|e| MarketError::Cache(e.to_string()))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}

/// Catalog lookup backed by a persisted snapshot
pub struct CatalogCache {
    client: MarketClient,
    store: Box<dyn CatalogStore>,
    clock: Box<dyn Clock>,
}

impl CatalogCache {
    pub fn new(client: MarketClient, store: Box<dyn CatalogStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            client,
            store,
            clock,
        }
    }

    /// File-backed cache on the wall clock
    pub fn with_file(client: MarketClient, path: impl Into<PathBuf>) -> Self {
        Self::new(client, Box::new(FileStore::new(path)), Box::new(SystemClock))
    }

    /// Return the catalog, from the snapshot if it is fresh, otherwise from
    /// the API. A failed fetch degrades to an empty catalog.
    pub async fn get(&self) -> Vec<CatalogEntry> {
        if let Some(snapshot) = self.store.load() {
            if snapshot.is_fresh(self.clock.now_millis()) {
                log::info!("Loaded {} items from catalog cache", snapshot.items.len());
                return snapshot.items;
            }
            log::info!("Catalog cache expired, refreshing");
        }

        match self.refresh().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Error fetching item catalog: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch the catalog and replace the snapshot, regardless of its age
    pub async fn refresh(&self) -> Result<Vec<CatalogEntry>> {
        let items = self.client.fetch_items().await?;
        let snapshot = CatalogSnapshot::new(self.clock.now_millis(), items);

        match self.store.save(&snapshot) {
            Ok(()) => log::info!("Saved {} items to catalog cache", snapshot.items.len()),
            Err(e) => log::warn!("Could not save to catalog cache: {}", e),
        }

        Ok(snapshot.items)
    }

    /// Age of the stored snapshot in milliseconds, if any
    pub fn snapshot_age_millis(&self) -> Option<i64> {
        self.store
            .load()
            .map(|snapshot| self.clock.now_millis() - snapshot.timestamp)
    }
}

#[cfg(test)]
#[path = "catalog_cache_tests.rs"]
mod tests;
