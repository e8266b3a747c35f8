//! Name lookup over the item catalog

use std::collections::HashMap;
use wfm_common::{CatalogEntry, MarketError, ResolvedItem, Result};

/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 7;

/// Shortest query that produces suggestions
const MIN_SUGGESTION_QUERY: usize = 2;

/// Case-insensitive index from display name to catalog entry
#[derive(Debug, Default)]
pub struct ItemIndex {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl ItemIndex {
    /// Build the index. Later entries win when display names collide.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.to_lowercase(), i))
            .collect();
        Self { entries, by_name }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-insensitive match on the display name
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Resolve names in order, silently dropping any without a match
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<ResolvedItem> {
        names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let entry = self.resolve(name);
                if entry.is_none() {
                    log::debug!("No catalog match for \"{}\"", name);
                }
                entry.cloned()
            })
            .collect()
    }

    /// Resolve a typed search, failing with `ItemNotFound` when nothing matches
    pub fn lookup(&self, name: &str) -> Result<ResolvedItem> {
        self.resolve(name)
            .cloned()
            .ok_or_else(|| MarketError::ItemNotFound(name.trim().to_string()))
    }

    /// Display names containing `query` (case-insensitive), in catalog order
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SUGGESTION_QUERY {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .map(|e| e.name.as_str())
            .take(limit)
            .collect()
    }
}
