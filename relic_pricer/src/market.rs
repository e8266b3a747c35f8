//! Warframe Market REST client
//!
//! Uses async reqwest; one shared `reqwest::Client` per `MarketClient`.

use crate::config::MarketConfig;
use serde::de::DeserializeOwned;
use wfm_common::{
    CatalogEntry, ItemsResponse, MarketError, Order, OrdersResponse, Platform, Result, StatBucket,
    StatisticsResponse,
};

#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
    max_concurrency: Option<usize>,
}

impl MarketClient {
    pub fn new(config: &MarketConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.normalized_base_url().to_string(),
            language: config.language.clone(),
            max_concurrency: config.max_concurrency,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Cap on items priced at once; `None` means no cap
    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// Fetch the full item catalog
    pub async fn fetch_items(&self) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/items", self.base_url);
        log::info!("Fetching item catalog from {}", url);

        let response = self.http.get(&url).send().await?;
        let items: ItemsResponse = Self::decode(response).await?;

        log::info!("Fetched {} catalog items", items.payload.items.len());
        Ok(items.payload.items)
    }

    /// Fetch open orders for an item on the given platform
    pub async fn fetch_orders(&self, url_name: &str, platform: Platform) -> Result<Vec<Order>> {
        let url = format!("{}/items/{}/orders", self.base_url, url_name);
        let response: OrdersResponse = self.get_for_platform(&url, platform).await?;
        Ok(response.payload.orders)
    }

    /// Fetch the 48-hour closed-trade buckets for an item on the given platform
    pub async fn fetch_statistics(
        &self,
        url_name: &str,
        platform: Platform,
    ) -> Result<Vec<StatBucket>> {
        let url = format!("{}/items/{}/statistics", self.base_url, url_name);
        let response: StatisticsResponse = self.get_for_platform(&url, platform).await?;
        Ok(response.payload.statistics_closed.last_48_hours)
    }

    async fn get_for_platform<T: DeserializeOwned>(
        &self,
        url: &str,
        platform: Platform,
    ) -> Result<T> {
        log::debug!("GET {} (platform: {})", url, platform);

        let response = self
            .http
            .get(url)
            .header("Platform", platform.as_str())
            .header("Language", &self.language)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(MarketError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "market_tests.rs"]
mod tests;
