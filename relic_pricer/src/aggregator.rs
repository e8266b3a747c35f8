//! Concurrent price lookup across a batch of items
//!
//! Each item issues its orders and statistics requests together and emits a
//! single `PriceResult` as soon as both settle. Items are independent: a
//! failure on one never stops or alters the others.

use futures_util::stream::{self, StreamExt};
use wfm_common::{MarketError, Platform, PriceResult, ResolvedItem};

use crate::market::MarketClient;
use crate::pricing::{lowest_sell_price, summarize_recent_sales};

/// Price a single item. Always returns a result, never an error.
///
/// A 404 on either endpoint means the item has no data there. Other HTTP
/// statuses leave the affected fields unset. Network and decode failures
/// turn the whole result into a failure.
pub async fn price_item(
    client: &MarketClient,
    item: &ResolvedItem,
    platform: Platform,
) -> PriceResult {
    let (orders, statistics) = tokio::join!(
        client.fetch_orders(&item.url_name, platform),
        client.fetch_statistics(&item.url_name, platform),
    );

    let mut result = PriceResult::empty(item);

    match orders {
        Ok(orders) => result.lowest_price = lowest_sell_price(&orders),
        Err(e) if e.is_not_found() => {}
        Err(MarketError::HttpStatus(status)) => {
            log::warn!("Could not fetch orders for {}: {}", item.name, status);
        }
        Err(e) => {
            log::error!("Error fetching price data for {}: {}", item.name, e);
            return PriceResult::failed(item, e.to_string());
        }
    }

    match statistics {
        Ok(buckets) => {
            let summary = summarize_recent_sales(&buckets);
            result.avg_price = summary.avg_price;
            result.sold_count = summary.sold_count;
        }
        Err(e) if e.is_not_found() => {}
        Err(MarketError::HttpStatus(status)) => {
            log::warn!("Could not fetch statistics for {}: {}", item.name, status);
        }
        Err(e) => {
            log::error!("Error fetching price data for {}: {}", item.name, e);
            return PriceResult::failed(item, e.to_string());
        }
    }

    result
}

/// Price every item concurrently, calling `on_result` once per item in
/// completion order. Returns after every item has been emitted.
///
/// Items run at most `client.max_concurrency()` at a time; `None` starts
/// all items at once.
pub async fn fetch_prices<F>(
    client: &MarketClient,
    items: &[ResolvedItem],
    platform: Platform,
    mut on_result: F,
) where
    F: FnMut(PriceResult),
{
    if items.is_empty() {
        return;
    }

    let limit = client
        .max_concurrency()
        .unwrap_or(items.len())
        .clamp(1, items.len());
    log::info!(
        "Fetching prices for {} item(s) on {} ({} at a time)",
        items.len(),
        platform,
        limit
    );

    stream::iter(items)
        .map(|item| price_item(client, item, platform))
        .buffer_unordered(limit)
        .for_each(|result| {
            on_result(result);
            futures_util::future::ready(())
        })
        .await;
}

/// Price every item and collect the results in completion order
pub async fn collect_prices(
    client: &MarketClient,
    items: &[ResolvedItem],
    platform: Platform,
) -> Vec<PriceResult> {
    let mut results = Vec::with_capacity(items.len());
    fetch_prices(client, items, platform, |r| results.push(r)).await;
    results
}

/// Reorder results to follow the order names were given in (e.g. OCR order).
///
/// Matching is case-insensitive on the display name; results whose name is
/// not in `names` go to the end. The sort is stable.
pub fn order_by_input(results: &mut [PriceResult], names: &[String]) {
    let order: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).collect();
    results.sort_by_key(|r| {
        let name = r.name.to_lowercase();
        order.iter().position(|n| *n == name).unwrap_or(usize::MAX)
    });
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
