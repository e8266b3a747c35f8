//! Screenshot scan and manual search workflows

use wfm_common::{Platform, PriceResult, Result};

use crate::aggregator::{collect_prices, fetch_prices, order_by_input};
use crate::extraction::Extractor;
use crate::item_index::ItemIndex;
use crate::market::MarketClient;

/// Outcome of a screenshot scan
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Names as read from the image, in reading order
    pub detected: Vec<String>,
    /// Detected names without a catalog match
    pub unresolved: Vec<String>,
    /// One result per resolved item, in reading order
    pub results: Vec<PriceResult>,
}

/// Read item names from a screenshot and price every recognised item.
///
/// Extraction errors abort the scan. Names that do not match the catalog are
/// skipped. `on_result` sees each result as soon as it is priced.
pub async fn scan_image<F>(
    extractor: &dyn Extractor,
    index: &ItemIndex,
    client: &MarketClient,
    platform: Platform,
    image: &[u8],
    mime_type: &str,
    mut on_result: F,
) -> Result<ScanReport>
where
    F: FnMut(&PriceResult),
{
    let detected = extractor.extract(image, mime_type).await?;
    log::info!("Detected {} name(s) in screenshot", detected.len());

    let items = index.resolve_all(&detected);
    let unresolved: Vec<String> = detected
        .iter()
        .filter(|name| index.resolve(name).is_none())
        .cloned()
        .collect();

    if items.is_empty() {
        return Ok(ScanReport {
            detected,
            unresolved,
            results: Vec::new(),
        });
    }

    let mut results = Vec::with_capacity(items.len());
    fetch_prices(client, &items, platform, |result| {
        on_result(&result);
        results.push(result);
    })
    .await;
    order_by_input(&mut results, &detected);

    Ok(ScanReport {
        detected,
        unresolved,
        results,
    })
}

/// Price a single typed item name. Unknown names are `ItemNotFound`.
pub async fn search_price(
    index: &ItemIndex,
    client: &MarketClient,
    platform: Platform,
    name: &str,
) -> Result<PriceResult> {
    let item = index.lookup(name)?;
    let mut results = collect_prices(client, &[item.clone()], platform).await;
    Ok(results
        .pop()
        .unwrap_or_else(|| PriceResult::failed(&item, "no result produced")))
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
