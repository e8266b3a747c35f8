//! Price reductions over a single item's orders and trade statistics

use wfm_common::{Order, OrderType, StatBucket};

/// Average price and volume over the recent statistics window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesSummary {
    pub avg_price: Option<i64>,
    pub sold_count: Option<u64>,
}

/// Cheapest visible sell order from a seller who is online or in game
pub fn lowest_sell_price(orders: &[Order]) -> Option<f64> {
    orders
        .iter()
        .filter(|o| o.order_type == OrderType::Sell && o.visible && o.user.status.is_reachable())
        .map(|o| o.platinum)
        .min_by(|a, b| a.total_cmp(b))
}

/// Volume-weighted average price and total volume across the buckets.
///
/// When every bucket has zero volume the average falls back to the last
/// (most recent) bucket's unweighted `avg_price`.
pub fn summarize_recent_sales(buckets: &[StatBucket]) -> SalesSummary {
    let Some(latest) = buckets.last() else {
        return SalesSummary::default();
    };

    let sold_count: u64 = buckets.iter().map(|b| b.volume).sum();

    let avg_price = if sold_count > 0 {
        let total_platinum: f64 = buckets.iter().map(|b| b.avg_price * b.volume as f64).sum();
        round_platinum(total_platinum / sold_count as f64)
    } else {
        round_platinum(latest.avg_price)
    };

    SalesSummary {
        avg_price: Some(avg_price),
        sold_count: Some(sold_count),
    }
}

/// Round half up, matching how prices are shown on the market site
fn round_platinum(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
