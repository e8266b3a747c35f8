//! Text and JSON rendering of price results

use wfm_common::PriceResult;

const NOT_AVAILABLE: &str = "N/A";

fn price_cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Plain price without a trailing `.0` for whole numbers
fn format_platinum(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}p")
    } else {
        format!("{value:.1}p")
    }
}

/// One line per item: name, lowest price, 48h average, 48h volume, link
pub fn format_results_table(results: &[PriceResult]) -> String {
    if results.is_empty() {
        return "Could not identify any items in the image.\n".to_string();
    }

    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Item".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>13}  {:>10}  {}\n",
        "Item", "Lowest Price", "48h Avg Price", "Sold (48h)", "Link"
    ));

    for result in results {
        if let Some(error) = &result.error {
            output.push_str(&format!(
                "{:<name_width$}  Error: {}\n",
                result.name, error
            ));
            continue;
        }

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>13}  {:>10}  {}\n",
            result.name,
            price_cell(result.lowest_price.map(format_platinum)),
            price_cell(result.avg_price.map(|p| format!("{p}p"))),
            price_cell(result.sold_count.map(|c| c.to_string())),
            result.market_url()
        ));
    }

    output
}

/// Single progress line for a streamed result
pub fn format_progress_line(result: &PriceResult) -> String {
    match &result.error {
        Some(error) => format!("{}: error ({})", result.name, error),
        None => format!(
            "{}: lowest {}, avg {}",
            result.name,
            price_cell(result.lowest_price.map(format_platinum)),
            price_cell(result.avg_price.map(|p| format!("{p}p")))
        ),
    }
}

/// Pretty JSON array of results
pub fn format_results_json(results: &[PriceResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
