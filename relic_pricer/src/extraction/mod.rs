//! Image-to-text extraction of reward item names
//!
//! Extractors turn a screenshot into an ordered list of candidate item names.
//! An empty list means nothing was detected; any error is fatal to the scan.

mod gemini;
mod ocr_space;

pub use gemini::GeminiExtractor;
pub use ocr_space::{OcrSpaceExtractor, DEMO_API_KEY};

use async_trait::async_trait;
use std::path::Path;
use wfm_common::{MarketError, Result};

/// Converts image bytes into item name lines
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>>;
}

/// Split service output into trimmed, non-blank lines
pub fn split_item_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// MIME type for a screenshot file, from its extension
pub fn mime_type_for_path(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        "bmp" => Ok("image/bmp"),
        _ => Err(MarketError::Config(format!(
            "unsupported image type: {}",
            path.display()
        ))),
    }
}
