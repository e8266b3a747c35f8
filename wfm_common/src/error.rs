//! Error types shared by the market client, catalog cache and extractors

use thiserror::Error;

/// Unified error type for market lookups
#[derive(Debug, Error)]
pub enum MarketError {
    /// HTTP request failed (network error, timeout, undecodable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Non-success HTTP status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Cache snapshot could not be read or written
    #[error("Cache error: {0}")]
    Cache(String),
    /// Typed item name has no catalog match
    #[error("Could not find an item named \"{0}\". Please check the spelling or try `search` for suggestions.")]
    ItemNotFound(String),
    /// Image-to-text service failed; fatal to the current scan
    #[error("Extraction failed: {0}")]
    Extraction(String),
    /// Invalid configuration or input
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MarketError {
    /// True for a 404 response, which the marketplace uses for "no data"
    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketError::HttpStatus(status) if *status == reqwest::StatusCode::NOT_FOUND)
    }
}

/// Result alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_only_for_404() {
        assert!(MarketError::HttpStatus(reqwest::StatusCode::NOT_FOUND).is_not_found());
        assert!(!MarketError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY).is_not_found());
        assert!(!MarketError::Cache("x".to_string()).is_not_found());
    }

    #[test]
    fn item_not_found_message_names_the_item() {
        let err = MarketError::ItemNotFound("Vasto Prime Barel".to_string());
        assert!(err.to_string().contains("\"Vasto Prime Barel\""));
    }
}
