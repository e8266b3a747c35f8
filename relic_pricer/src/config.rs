//! Runtime configuration for the market client

use std::time::Duration;

/// Public Warframe Market API. A CORS proxy prefix can be configured instead.
pub const DEFAULT_BASE_URL: &str = "https://api.warframe.market/v1";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = "relic_pricer/0.1";

/// Settings shared by every market request
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Base URL without trailing slash, e.g. `https://api.warframe.market/v1`
    pub base_url: String,
    /// Value of the `Language` request header
    pub language: String,
    /// Per-request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// Maximum number of items priced at once; `None` prices every item at once
    pub max_concurrency: Option<usize>,
    pub user_agent: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_concurrency: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl MarketConfig {
    /// Default settings pointed at a different base URL (mock servers, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL with any trailing slash removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
