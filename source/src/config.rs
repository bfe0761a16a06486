use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Light rail (0) and heavy rail (1): the subway modes.
pub const SUBWAY_ROUTE_TYPES: [u8; 2] = [0, 1];

/// Settings for the HTTP data source and the route filter used by analyses.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Sent as `X-API-KEY` when present.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub route_types: Vec<u8>,
}

impl SourceConfig {
    /// Set the API key. Blank keys are treated as no key.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            route_types: SUBWAY_ROUTE_TYPES.to_vec(),
        }
    }
}
