use reqwest::blocking::{Client, Request};

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::query::{Method, Query};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Anything that can answer a transit API query with a parsed JSON body.
pub trait DataSource {
    fn fetch(&self, query: &Query) -> Result<serde_json::Value, SourceError>;
}

/// Blocking HTTP+JSON data source.
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Assemble the request for a query. The API key header is only
    /// attached when a key is configured.
    pub fn build_request(&self, query: &Query) -> Result<Request, SourceError> {
        let url = format!("{}{}", self.base_url, query.path);
        let mut builder = match query.method {
            Method::Get => self.client.get(&url),
        };
        if !query.params.is_empty() {
            builder = builder.query(&query.params);
        }
        if let Some(ref key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder
            .build()
            .map_err(|source| SourceError::Transport { url, source })
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, query: &Query) -> Result<serde_json::Value, SourceError> {
        let request = self.build_request(query)?;
        let url = request.url().to_string();
        log::debug!("fetching {}", url);

        let response = self
            .client
            .execute(request)
            .map_err(|source| SourceError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| SourceError::Transport {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|e| SourceError::Malformed {
            url,
            reason: format!("invalid JSON: {}", e),
        })
    }
}
