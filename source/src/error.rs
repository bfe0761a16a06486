use subway_graph_core::StatsError;

/// A transit data source call that did not produce usable records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected payload from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

/// Failure of a whole analysis. No partial results accompany it.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}
