//! subway-graph-source: discovers the subway network from a transit API.
//!
//! Wraps subway-graph-core with a data source abstraction, a blocking
//! HTTP implementation, a per-process fetch cache and the builders that
//! turn route/stop records into graph and membership structures.
//! `SubwayService` exposes the analyses to front ends.

mod api;
mod cache;
mod config;
mod error;
mod model;
mod network;
mod query;
mod service;
mod source;

#[cfg(test)]
mod testing;

pub use api::TransitApi;
pub use cache::FetchCache;
pub use config::{SourceConfig, DEFAULT_BASE_URL, SUBWAY_ROUTE_TYPES};
pub use error::{AnalysisError, SourceError};
pub use model::{Route, Stop};
pub use network::{build_adjacency, build_route_stops, build_stop_routes};
pub use query::{Method, Query};
pub use service::SubwayService;
pub use source::{DataSource, HttpSource, API_KEY_HEADER};
