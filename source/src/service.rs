use subway_graph_core::{self as graph_core, PathStep, RouteCount, TransferStop};

use crate::api::TransitApi;
use crate::config::SourceConfig;
use crate::error::{AnalysisError, SourceError};
use crate::network;
use crate::source::{DataSource, HttpSource};

/// The analyses offered to callers. Each one rebuilds the structure it
/// needs from the shared fetch cache and owns it until it returns.
pub struct SubwayService<S> {
    api: TransitApi<S>,
    route_types: Vec<u8>,
}

impl SubwayService<HttpSource> {
    /// Service backed by the HTTP source described by `config`.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let source = HttpSource::new(config)?;
        Ok(Self::new(source, config.route_types.clone()))
    }
}

impl<S: DataSource> SubwayService<S> {
    pub fn new(source: S, route_types: Vec<u8>) -> Self {
        Self {
            api: TransitApi::new(source),
            route_types,
        }
    }

    /// Long names of all routes of the configured types.
    pub fn all_routes(&self) -> Result<Vec<String>, SourceError> {
        let routes = self.api.list_routes(&self.route_types)?;
        Ok(routes.into_iter().map(|r| r.long_name).collect())
    }

    pub fn route_with_fewest_stops(&self) -> Result<RouteCount, AnalysisError> {
        let map = network::build_route_stops(&self.api, &self.route_types)?;
        let result = graph_core::route_with_fewest_stops(&map)?;
        log::info!("fewest stops: {} ({})", result.route, result.stops);
        Ok(result)
    }

    pub fn route_with_most_stops(&self) -> Result<RouteCount, AnalysisError> {
        let map = network::build_route_stops(&self.api, &self.route_types)?;
        let result = graph_core::route_with_most_stops(&map)?;
        log::info!("most stops: {} ({})", result.route, result.stops);
        Ok(result)
    }

    pub fn transfer_stops(&self) -> Result<Vec<TransferStop>, SourceError> {
        let map = network::build_stop_routes(&self.api, &self.route_types)?;
        let transfers = graph_core::transfer_stops(&map);
        log::info!("{} transfer stops", transfers.len());
        Ok(transfers)
    }

    /// Hop-minimal path between two stops. `Ok(None)` when either stop is
    /// unknown or the stops are not connected.
    pub fn find_path(&self, from: &str, to: &str) -> Result<Option<Vec<PathStep>>, SourceError> {
        let graph = network::build_adjacency(&self.api, &self.route_types)?;
        let path = graph_core::find_stop_path(&graph, from, to);
        match &path {
            Some(steps) => log::info!("path {} -> {}: {} steps", from, to, steps.len()),
            None => log::debug!("no path {} -> {}", from, to),
        }
        Ok(path)
    }

    pub fn api(&self) -> &TransitApi<S> {
        &self.api
    }
}
