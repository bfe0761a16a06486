use serde::de::DeserializeOwned;

use crate::cache::FetchCache;
use crate::error::SourceError;
use crate::model::{Document, Route, RouteResource, Stop, StopResource};
use crate::query::Query;
use crate::source::DataSource;

/// Typed transit API calls, all routed through one owned fetch cache.
pub struct TransitApi<S> {
    cache: FetchCache<S>,
}

impl<S: DataSource> TransitApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: FetchCache::new(source),
        }
    }

    /// Routes whose type code is in `route_types`.
    pub fn list_routes(&self, route_types: &[u8]) -> Result<Vec<Route>, SourceError> {
        let query = Query::routes(route_types);
        let doc: Document<RouteResource> = self.decode(&query)?;
        Ok(doc.data.into_iter().map(Route::from).collect())
    }

    /// Stops served by the route with the given id.
    pub fn list_stops_for_route(&self, route_id: &str) -> Result<Vec<Stop>, SourceError> {
        let query = Query::stops_for_route(route_id);
        let doc: Document<StopResource> = self.decode(&query)?;
        Ok(doc.data.into_iter().map(Stop::from).collect())
    }

    pub fn cache(&self) -> &FetchCache<S> {
        &self.cache
    }

    // Decoding runs inside the cache so a malformed body is never stored.
    fn decode<T: DeserializeOwned>(&self, query: &Query) -> Result<T, SourceError> {
        self.cache.fetch_decoded(query, |body| {
            T::deserialize(body).map_err(|e| SourceError::Malformed {
                url: query.target(),
                reason: e.to_string(),
            })
        })
    }
}
