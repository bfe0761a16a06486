use std::collections::HashMap;

use subway_graph_core::{Graph, RouteStops, StopRoutes};

use crate::api::TransitApi;
use crate::error::SourceError;
use crate::model::{Route, Stop};
use crate::source::DataSource;

/// Every route of the requested types with its stops. Fails as a whole if
/// any single fetch fails.
fn fetch_memberships<S: DataSource>(
    api: &TransitApi<S>,
    route_types: &[u8],
) -> Result<Vec<(Route, Vec<Stop>)>, SourceError> {
    let routes = api.list_routes(route_types)?;

    // Route names key the graph; colliding names merge their stops.
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(routes.len());
    for route in &routes {
        if let Some(first_id) = seen.insert(&route.long_name, &route.id) {
            log::warn!(
                "routes '{}' and '{}' share the name '{}'; their stops will be merged",
                first_id,
                route.id,
                route.long_name
            );
        }
    }

    let mut memberships = Vec::with_capacity(routes.len());
    for route in routes {
        let stops = api.list_stops_for_route(&route.id)?;
        memberships.push((route, stops));
    }
    Ok(memberships)
}

/// Build the stop/route adjacency map for the given route types.
pub fn build_adjacency<S: DataSource>(
    api: &TransitApi<S>,
    route_types: &[u8],
) -> Result<Graph, SourceError> {
    let memberships = fetch_memberships(api, route_types)?;

    let mut graph = Graph::with_capacity(
        memberships.len() + memberships.iter().map(|(_, s)| s.len()).sum::<usize>(),
    );
    for (route, stops) in &memberships {
        graph.load_memberships(stops.iter().map(|s| (&route.long_name, &s.name)));
    }

    log::debug!(
        "built adjacency: {} routes, {} stops, {} edges",
        graph.route_count(),
        graph.stop_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Route name → stop names for the given route types. Routes without stops
/// are kept with an empty set.
pub fn build_route_stops<S: DataSource>(
    api: &TransitApi<S>,
    route_types: &[u8],
) -> Result<RouteStops, SourceError> {
    let mut map = RouteStops::new();
    for (route, stops) in fetch_memberships(api, route_types)? {
        map.insert_route(&route.long_name);
        for stop in &stops {
            map.insert(&route.long_name, &stop.name);
        }
    }
    Ok(map)
}

/// Stop name → names of the routes serving it.
pub fn build_stop_routes<S: DataSource>(
    api: &TransitApi<S>,
    route_types: &[u8],
) -> Result<StopRoutes, SourceError> {
    Ok(build_route_stops(api, route_types)?.invert())
}
