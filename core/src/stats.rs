use crate::membership::{RouteStops, StopRoutes};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no routes available to compare")]
    Empty,
}

/// A route paired with its number of distinct stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCount {
    pub route: String,
    pub stops: usize,
}

/// A stop served by more than one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStop {
    pub stop: String,
    /// Serving routes, in the order they were first seen.
    pub routes: Vec<String>,
}

/// Route with the fewest distinct stops. Ties go to the earliest route.
pub fn route_with_fewest_stops(map: &RouteStops) -> Result<RouteCount, StatsError> {
    extremal_route(map, |candidate, best| candidate < best)
}

/// Route with the most distinct stops. Ties go to the earliest route.
pub fn route_with_most_stops(map: &RouteStops) -> Result<RouteCount, StatsError> {
    extremal_route(map, |candidate, best| candidate > best)
}

// Strict comparison keeps the first route seen with the winning count.
fn extremal_route(
    map: &RouteStops,
    beats: impl Fn(usize, usize) -> bool,
) -> Result<RouteCount, StatsError> {
    let mut best: Option<(&str, usize)> = None;
    for (route, stops) in map.iter() {
        let count = stops.len();
        let replace = match best {
            Some((_, best_count)) => beats(count, best_count),
            None => true,
        };
        if replace {
            best = Some((route, count));
        }
    }

    best.map(|(route, stops)| RouteCount {
        route: route.to_string(),
        stops,
    })
    .ok_or(StatsError::Empty)
}

/// Stops served by two or more distinct routes, in stop insertion order.
pub fn transfer_stops(map: &StopRoutes) -> Vec<TransferStop> {
    map.iter()
        .filter(|(_, routes)| routes.len() > 1)
        .map(|(stop, routes)| TransferStop {
            stop: stop.to_string(),
            routes: routes.iter().cloned().collect(),
        })
        .collect()
}
