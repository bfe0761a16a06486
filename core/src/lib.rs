//! subway-graph-core: stop/route graph model and the analyses over it.
//!
//! A pure Rust library with no I/O. Routes and stops form a bipartite
//! graph (a route serves a stop, a stop is served by a route); this crate
//! builds the adjacency structure, finds hop-minimal paths between stops,
//! and derives per-route statistics from the same membership data.
//!
//! Fetching the network from a remote API lives in `subway-graph-source`.

mod graph;
mod membership;
mod stats;
mod traversal;

pub use graph::{Graph, NodeId, NodeKind, NodeLabel};
pub use membership::{RouteStops, StopRoutes};
pub use stats::{
    route_with_fewest_stops, route_with_most_stops, transfer_stops, RouteCount, StatsError,
    TransferStop,
};
pub use traversal::{find_stop_path, hop_distances, shortest_path, PathStep};
