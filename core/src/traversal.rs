use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, NodeId, NodeKind};

/// A single step in a path. Steps alternate between stops and routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub node_id: NodeId,
    pub kind: NodeKind,
    pub name: String,
}

/// Hop distance from `start` to every node reachable from it, `start`
/// included at distance 0. Empty if `start` is not in the graph.
pub fn hop_distances(graph: &Graph, start: NodeId) -> HashMap<NodeId, u32> {
    let mut distances: HashMap<NodeId, u32> = HashMap::new();
    if !graph.contains(start) {
        return distances;
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = distances[&current];
        for next in graph.neighbors(current) {
            if !distances.contains_key(&next) {
                distances.insert(next, depth + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

/// Shortest path from `start` to `target` by hop count (BFS).
///
/// Returns None if either node is not in the graph or no path connects them.
/// The path includes both endpoints; `start == target` yields a single step.
/// When several minimum paths exist, the one found first in neighbor
/// insertion order wins.
pub fn shortest_path(graph: &Graph, start: NodeId, target: NodeId) -> Option<Vec<PathStep>> {
    if !graph.contains(start) || !graph.contains(target) {
        return None;
    }

    if start == target {
        return Some(vec![step(graph, start)]);
    }

    // node → parent; the start node is its own parent
    let mut visited: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if visited.contains_key(&next) {
                continue;
            }
            visited.insert(next, current);

            if next == target {
                return Some(reconstruct_path(graph, &visited, start, target));
            }

            queue.push_back(next);
        }
    }

    None
}

/// Shortest path between two stops given by display name.
pub fn find_stop_path(graph: &Graph, from_stop: &str, to_stop: &str) -> Option<Vec<PathStep>> {
    let start = graph.resolve_stop(from_stop)?;
    let target = graph.resolve_stop(to_stop)?;
    shortest_path(graph, start, target)
}

fn reconstruct_path(
    graph: &Graph,
    visited: &HashMap<NodeId, NodeId>,
    start: NodeId,
    target: NodeId,
) -> Vec<PathStep> {
    let mut path = vec![step(graph, target)];
    let mut current = target;

    while current != start {
        current = visited[&current];
        path.push(step(graph, current));
    }

    path.reverse();
    path
}

fn step(graph: &Graph, id: NodeId) -> PathStep {
    match graph.label(id) {
        Some(label) => PathStep {
            node_id: id,
            kind: label.kind,
            name: label.name.clone(),
        },
        None => PathStep {
            node_id: id,
            kind: NodeKind::Stop,
            name: String::new(),
        },
    }
}
