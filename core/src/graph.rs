use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;

/// Dense node index, assigned in interning order.
pub type NodeId = u32;

/// Which side of the bipartite graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Stop,
    Route,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Stop => "stop",
            NodeKind::Route => "route",
        }
    }
}

/// A node key tagged with its kind, so a stop and a route that share a
/// display name never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeLabel {
    pub kind: NodeKind,
    pub name: String,
}

impl NodeLabel {
    pub fn stop(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Stop,
            name: name.into(),
        }
    }

    pub fn route(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Route,
            name: name.into(),
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Stop/route adjacency map.
///
/// Every membership is stored in both directions: the route lists the stop
/// as a neighbor and the stop lists the route. Neighbor sets keep insertion
/// order, so traversal order is reproducible for a given load order.
#[derive(Debug)]
pub struct Graph {
    labels: Vec<NodeLabel>,
    label_index: HashMap<NodeLabel, NodeId>,
    adjacency: Vec<IndexSet<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            label_index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            labels: Vec::with_capacity(node_count),
            label_index: HashMap::with_capacity(node_count),
            adjacency: Vec::with_capacity(node_count),
        }
    }

    /// Intern a label, returning its id. Existing labels keep their id.
    pub fn intern(&mut self, label: NodeLabel) -> NodeId {
        if let Some(&id) = self.label_index.get(&label) {
            return id;
        }
        let id = self.labels.len() as NodeId;
        self.label_index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(IndexSet::new());
        id
    }

    /// Record that `route` serves `stop`, adding the edge in both directions.
    /// Repeated memberships are absorbed by the neighbor sets.
    pub fn add_membership(&mut self, route: &str, stop: &str) {
        let r = self.intern(NodeLabel::route(route));
        let s = self.intern(NodeLabel::stop(stop));
        self.adjacency[r as usize].insert(s);
        self.adjacency[s as usize].insert(r);
    }

    /// Bulk load from an iterator of (route name, stop name) pairs.
    pub fn load_memberships<I, R, S>(&mut self, memberships: I)
    where
        I: IntoIterator<Item = (R, S)>,
        R: AsRef<str>,
        S: AsRef<str>,
    {
        for (route, stop) in memberships {
            self.add_membership(route.as_ref(), stop.as_ref());
        }
    }

    /// Look up a node by kind and display name.
    pub fn resolve(&self, kind: NodeKind, name: &str) -> Option<NodeId> {
        self.label_index
            .get(&NodeLabel {
                kind,
                name: name.to_string(),
            })
            .copied()
    }

    pub fn resolve_stop(&self, name: &str) -> Option<NodeId> {
        self.resolve(NodeKind::Stop, name)
    }

    pub fn label(&self, id: NodeId) -> Option<&NodeLabel> {
        self.labels.get(id as usize)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id as usize) < self.labels.len()
    }

    /// Neighbors of a node in insertion order. Unknown ids have none.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(id as usize)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id as usize).map_or(0, |set| set.len())
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected memberships (each stored twice internally).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|set| set.len()).sum::<usize>() / 2
    }

    pub fn route_count(&self) -> usize {
        self.count_kind(NodeKind::Route)
    }

    pub fn stop_count(&self) -> usize {
        self.count_kind(NodeKind::Stop)
    }

    fn count_kind(&self, kind: NodeKind) -> usize {
        self.labels.iter().filter(|l| l.kind == kind).count()
    }

    /// True when every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().enumerate().all(|(from, set)| {
            set.iter()
                .all(|&to| self.adjacency[to as usize].contains(&(from as NodeId)))
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
