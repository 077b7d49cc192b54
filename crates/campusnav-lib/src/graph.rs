use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::campus::LocationId;

/// Edge direction mode, fixed at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    Directed,
    Undirected,
}

/// Weighted edge owned by its source node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: LocationId,
    pub weight: f64,
}

/// Campus walkway graph: a set of location nodes and weighted edges
/// between them.
///
/// Adjacency is kept in a `BTreeMap` so node iteration order is the
/// ascending id order; the searches rely on that for deterministic
/// tie-breaking. The graph carries no traversal state of its own —
/// every search owns its scratch maps, so concurrent searches over a
/// shared `&Graph` are safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    mode: GraphMode,
    adjacency: BTreeMap<LocationId, Vec<Edge>>,
}

impl Graph {
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            adjacency: BTreeMap::new(),
        }
    }

    /// Mode chosen at construction.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds a node to the graph. Idempotent: existing edges are preserved.
    pub fn add_node(&mut self, id: LocationId) {
        self.adjacency.entry(id).or_default();
    }

    /// Membership test for a node.
    pub fn contains(&self, id: LocationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Creates or updates the edge `from -> to`.
    ///
    /// If an edge between the same ordered pair already exists its weight
    /// is overwritten in place; parallel duplicate edges are never stored.
    /// Both endpoints are added to the node set if missing. On an
    /// undirected graph the mirror edge `to -> from` receives the same
    /// treatment, unless `from == to`.
    pub fn add_edge(&mut self, from: LocationId, to: LocationId, weight: f64) {
        self.add_node(to);
        self.insert_directed(from, to, weight);
        if self.mode == GraphMode::Undirected && from != to {
            self.insert_directed(to, from, weight);
        }
    }

    fn insert_directed(&mut self, from: LocationId, to: LocationId, weight: f64) {
        let edges = match self.adjacency.entry(from) {
            Entry::Vacant(e) => e.insert(Vec::new()),
            Entry::Occupied(e) => e.into_mut(),
        };
        if let Some(existing) = edges.iter_mut().find(|e| e.to == to) {
            existing.weight = weight;
        } else {
            edges.push(Edge { to, weight });
        }
    }

    /// O(degree) membership test for the edge `from -> to`.
    pub fn has_edge(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbours(from).iter().any(|e| e.to == to)
    }

    /// Weight of the edge `from -> to`, or [`f64::INFINITY`] if no such
    /// edge exists.
    pub fn edge_weight(&self, from: LocationId, to: LocationId) -> f64 {
        self.neighbours(from)
            .iter()
            .find_map(|e| (e.to == to).then_some(e.weight))
            .unwrap_or(f64::INFINITY)
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn neighbours(&self, id: LocationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Snapshot of the node set in ascending id order. The returned
    /// vector does not track later mutation of the graph.
    pub fn nodes(&self) -> Vec<LocationId> {
        self.adjacency.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut g = Graph::new(GraphMode::Directed);
        g.add_node(3);
        g.add_edge(3, 4, 10.0);
        g.add_node(3);
        assert_eq!(g.len(), 2);
        assert!(g.has_edge(3, 4));
    }

    #[test]
    fn add_edge_auto_adds_endpoints() {
        let mut g = Graph::new(GraphMode::Directed);
        g.add_edge(0, 1, 5.0);
        assert!(g.contains(0));
        assert!(g.contains(1));
        assert!(!g.has_edge(1, 0));
    }

    #[test]
    fn undirected_mode_mirrors_edges() {
        let mut g = Graph::new(GraphMode::Undirected);
        g.add_edge(0, 1, 5.0);
        assert_eq!(g.edge_weight(0, 1), 5.0);
        assert_eq!(g.edge_weight(1, 0), 5.0);
    }

    #[test]
    fn self_loop_is_not_mirrored_twice() {
        let mut g = Graph::new(GraphMode::Undirected);
        g.add_edge(2, 2, 1.0);
        assert_eq!(g.neighbours(2).len(), 1);
    }

    #[test]
    fn nodes_snapshot_is_sorted_and_detached() {
        let mut g = Graph::new(GraphMode::Directed);
        g.add_edge(5, 1, 1.0);
        let snapshot = g.nodes();
        g.add_node(9);
        assert_eq!(snapshot, vec![1, 5]);
        assert_eq!(g.nodes(), vec![1, 5, 9]);
    }
}
