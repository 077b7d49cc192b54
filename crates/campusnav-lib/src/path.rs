use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::campus::LocationId;
use crate::graph::Graph;

/// Scale factor applied to the identifier difference in [`heuristic`].
const HEURISTIC_WEIGHT: f64 = 100.0;

/// Outcome of a single-source search.
///
/// An unreachable goal is a data state, not an error: the path is empty
/// and the distance is [`f64::INFINITY`]. Callers must check before using
/// the distance. `explored` counts expanded nodes and is diagnostic only.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub path: Vec<LocationId>,
    pub distance: f64,
    pub explored: usize,
}

impl SearchResult {
    pub(crate) fn unreachable(explored: usize) -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            explored,
        }
    }

    fn trivial(at: LocationId) -> Self {
        Self {
            path: vec![at],
            distance: 0.0,
            explored: 0,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }
}

/// Label-setting shortest path in the classic O(V²) formulation: the
/// closest unvisited node is found by a linear scan rather than a heap.
/// Fine for campus-sized graphs (tens of nodes); the scan iterates nodes
/// in ascending id order, so tie-breaks are deterministic.
pub fn find_route_dijkstra(graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult::unreachable(0);
    }
    if start == goal {
        return SearchResult::trivial(start);
    }

    let nodes = graph.nodes();
    let mut distances: HashMap<LocationId, f64> =
        nodes.iter().map(|&n| (n, f64::INFINITY)).collect();
    let mut predecessors: HashMap<LocationId, LocationId> = HashMap::new();
    let mut visited: HashSet<LocationId> = HashSet::new();

    // Seed the start's direct neighbours, then settle the start itself.
    distances.insert(start, 0.0);
    for edge in graph.neighbours(start) {
        distances.insert(edge.to, edge.weight);
        predecessors.insert(edge.to, start);
    }
    visited.insert(start);
    let mut explored = 1;

    loop {
        let Some(current) = closest_reachable_unvisited(&nodes, &distances, &visited) else {
            return SearchResult::unreachable(explored);
        };

        if current == goal {
            return SearchResult {
                path: reconstruct(&predecessors, start, goal),
                distance: distances[&goal],
                explored,
            };
        }

        visited.insert(current);
        explored += 1;

        let current_distance = distances[&current];
        for edge in graph.neighbours(current) {
            if visited.contains(&edge.to) {
                continue;
            }
            let candidate = current_distance + edge.weight;
            if candidate < distances[&edge.to] {
                distances.insert(edge.to, candidate);
                predecessors.insert(edge.to, current);
            }
        }
    }
}

fn closest_reachable_unvisited(
    nodes: &[LocationId],
    distances: &HashMap<LocationId, f64>,
    visited: &HashSet<LocationId>,
) -> Option<LocationId> {
    let mut best: Option<(LocationId, f64)> = None;
    for &node in nodes {
        if visited.contains(&node) {
            continue;
        }
        let distance = distances[&node];
        if distance.is_infinite() {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((node, distance));
        }
    }
    best.map(|(node, _)| node)
}

/// Heuristic estimate between two locations: the absolute difference of
/// their identifiers, scaled.
///
/// Not guaranteed admissible or consistent — identifiers need not
/// correlate with campus layout, so [`find_route_astar`] can return a
/// costlier route than [`find_route_dijkstra`] on maps with arbitrary id
/// assignment. Known caveat carried over from the system's design; not a
/// property to fix silently.
fn heuristic(a: LocationId, b: LocationId) -> f64 {
    a.abs_diff(b) as f64 * HEURISTIC_WEIGHT
}

/// A* best-first search ordered by f = g + h.
pub fn find_route_astar(graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult {
    find_route_astar_avoiding(graph, start, goal, &HashSet::new())
}

/// A* variant that refuses to traverse the given directed edges. Used to
/// diversify alternative routes; an empty exclusion set is the plain
/// search.
///
/// The open queue may hold stale duplicate entries for a node whose cost
/// improved after insertion. Entries whose node is already closed are
/// discarded at pop time instead of being removed eagerly.
pub fn find_route_astar_avoiding(
    graph: &Graph,
    start: LocationId,
    goal: LocationId,
    excluded: &HashSet<(LocationId, LocationId)>,
) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult::unreachable(0);
    }
    if start == goal {
        return SearchResult::trivial(start);
    }

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<LocationId, f64> = HashMap::new();
    let mut parents: HashMap<LocationId, LocationId> = HashMap::new();
    let mut closed: HashSet<LocationId> = HashSet::new();
    let mut explored = 0usize;

    g_score.insert(start, 0.0);
    open.push(AStarEntry::new(start, 0.0, heuristic(start, goal)));

    while let Some(entry) = open.pop() {
        if closed.contains(&entry.node) {
            continue;
        }
        explored += 1;

        if entry.node == goal {
            return SearchResult {
                path: reconstruct(&parents, start, goal),
                distance: entry.cost.value(),
                explored,
            };
        }

        closed.insert(entry.node);

        for edge in graph.neighbours(entry.node) {
            if excluded.contains(&(entry.node, edge.to)) {
                continue;
            }
            if closed.contains(&edge.to) {
                continue;
            }
            let tentative = entry.cost.value() + edge.weight;
            if tentative < g_score.get(&edge.to).copied().unwrap_or(f64::INFINITY) {
                g_score.insert(edge.to, tentative);
                parents.insert(edge.to, entry.node);
                open.push(AStarEntry::new(edge.to, tentative, heuristic(edge.to, goal)));
            }
        }
    }

    SearchResult::unreachable(explored)
}

fn reconstruct(
    parents: &HashMap<LocationId, LocationId>,
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl FloatOrd {
    fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: LocationId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: LocationId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphMode;

    fn line_graph() -> Graph {
        let mut g = Graph::new(GraphMode::Directed);
        g.add_edge(0, 1, 150.0);
        g.add_edge(1, 2, 150.0);
        g.add_edge(2, 3, 150.0);
        g
    }

    #[test]
    fn dijkstra_walks_the_line() {
        let result = find_route_dijkstra(&line_graph(), 0, 3);
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(result.distance, 450.0);
    }

    #[test]
    fn astar_matches_dijkstra_on_ordered_ids() {
        let g = line_graph();
        let a = find_route_astar(&g, 0, 3);
        let d = find_route_dijkstra(&g, 0, 3);
        assert_eq!(a.path, d.path);
        assert_eq!(a.distance, d.distance);
    }

    #[test]
    fn same_start_and_goal_is_a_trivial_route() {
        let g = line_graph();
        for result in [find_route_dijkstra(&g, 2, 2), find_route_astar(&g, 2, 2)] {
            assert_eq!(result.path, vec![2]);
            assert_eq!(result.distance, 0.0);
        }
    }

    #[test]
    fn unreachable_goal_is_empty_and_infinite() {
        let mut g = line_graph();
        g.add_node(9);
        for result in [find_route_dijkstra(&g, 0, 9), find_route_astar(&g, 0, 9)] {
            assert!(result.is_unreachable());
            assert!(result.distance.is_infinite());
        }
    }

    #[test]
    fn astar_avoiding_an_edge_reroutes() {
        let mut g = line_graph();
        g.add_edge(0, 3, 1000.0);
        let mut excluded = HashSet::new();
        excluded.insert((0usize, 1usize));
        let result = find_route_astar_avoiding(&g, 0, 3, &excluded);
        assert_eq!(result.path, vec![0, 3]);
        assert_eq!(result.distance, 1000.0);
    }
}
