//! Route planning strategies.
//!
//! Each search algorithm is wrapped in a planner implementing
//! [`RoutePlanner`], so the orchestration in the parent module never
//! matches on algorithms directly.

use crate::allpairs::DistanceMatrix;
use crate::campus::LocationId;
use crate::graph::Graph;
use crate::path::{find_route_astar, find_route_dijkstra, SearchResult};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph. Unreachable goals are
    /// reported through the [`SearchResult`] encoding, never an error.
    fn find_path(&self, graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult;
}

/// Label-setting planner using the linear-scan Dijkstra formulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Heuristic-guided planner. Inherits the identifier-difference
/// heuristic and its documented admissibility caveat.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult {
        find_route_astar(graph, start, goal)
    }
}

/// All-pairs planner: builds the Floyd-Warshall matrices for the call
/// and reconstructs the requested pair. O(V³) per call, which is
/// acceptable at campus scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshallPlanner;

impl RoutePlanner for FloydWarshallPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::FloydWarshall
    }

    fn find_path(&self, graph: &Graph, start: LocationId, goal: LocationId) -> SearchResult {
        let matrix = DistanceMatrix::build(graph);
        let (Ok(path), Ok(distance)) = (matrix.path(start, goal), matrix.distance(start, goal))
        else {
            return SearchResult::unreachable(0);
        };
        SearchResult {
            path,
            distance,
            explored: graph.len(),
        }
    }
}

/// Select the planner for a requested algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::FloydWarshall => Box::new(FloydWarshallPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphMode;

    #[test]
    fn planners_report_their_algorithm() {
        assert_eq!(DijkstraPlanner.algorithm(), RouteAlgorithm::Dijkstra);
        assert_eq!(AStarPlanner.algorithm(), RouteAlgorithm::AStar);
        assert_eq!(
            FloydWarshallPlanner.algorithm(),
            RouteAlgorithm::FloydWarshall
        );
    }

    #[test]
    fn select_planner_matches_request() {
        for algorithm in [
            RouteAlgorithm::Dijkstra,
            RouteAlgorithm::AStar,
            RouteAlgorithm::FloydWarshall,
        ] {
            assert_eq!(select_planner(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn floyd_warshall_planner_reconstructs_paths() {
        let mut graph = Graph::new(GraphMode::Directed);
        graph.add_edge(0, 1, 10.0);
        graph.add_edge(1, 2, 10.0);
        graph.add_edge(0, 2, 25.0);

        let result = FloydWarshallPlanner.find_path(&graph, 0, 2);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, 20.0);
    }
}
