//! Route planning over a campus map.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms
//! - [`RouteRequest`] - High-level route planning request
//! - [`Route`] - Planned route result, ready for ranking
//! - [`plan_route`] - Main entry point for computing a single route
//! - [`alternative_routes`] - Up to three distinct route suggestions
//! - [`analyze_routes`] - Candidate routes from every algorithm plus the
//!   composite-score optimum
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own [`RoutePlanner`] struct, so
//! new algorithms can be added without touching the orchestration here.

mod planner;

pub use planner::{
    select_planner, AStarPlanner, DijkstraPlanner, FloydWarshallPlanner, RoutePlanner,
};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::campus::{build_graph, CampusMap, LocationId};
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphMode};
use crate::path::{find_route_astar, find_route_astar_avoiding, SearchResult};
use crate::ranking;

/// Average walking pace on campus footpaths, metres per second.
const WALKING_SPEED_M_PER_S: f64 = 2.0;

/// Cap on the number of alternative routes returned.
const MAX_ALTERNATIVES: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Label-setting shortest path (linear minimum scan).
    #[default]
    Dijkstra,
    /// A* search guided by the identifier-difference heuristic.
    AStar,
    /// All-pairs matrix lookup with next-hop reconstruction.
    FloydWarshall,
}

impl RouteAlgorithm {
    /// Stable tag used for display, grouping, and lexicographic sorting.
    pub fn tag(self) -> &'static str {
        match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::FloydWarshall => "floyd-warshall",
        }
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    /// Landmark name fragments the route should pass through.
    pub landmarks: Vec<String>,
    /// Number of alternative routes wanted from [`alternative_routes`].
    pub alternatives: usize,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::default(),
            landmarks: Vec::new(),
            alternatives: 1,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_landmarks(mut self, landmarks: Vec<String>) -> Self {
        self.landmarks = landmarks;
        self
    }

    pub fn with_alternatives(mut self, count: usize) -> Self {
        self.alternatives = count;
        self
    }
}

/// Planned route: an immutable value object once constructed. Ranking
/// reorders and filters collections of these, never mutating one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub algorithm: RouteAlgorithm,
    /// Ordered stop names from start to goal.
    pub stops: Vec<String>,
    /// Total walked distance in metres.
    pub distance: f64,
    /// Estimated walking time in seconds.
    pub time: f64,
    /// Nodes examined by the search (diagnostic only).
    pub explored: usize,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    fn from_search(map: &CampusMap, algorithm: RouteAlgorithm, result: SearchResult) -> Self {
        let stops = result
            .path
            .iter()
            .map(|&id| {
                map.location_name(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{id}"))
            })
            .collect();
        Self {
            algorithm,
            stops,
            distance: result.distance,
            time: result.distance / WALKING_SPEED_M_PER_S,
            explored: result.explored,
        }
    }
}

/// Candidate routes from every algorithm plus the composite-score pick.
#[derive(Debug, Clone, Serialize)]
pub struct RouteAnalysis {
    pub routes: Vec<Route>,
    pub optimal: Option<Route>,
}

/// Resolve a location name, attaching fuzzy suggestions on failure.
fn resolve_location(map: &CampusMap, name: &str) -> Result<LocationId> {
    map.location_id_by_name(name)
        .ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: map.fuzzy_matches(name, 3),
        })
}

/// Compute a route using the requested algorithm and constraints.
///
/// Resolves the endpoint names, runs the selected planner (restricted
/// through the best resolved landmark when landmarks were requested), and
/// converts an unreachable outcome into [`Error::NoRoute`] at this API
/// boundary. The search layer below keeps the empty-path / infinite
/// distance encoding.
pub fn plan_route(map: &CampusMap, request: &RouteRequest) -> Result<Route> {
    let start_id = resolve_location(map, &request.start)?;
    let goal_id = resolve_location(map, &request.goal)?;
    let graph = build_graph(map);

    let result = if request.landmarks.is_empty() {
        select_planner(request.algorithm).find_path(&graph, start_id, goal_id)
    } else {
        search_via_landmarks(
            map,
            &graph,
            start_id,
            goal_id,
            &request.landmarks,
            request.algorithm,
        )
    };

    if result.is_unreachable() {
        return Err(Error::NoRoute {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }
    Ok(Route::from_search(map, request.algorithm, result))
}

/// Landmark-constrained composite search.
///
/// Each fragment resolves to the first location whose name contains it,
/// case-insensitively; fragments with no match are skipped. For every
/// resolved landmark the start→landmark and landmark→goal legs are
/// computed independently and the landmark with the smallest combined
/// distance wins; the merged path drops the duplicated landmark stop.
/// When nothing resolves the search falls back to the unconstrained
/// planner — never an error.
fn search_via_landmarks(
    map: &CampusMap,
    graph: &Graph,
    start: LocationId,
    goal: LocationId,
    fragments: &[String],
    algorithm: RouteAlgorithm,
) -> SearchResult {
    let planner = select_planner(algorithm);

    let mut landmarks = Vec::new();
    for fragment in fragments {
        match map.match_location(fragment) {
            Some(id) => landmarks.push(id),
            None => {
                tracing::debug!("no location matches landmark fragment '{fragment}', skipping");
            }
        }
    }
    if landmarks.is_empty() {
        tracing::debug!("no landmark resolved, falling back to unconstrained search");
        return planner.find_path(graph, start, goal);
    }

    let mut best: Option<SearchResult> = None;
    for landmark in landmarks {
        let to_leg = planner.find_path(graph, start, landmark);
        let from_leg = planner.find_path(graph, landmark, goal);
        if to_leg.is_unreachable() || from_leg.is_unreachable() {
            continue;
        }

        let distance = to_leg.distance + from_leg.distance;
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            let explored = to_leg.explored + from_leg.explored;
            let mut path = to_leg.path;
            path.extend(from_leg.path.into_iter().skip(1));
            best = Some(SearchResult {
                path,
                distance,
                explored,
            });
        }
    }

    best.unwrap_or_else(|| SearchResult::unreachable(0))
}

/// Suggest up to three distinct routes between two locations.
///
/// The base A* search is deterministic, so re-running it cannot surface
/// alternatives. Instead each edge of the best path is excluded in turn
/// and the search re-run; results that differ in stop sequence are kept,
/// sorted by distance.
pub fn alternative_routes(map: &CampusMap, request: &RouteRequest) -> Result<Vec<Route>> {
    let start_id = resolve_location(map, &request.start)?;
    let goal_id = resolve_location(map, &request.goal)?;
    let graph = build_graph(map);

    let base = find_route_astar(&graph, start_id, goal_id);
    if base.is_unreachable() {
        return Err(Error::NoRoute {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    let requested = request.alternatives.clamp(1, MAX_ALTERNATIVES);
    let mut seen: HashSet<Vec<LocationId>> = HashSet::new();
    seen.insert(base.path.clone());
    let mut candidates = vec![base.clone()];

    for pair in base.path.windows(2) {
        let mut excluded = HashSet::new();
        excluded.insert((pair[0], pair[1]));
        if graph.mode() == GraphMode::Undirected {
            excluded.insert((pair[1], pair[0]));
        }

        let detour = find_route_astar_avoiding(&graph, start_id, goal_id, &excluded);
        if detour.is_unreachable() {
            continue;
        }
        if seen.insert(detour.path.clone()) {
            candidates.push(detour);
        }
    }

    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates.truncate(requested);
    Ok(candidates
        .into_iter()
        .map(|result| Route::from_search(map, RouteAlgorithm::AStar, result))
        .collect())
}

/// Run every algorithm for one endpoint pair and select the
/// composite-score optimum among the candidates.
///
/// Algorithms that find no route contribute nothing; an unreachable pair
/// therefore yields an empty analysis rather than an error.
pub fn analyze_routes(
    map: &CampusMap,
    start: &str,
    goal: &str,
    landmarks: &[String],
) -> Result<RouteAnalysis> {
    let mut routes = Vec::new();
    for algorithm in [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::AStar,
        RouteAlgorithm::FloydWarshall,
    ] {
        let request = RouteRequest::new(start, goal)
            .with_algorithm(algorithm)
            .with_landmarks(landmarks.to_vec());
        match plan_route(map, &request) {
            Ok(route) => routes.push(route),
            Err(Error::NoRoute { .. }) => continue,
            Err(err) => return Err(err),
        }
    }

    let optimal = ranking::find_optimal(&routes).cloned();
    Ok(RouteAnalysis { routes, optimal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_defaults() {
        let request = RouteRequest::new("Main Gate", "Balme Library");
        assert_eq!(request.algorithm, RouteAlgorithm::Dijkstra);
        assert!(request.landmarks.is_empty());
        assert_eq!(request.alternatives, 1);
    }

    #[test]
    fn algorithm_tags_are_stable() {
        assert_eq!(RouteAlgorithm::Dijkstra.tag(), "dijkstra");
        assert_eq!(RouteAlgorithm::AStar.tag(), "a-star");
        assert_eq!(RouteAlgorithm::FloydWarshall.tag(), "floyd-warshall");
    }

    #[test]
    fn route_hop_count() {
        let route = Route {
            algorithm: RouteAlgorithm::Dijkstra,
            stops: vec!["A".into(), "B".into(), "C".into()],
            distance: 20.0,
            time: 10.0,
            explored: 3,
        };
        assert_eq!(route.hop_count(), 2);
    }
}
