//! Ranking and selection over collections of candidate routes.
//!
//! All operations reorder, filter, or group `Route` values; none of them
//! mutates a route in place.

use std::collections::HashMap;

use crate::routing::{Route, RouteAlgorithm};

/// Weight of the distance term in the composite score.
pub const DISTANCE_WEIGHT: f64 = 0.7;
/// Weight of the time term in the composite score.
pub const TIME_WEIGHT: f64 = 0.3;

/// Composite score minimised by [`find_optimal`].
pub fn composite_score(route: &Route) -> f64 {
    route.distance * DISTANCE_WEIGHT + route.time * TIME_WEIGHT
}

/// In-place ascending sort by total distance.
pub fn sort_by_distance(routes: &mut [Route]) {
    routes.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

/// In-place ascending sort by estimated time.
pub fn sort_by_time(routes: &mut [Route]) {
    routes.sort_by(|a, b| a.time.total_cmp(&b.time));
}

/// In-place lexicographic sort by algorithm tag.
pub fn sort_by_algorithm(routes: &mut [Route]) {
    routes.sort_by(|a, b| a.algorithm.tag().cmp(b.algorithm.tag()));
}

/// The `count` shortest routes in ascending distance order. `count` is
/// clamped to the collection size; zero yields an empty vector.
pub fn top_routes(routes: &[Route], count: usize) -> Vec<Route> {
    let mut sorted = routes.to_vec();
    sort_by_distance(&mut sorted);
    sorted.truncate(count);
    sorted
}

/// Routes whose stop sequence contains at least one stop matching the
/// fragment, case-insensitively.
pub fn filter_by_landmark(routes: &[Route], fragment: &str) -> Vec<Route> {
    let fragment = fragment.to_lowercase();
    routes
        .iter()
        .filter(|route| {
            route
                .stops
                .iter()
                .any(|stop| stop.to_lowercase().contains(&fragment))
        })
        .cloned()
        .collect()
}

/// Partition routes by the algorithm that produced them, preserving
/// encounter order within each group.
pub fn group_by_algorithm(routes: &[Route]) -> HashMap<RouteAlgorithm, Vec<Route>> {
    let mut grouped: HashMap<RouteAlgorithm, Vec<Route>> = HashMap::new();
    for route in routes {
        grouped.entry(route.algorithm).or_default().push(route.clone());
    }
    grouped
}

/// The route minimising the weighted composite score. Strict comparison:
/// the first of several equally scored routes wins. Empty input yields
/// `None`.
pub fn find_optimal(routes: &[Route]) -> Option<&Route> {
    let mut best: Option<(&Route, f64)> = None;
    for route in routes {
        let score = composite_score(route);
        if best.map_or(true, |(_, s)| score < s) {
            best = Some((route, score));
        }
    }
    best.map(|(route, _)| route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(algorithm: RouteAlgorithm, distance: f64, time: f64) -> Route {
        Route {
            algorithm,
            stops: vec!["A".into(), "B".into()],
            distance,
            time,
            explored: 2,
        }
    }

    #[test]
    fn optimal_route_uses_weighted_score() {
        // Scores: 85, 96, 81 — the third route wins.
        let routes = vec![
            route(RouteAlgorithm::Dijkstra, 100.0, 50.0),
            route(RouteAlgorithm::AStar, 120.0, 40.0),
            route(RouteAlgorithm::FloydWarshall, 90.0, 60.0),
        ];
        let optimal = find_optimal(&routes).expect("non-empty input");
        assert_eq!(optimal.algorithm, RouteAlgorithm::FloydWarshall);
    }

    #[test]
    fn optimal_route_ties_go_to_the_first() {
        let routes = vec![
            route(RouteAlgorithm::Dijkstra, 100.0, 50.0),
            route(RouteAlgorithm::AStar, 100.0, 50.0),
        ];
        let optimal = find_optimal(&routes).expect("non-empty input");
        assert_eq!(optimal.algorithm, RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn optimal_route_of_nothing_is_none() {
        assert!(find_optimal(&[]).is_none());
    }
}
