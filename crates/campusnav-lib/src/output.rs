use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{Route, RouteAlgorithm};

/// Structured representation of a planned route that higher-level
/// consumers can serialise or render as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub stops: Vec<String>,
    pub distance: f64,
    pub time: f64,
    pub explored: usize,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary. Routes without stops are
    /// rejected.
    pub fn from_route(route: &Route) -> Result<Self> {
        let (Some(start), Some(goal)) = (route.stops.first(), route.stops.last()) else {
            return Err(Error::EmptyRoute);
        };
        Ok(Self {
            algorithm: route.algorithm,
            start: start.clone(),
            goal: goal.clone(),
            hops: route.hop_count(),
            stops: route.stops.clone(),
            distance: route.distance,
            time: route.time,
            explored: route.explored,
        })
    }

    /// Render the human-readable block printed by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Route from {} to {} ({} hops; algorithm: {}):",
            self.start, self.goal, self.hops, self.algorithm
        );
        for (index, stop) in self.stops.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, stop);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total distance: {:.2} m", self.distance);
        let _ = writeln!(
            out,
            "Estimated time: {:.1} s ({:.1} min)",
            self.time,
            self.time / 60.0
        );
        let _ = writeln!(out, "Nodes explored: {}", self.explored);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_captures_endpoints_and_hops() {
        let route = Route {
            algorithm: RouteAlgorithm::Dijkstra,
            stops: vec!["Main Gate".into(), "Banking Square".into()],
            distance: 450.0,
            time: 225.0,
            explored: 4,
        };
        let summary = RouteSummary::from_route(&route).unwrap();
        assert_eq!(summary.start, "Main Gate");
        assert_eq!(summary.goal, "Banking Square");
        assert_eq!(summary.hops, 1);

        let text = summary.render_text();
        assert!(text.contains("algorithm: dijkstra"));
        assert!(text.contains("Total distance: 450.00 m"));
    }

    #[test]
    fn empty_route_is_rejected() {
        let route = Route {
            algorithm: RouteAlgorithm::AStar,
            stops: Vec::new(),
            distance: f64::INFINITY,
            time: f64::INFINITY,
            explored: 0,
        };
        assert!(matches!(
            RouteSummary::from_route(&route),
            Err(Error::EmptyRoute)
        ));
    }
}
