//! Campus navigation library entry points.
//!
//! This crate exposes helpers to load a campus map, build the walkway
//! graph, run the shortest-path searches (Dijkstra, A*, Floyd-Warshall),
//! rank candidate routes, and layer traffic / weather / accessibility
//! advisories on the result. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod advisory;
pub mod allpairs;
pub mod campus;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod ranking;
pub mod routing;

pub use advisory::{
    AccessibilityModel, AccessibilityNeeds, Advisory, RouteAdvisor, TrafficModel, WeatherModel,
};
pub use allpairs::DistanceMatrix;
pub use campus::{build_graph, load_campus, sample_campus, CampusMap, Location, LocationId};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphMode};
pub use output::RouteSummary;
pub use path::{find_route_astar, find_route_dijkstra, SearchResult};
pub use routing::{
    alternative_routes, analyze_routes, plan_route, Route, RouteAlgorithm, RouteAnalysis,
    RouteRequest,
};
