use campusnav_lib::{
    alternative_routes, analyze_routes, plan_route, sample_campus, CampusMap, Error,
    RouteAlgorithm, RouteRequest,
};

/// Four locations with a tempting direct shortcut that is not optimal.
fn diamond_campus() -> CampusMap {
    let mut map = CampusMap::new(true);
    map.add_location(0, "A").unwrap();
    map.add_location(1, "B").unwrap();
    map.add_location(2, "C").unwrap();
    map.add_location(3, "D").unwrap();
    map.add_walkway("A", "B", 10.0).unwrap();
    map.add_walkway("B", "C", 10.0).unwrap();
    map.add_walkway("A", "C", 25.0).unwrap();
    map.add_walkway("C", "D", 5.0).unwrap();
    map
}

#[test]
fn dijkstra_takes_the_indirect_shortest_path() {
    let map = diamond_campus();
    let request = RouteRequest::new("A", "D").with_algorithm(RouteAlgorithm::Dijkstra);
    let route = plan_route(&map, &request).expect("route exists");

    assert_eq!(route.stops, vec!["A", "B", "C", "D"]);
    assert_eq!(route.distance, 25.0);
}

#[test]
fn time_estimate_is_half_the_distance() {
    let map = diamond_campus();
    let request = RouteRequest::new("A", "D");
    let route = plan_route(&map, &request).expect("route exists");

    // 2 m/s walking pace: seconds are half the metres.
    assert_eq!(route.time, route.distance / 2.0);
}

#[test]
fn every_algorithm_plans_on_the_sample_campus() {
    let map = sample_campus();
    for algorithm in [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::AStar,
        RouteAlgorithm::FloydWarshall,
    ] {
        let request = RouteRequest::new("Main Gate", "Balme Library").with_algorithm(algorithm);
        let route = plan_route(&map, &request).expect("route exists");
        assert_eq!(route.algorithm, algorithm);
        assert_eq!(route.stops.first().map(String::as_str), Some("Main Gate"));
        assert_eq!(route.stops.last().map(String::as_str), Some("Balme Library"));
        assert!(route.distance.is_finite());
    }
}

#[test]
fn unknown_location_gets_suggestions() {
    let map = sample_campus();
    let request = RouteRequest::new("Main Gte", "Balme Library");
    let error = plan_route(&map, &request).expect_err("misspelt start");

    match error {
        Error::UnknownLocation { name, suggestions } => {
            assert_eq!(name, "Main Gte");
            assert!(suggestions.contains(&"Main Gate".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreachable_goal_is_reported_as_no_route() {
    let mut map = diamond_campus();
    map.add_location(9, "Island").unwrap();
    let request = RouteRequest::new("A", "Island");

    let error = plan_route(&map, &request).expect_err("island is unreachable");
    assert!(matches!(error, Error::NoRoute { .. }));
}

#[test]
fn identical_endpoints_yield_a_trivial_route() {
    let map = sample_campus();
    let request = RouteRequest::new("JQB", "JQB");
    let route = plan_route(&map, &request).expect("trivial route");

    assert_eq!(route.stops, vec!["JQB"]);
    assert_eq!(route.distance, 0.0);
}

#[test]
fn alternatives_are_distinct_and_sorted() {
    let map = sample_campus();
    let request = RouteRequest::new("Main Gate", "Balme Library").with_alternatives(3);
    let routes = alternative_routes(&map, &request).expect("routes exist");

    assert!(!routes.is_empty());
    assert!(routes.len() <= 3);
    for pair in routes.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
        assert_ne!(pair[0].stops, pair[1].stops);
    }
}

#[test]
fn analysis_collects_all_algorithms_and_an_optimum() {
    let map = sample_campus();
    let analysis = analyze_routes(&map, "Main Gate", "Great Hall", &[]).expect("analysis runs");

    assert_eq!(analysis.routes.len(), 3);
    let optimal = analysis.optimal.expect("candidates exist");
    let best_distance = analysis
        .routes
        .iter()
        .map(|r| r.distance)
        .fold(f64::INFINITY, f64::min);
    // With time proportional to distance, the composite optimum is the
    // shortest candidate.
    assert_eq!(optimal.distance, best_distance);
}

#[test]
fn analysis_of_unreachable_pair_is_empty() {
    let mut map = diamond_campus();
    map.add_location(9, "Island").unwrap();
    let analysis = analyze_routes(&map, "A", "Island", &[]).expect("analysis runs");

    assert!(analysis.routes.is_empty());
    assert!(analysis.optimal.is_none());
}
