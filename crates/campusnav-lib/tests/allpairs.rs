use campusnav_lib::{build_graph, find_route_dijkstra, sample_campus, DistanceMatrix};

#[test]
fn building_twice_is_idempotent() {
    let graph = build_graph(&sample_campus());
    let first = DistanceMatrix::build(&graph);
    let second = DistanceMatrix::build(&graph);
    assert_eq!(first, second);
}

#[test]
fn diagonal_is_zero_for_every_location() {
    let graph = build_graph(&sample_campus());
    let matrix = DistanceMatrix::build(&graph);
    for node in graph.nodes() {
        assert_eq!(matrix.distance(node, node).unwrap(), 0.0);
    }
}

#[test]
fn matrix_distances_match_single_source_search() {
    let map = sample_campus();
    let graph = build_graph(&map);
    let matrix = DistanceMatrix::build(&graph);

    let start = map.location_id_by_name("Main Gate").unwrap();
    for goal in graph.nodes() {
        let single = find_route_dijkstra(&graph, start, goal);
        assert_eq!(
            matrix.distance(start, goal).unwrap(),
            single.distance,
            "Main Gate -> {goal}"
        );
    }
}

#[test]
fn routing_table_covers_the_connected_campus() {
    let map = sample_campus();
    let graph = build_graph(&map);
    let matrix = DistanceMatrix::build(&graph);

    // The sample campus is connected and undirected: every ordered pair
    // of distinct locations is reachable.
    let n = map.len();
    let paths = matrix.all_paths();
    assert_eq!(paths.len(), n * (n - 1));
    for path in &paths {
        assert!(path.len() >= 2);
        for pair in path.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]));
        }
    }
}
