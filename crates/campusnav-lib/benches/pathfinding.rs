use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

use campusnav_lib::{
    build_graph, plan_route, sample_campus, CampusMap, DistanceMatrix, RouteAlgorithm,
    RouteRequest,
};

static CAMPUS: Lazy<CampusMap> = Lazy::new(sample_campus);
static DIJKSTRA_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Main Gate", "Diaspora Halls").with_algorithm(RouteAlgorithm::Dijkstra)
});
static ASTAR_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Main Gate", "Diaspora Halls").with_algorithm(RouteAlgorithm::AStar)
});
static LANDMARK_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Main Gate", "Diaspora Halls")
        .with_algorithm(RouteAlgorithm::Dijkstra)
        .with_landmarks(vec!["Library".to_string()])
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let campus = &*CAMPUS;

    c.bench_function("dijkstra_gate_diaspora", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let route = plan_route(campus, request).expect("route exists");
            black_box(route.hop_count())
        });
    });

    c.bench_function("astar_gate_diaspora", |b| {
        let request = &*ASTAR_REQUEST;
        b.iter(|| {
            let route = plan_route(campus, request).expect("route exists");
            black_box(route.explored)
        });
    });

    c.bench_function("landmark_gate_diaspora", |b| {
        let request = &*LANDMARK_REQUEST;
        b.iter(|| {
            let route = plan_route(campus, request).expect("route exists");
            black_box(route.distance)
        });
    });

    c.bench_function("floyd_warshall_full_table", |b| {
        let graph = build_graph(campus);
        b.iter(|| {
            let matrix = DistanceMatrix::build(&graph);
            black_box(matrix.all_paths().len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
