//! Table command handler: the precomputed all-pairs routing table.

use anyhow::Result;

use campusnav_lib::{build_graph, CampusMap, DistanceMatrix};

pub fn run(map: &CampusMap) -> Result<()> {
    let graph = build_graph(map);
    let matrix = DistanceMatrix::build(&graph);

    let mut printed = 0usize;
    for from in map.locations() {
        for to in map.locations() {
            if from.id == to.id {
                continue;
            }
            let distance = matrix.distance(from.id, to.id)?;
            if distance.is_infinite() {
                continue;
            }
            let stops = matrix
                .path(from.id, to.id)?
                .iter()
                .map(|&id| map.location_name(id).unwrap_or("?"))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("{:.2} m  {stops}", distance);
            printed += 1;
        }
    }

    println!();
    println!("{printed} routes");
    Ok(())
}
