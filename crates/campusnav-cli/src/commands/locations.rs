//! Locations command handler.

use anyhow::Result;

use campusnav_lib::CampusMap;

pub fn run(map: &CampusMap) -> Result<()> {
    for location in map.locations() {
        println!("{:>3}  {}", location.id, location.name);
    }
    println!();
    println!("{} locations", map.len());
    Ok(())
}
