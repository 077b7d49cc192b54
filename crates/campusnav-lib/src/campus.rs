use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphMode};

/// Numeric identifier for a campus location.
pub type LocationId = usize;

/// Named point of interest on the campus map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Weighted walkway between two locations, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walkway {
    pub from: LocationId,
    pub to: LocationId,
    pub distance: f64,
}

/// In-memory representation of a campus map.
///
/// Built once per session, either from a JSON map file or from the
/// bundled sample dataset. Searches never mutate the map.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    locations: BTreeMap<LocationId, Location>,
    name_to_id: HashMap<String, LocationId>,
    walkways: Vec<Walkway>,
    directed: bool,
}

impl CampusMap {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Number of locations on the map.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Whether walkways are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Registers a location. Duplicate ids or names are rejected.
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.locations.contains_key(&id) {
            return Err(Error::DuplicateLocationId { id });
        }
        let key = name.to_lowercase();
        if self.name_to_id.contains_key(&key) {
            return Err(Error::DuplicateLocation { name });
        }
        self.name_to_id.insert(key, id);
        self.locations.insert(id, Location { id, name });
        Ok(())
    }

    /// Registers a walkway between two already-declared locations.
    pub fn add_walkway(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        let from_id = self
            .location_id_by_name(from)
            .ok_or_else(|| Error::UnknownWalkwayEndpoint {
                name: from.to_string(),
            })?;
        let to_id = self
            .location_id_by_name(to)
            .ok_or_else(|| Error::UnknownWalkwayEndpoint {
                name: to.to_string(),
            })?;
        if distance < 0.0 {
            return Err(Error::NegativeDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.walkways.push(Walkway {
            from: from_id,
            to: to_id,
            distance,
        });
        Ok(())
    }

    /// Case-insensitive exact name lookup.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(&name.to_lowercase()).copied()
    }

    /// Name of a location by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(|loc| loc.name.as_str())
    }

    /// All locations in ascending id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// First location whose name contains `fragment`, case-insensitively,
    /// scanning in ascending id order. This is the landmark resolution
    /// rule: unmatched fragments yield `None` and are skipped by callers.
    pub fn match_location(&self, fragment: &str) -> Option<LocationId> {
        let fragment = fragment.to_lowercase();
        self.locations
            .values()
            .find(|loc| loc.name.to_lowercase().contains(&fragment))
            .map(|loc| loc.id)
    }

    /// Closest location names to a misspelt input, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .values()
            .map(|loc| {
                let score = strsim::jaro_winkler(&wanted, &loc.name.to_lowercase());
                (score, loc.name.as_str())
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Build the routing graph for a campus map.
pub fn build_graph(map: &CampusMap) -> Graph {
    let mode = if map.directed {
        GraphMode::Directed
    } else {
        GraphMode::Undirected
    };
    let mut graph = Graph::new(mode);
    for location in map.locations.values() {
        graph.add_node(location.id);
    }
    for walkway in &map.walkways {
        graph.add_edge(walkway.from, walkway.to, walkway.distance);
    }
    graph
}

#[derive(Debug, Deserialize)]
struct MapFile {
    #[serde(default)]
    directed: bool,
    locations: Vec<Location>,
    walkways: Vec<WalkwayEntry>,
}

#[derive(Debug, Deserialize)]
struct WalkwayEntry {
    from: String,
    to: String,
    distance: f64,
}

/// Load and validate a campus map from a JSON file.
pub fn load_campus(path: &Path) -> Result<CampusMap> {
    let raw = fs::read_to_string(path)?;
    let file: MapFile = serde_json::from_str(&raw)?;

    let mut map = CampusMap::new(file.directed);
    for location in file.locations {
        map.add_location(location.id, location.name)?;
    }
    for walkway in &file.walkways {
        map.add_walkway(&walkway.from, &walkway.to, walkway.distance)?;
    }
    tracing::debug!(
        locations = map.len(),
        walkways = map.walkways.len(),
        "loaded campus map from {}",
        path.display()
    );
    Ok(map)
}

static SAMPLE_CAMPUS: Lazy<CampusMap> = Lazy::new(|| {
    let names = [
        "Engineering School",
        "CS Department",
        "Math Department",
        "Law Faculty",
        "JQB",
        "Main Gate",
        "School of Performing Arts",
        "Balme Library",
        "UGCS",
        "Business School",
        "Volta Hall",
        "Commonwealth",
        "Great Hall",
        "Akuafo Hall",
        "Legon Hall",
        "Bush Canteen",
        "Sarbah Park",
        "Fire Station",
        "Banking Square",
        "Night Market",
        "Basic School",
        "Diaspora Halls",
    ];
    let walkways = [
        ("Main Gate", "Banking Square", 450.0),
        ("Main Gate", "Basic School", 520.0),
        ("Main Gate", "Balme Library", 800.0),
        ("Banking Square", "Night Market", 180.0),
        ("Banking Square", "Fire Station", 240.0),
        ("Night Market", "Diaspora Halls", 650.0),
        ("Night Market", "Business School", 360.0),
        ("Fire Station", "Bush Canteen", 210.0),
        ("Bush Canteen", "Sarbah Park", 320.0),
        ("Bush Canteen", "Basic School", 390.0),
        ("Sarbah Park", "Legon Hall", 150.0),
        ("Sarbah Park", "Akuafo Hall", 230.0),
        ("Legon Hall", "Akuafo Hall", 260.0),
        ("Akuafo Hall", "Great Hall", 300.0),
        ("Akuafo Hall", "Balme Library", 280.0),
        ("Balme Library", "UGCS", 190.0),
        ("Balme Library", "Business School", 430.0),
        ("UGCS", "Math Department", 340.0),
        ("UGCS", "Law Faculty", 310.0),
        ("Math Department", "JQB", 400.0),
        ("JQB", "Law Faculty", 289.25),
        ("Law Faculty", "CS Department", 346.5),
        ("CS Department", "Engineering School", 220.0),
        ("Engineering School", "School of Performing Arts", 410.0),
        ("School of Performing Arts", "Volta Hall", 380.0),
        ("Volta Hall", "Commonwealth", 330.0),
        ("Volta Hall", "Business School", 290.0),
        ("Commonwealth", "Great Hall", 270.0),
        ("Commonwealth", "Diaspora Halls", 710.0),
        ("Great Hall", "Diaspora Halls", 540.0),
    ];

    let mut map = CampusMap::new(false);
    for (id, name) in names.iter().enumerate() {
        map.add_location(id, *name).expect("sample names are unique");
    }
    for (from, to, distance) in walkways {
        map.add_walkway(from, to, distance)
            .expect("sample walkways reference declared locations");
    }
    map
});

/// The bundled University of Ghana campus dataset.
pub fn sample_campus() -> CampusMap {
    SAMPLE_CAMPUS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_campus_is_consistent() {
        let map = sample_campus();
        assert_eq!(map.len(), 22);
        assert!(!map.is_directed());
        assert_eq!(map.location_id_by_name("balme library"), Some(7));
        assert_eq!(map.location_name(5), Some("Main Gate"));
    }

    #[test]
    fn match_location_prefers_lowest_id() {
        let map = sample_campus();
        // "Hall" appears in several names; Volta Hall has the lowest id.
        assert_eq!(map.match_location("hall"), Some(10));
        assert_eq!(map.match_location("library"), Some(7));
        assert_eq!(map.match_location("observatory"), None);
    }

    #[test]
    fn fuzzy_matches_rank_close_names_first() {
        let map = sample_campus();
        let matches = map.fuzzy_matches("Balme Librray", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Balme Library"));
    }

    #[test]
    fn duplicate_location_name_is_rejected() {
        let mut map = CampusMap::new(false);
        map.add_location(0, "Gate").unwrap();
        assert!(matches!(
            map.add_location(1, "gate"),
            Err(Error::DuplicateLocation { .. })
        ));
    }

    #[test]
    fn walkway_requires_declared_endpoints() {
        let mut map = CampusMap::new(false);
        map.add_location(0, "Gate").unwrap();
        assert!(matches!(
            map.add_walkway("Gate", "Library", 100.0),
            Err(Error::UnknownWalkwayEndpoint { .. })
        ));
    }
}
