use thiserror::Error;

use crate::campus::LocationId;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the campus map.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a numeric location identifier is not part of the graph.
    #[error("unknown location id: {id}")]
    UnknownLocationId { id: LocationId },

    /// Raised when no route exists between two locations.
    #[error("no route found between {start} and {goal}")]
    NoRoute { start: String, goal: String },

    /// Raised when a computed route lacks any stops.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a map file declares the same location name twice.
    #[error("duplicate location name in map: {name}")]
    DuplicateLocation { name: String },

    /// Raised when a map file declares the same location id twice.
    #[error("duplicate location id in map: {id}")]
    DuplicateLocationId { id: LocationId },

    /// Raised when a walkway references a location the map never declares.
    #[error("walkway references undeclared location: {name}")]
    UnknownWalkwayEndpoint { name: String },

    /// Raised when a walkway carries a negative distance.
    #[error("negative walkway distance between {from} and {to}")]
    NegativeDistance { from: String, to: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for map file parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_lists_suggestions() {
        let err = Error::UnknownLocation {
            name: "Balme Librray".to_string(),
            suggestions: vec!["Balme Library".to_string()],
        };
        let rendered = format!("{err}");
        assert!(rendered.contains("Balme Librray"));
        assert!(rendered.contains("Did you mean 'Balme Library'?"));
    }

    #[test]
    fn unknown_location_without_suggestions_is_plain() {
        let err = Error::UnknownLocation {
            name: "Nowhere".to_string(),
            suggestions: vec![],
        };
        assert_eq!(format!("{err}"), "unknown location: Nowhere");
    }
}
