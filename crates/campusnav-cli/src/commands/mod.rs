// Module exports for CLI subcommands.
//
// Each module handles a specific subcommand; main.rs stays focused on
// parsing and dispatch.

pub mod locations;
pub mod route;
pub mod table;

use std::path::Path;

use anyhow::{Context, Result};

use campusnav_lib::{load_campus, sample_campus, CampusMap};

/// Load the campus map named on the command line, or the bundled sample.
pub fn load_map(path: Option<&Path>) -> Result<CampusMap> {
    match path {
        Some(path) => load_campus(path)
            .with_context(|| format!("failed to load campus map from {}", path.display())),
        None => Ok(sample_campus()),
    }
}
