//! Recorded collaborator payloads used by the workspace tests and benches.

use std::path::PathBuf;

/// Coordinates endpoint response, wrapped in a `data` envelope.
pub const CAMPUS_COORDINATES: &str = "campus-coordinates.json";

/// Coordinates endpoint response as a bare array with string and
/// unparsable coordinates mixed in.
pub const MIXED_COORDINATES: &str = "mixed-coordinates.json";

/// Walking directions response from Aldrich Park to a machine.
pub const WALKING_DIRECTIONS: &str = "walking-directions.json";

/// Inventory endpoint response for a single machine.
pub const MACHINE_INVENTORY: &str = "machine-inventory.json";

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(file)
}

/// Reads the named fixture to a string.
pub fn fixture(file: &str) -> std::io::Result<String> {
    std::fs::read_to_string(fixture_path(file))
}
