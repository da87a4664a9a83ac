//! Direction file loading.
//!
//! Input files are JSON arrays of directions:
//!
//! ```json
//! [
//!   { "declination": 12.0, "inclination": 41.5,
//!     "bedding": { "strike": 30.0, "dip": 20.0 }, "tag": "S1-01" }
//! ]
//! ```

use std::path::Path;

use paleo_core::types::Direction;
use tracing::debug;

use crate::{CliError, Result};

/// Loads directions from a JSON file.
pub fn load_directions(path: &Path) -> Result<Vec<Direction>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let directions: Vec<Direction> = serde_json::from_str(&content)?;

    let with_bedding = directions.iter().filter(|d| d.bedding().is_some()).count();
    debug!(
        path = %path.display(),
        directions = directions.len(),
        with_bedding,
        "Loaded directions"
    );
    Ok(directions)
}
