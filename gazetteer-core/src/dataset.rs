//! Loading of the city/state corpus from a headered CSV file.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

const CITY_COLUMN: &str = "City";
const STATE_COLUMN: &str = "State";

/// One row of the corpus. Immutable once loaded.
///
/// Duplicate city names across different states are allowed; they are
/// disambiguated downstream only by which row's vector the index ranks
/// first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub state: String,
}

/// Reads `(City, State)` records from `path`, preserving file order.
///
/// Row order matters: the vector index later joins search hits back to
/// these records by position, so the loader must not reorder, dedupe, or
/// drop rows. Rows with an empty city name (after trimming) are rejected
/// outright rather than silently skipped, since skipping would shift
/// every later position.
///
/// A file with headers but no data rows yields an empty corpus; that is
/// not a load error (searches against an empty corpus return no
/// candidates).
pub fn load_records(path: &Path) -> CoreResult<Vec<CityRecord>> {
    let file = File::open(path).map_err(|source| CoreError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| CoreError::Dataset(format!("failed to read headers: {}", e)))?
        .clone();
    let city_col = headers
        .iter()
        .position(|h| h == CITY_COLUMN)
        .ok_or_else(|| CoreError::Dataset(format!("missing required column '{}'", CITY_COLUMN)))?;
    let state_col = headers
        .iter()
        .position(|h| h == STATE_COLUMN)
        .ok_or_else(|| CoreError::Dataset(format!("missing required column '{}'", STATE_COLUMN)))?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        // Rows are 1-based in error messages, plus one for the header line.
        let line = row + 2;
        let record = result.map_err(|e| CoreError::Dataset(format!("line {}: {}", line, e)))?;
        let city = record.get(city_col).unwrap_or("").trim();
        let state = record.get(state_col).unwrap_or("").trim();
        if city.is_empty() {
            return Err(CoreError::Dataset(format!("line {}: empty city name", line)));
        }
        records.push(CityRecord {
            city: city.to_string(),
            state: state.to_string(),
        });
    }

    debug!(count = records.len(), path = ?path, "Loaded city records");
    Ok(records)
}
