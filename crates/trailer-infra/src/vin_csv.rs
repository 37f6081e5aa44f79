//! CSV loader for VIN input lists

use std::path::Path;

use tracing::debug;
use trailer_types::{Error, Result};

/// Header of the column holding VINs
pub const VIN_COLUMN: &str = "VIN";

/// Load VINs from the `VIN` column of a CSV file, in file order
///
/// Cells are trimmed and empty cells are skipped. Other columns are ignored.
pub fn load_vins<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "VIN list not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let vin_col = find_column(&headers, VIN_COLUMN)
        .ok_or_else(|| Error::MissingColumn(VIN_COLUMN.to_string()))?;

    let mut vins = Vec::new();
    for result in reader.records() {
        let record = result?;
        match record.get(vin_col) {
            Some(vin) if !vin.is_empty() => vins.push(vin.to_string()),
            _ => continue,
        }
    }

    debug!("Loaded {} VINs from {}", vins.len(), path.display());
    Ok(vins)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    // Spreadsheet exports often prefix the first header with a BOM
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
}
