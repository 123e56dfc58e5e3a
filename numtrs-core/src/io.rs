use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use crate::errors::NumtError;
use crate::models::NumtRecord;
use crate::utils::get_dynamic_reader;

/// Columns the NUMT annotation table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["NumtS Code", "Chr", "Mt Start", "Mt End"];

/// Pick the field delimiter from the file name: `.tsv`/`.txt` tables are
/// tab-delimited, everything else is treated as CSV. A trailing `.gz` is
/// stripped first since the reader decompresses transparently.
fn delimiter_for(path: &Path) -> u8 {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let name = name.strip_suffix(".gz").unwrap_or(name);
    if name.ends_with(".tsv") || name.ends_with(".txt") {
        b'\t'
    } else {
        b','
    }
}

/// Read the NUMT annotation table from a delimited text file.
///
/// The header is validated against [`REQUIRED_COLUMNS`] before any row is
/// deserialized, so a table with the wrong shape fails with a labeled
/// error instead of a generic parse failure on the first row.
pub fn read_numt_table(path: &Path) -> Result<Vec<NumtRecord>, NumtError> {
    let reader = get_dynamic_reader(path)
        .map_err(|e| NumtError::FileReadError(format!("{}: {}", path.display(), e)))?;

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(NumtError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: NumtRecord = row?;
        records.push(record);
    }

    info!("Loaded {} NUMT records from {}", records.len(), path.display());

    Ok(records)
}
