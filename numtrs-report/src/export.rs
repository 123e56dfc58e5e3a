use std::path::Path;

use csv::{Reader, Writer};
use log::info;
use serde::{Deserialize, Serialize};

use numtrs_core::errors::NumtError;
use numtrs_overlap::{OverlapResult, OverlapType};

/// One row of the exported overlap table: the original record fields plus
/// the computed overlap fields. Field order here defines the CSV column
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapRow {
    #[serde(rename = "NumtS Code")]
    pub code: String,

    #[serde(rename = "Chr")]
    pub chr: String,

    #[serde(rename = "Mt Start")]
    pub start: u32,

    #[serde(rename = "Mt End")]
    pub end: u32,

    #[serde(rename = "Overlap Start")]
    pub overlap_start: u32,

    #[serde(rename = "Overlap End")]
    pub overlap_end: u32,

    #[serde(rename = "Overlap Length")]
    pub overlap_length: u32,

    #[serde(rename = "Overlap Percentage")]
    pub overlap_percentage: f64,

    #[serde(rename = "Overlap Type")]
    pub overlap_type: OverlapType,
}

impl From<&OverlapResult> for OverlapRow {
    fn from(result: &OverlapResult) -> Self {
        OverlapRow {
            code: result.record.code.clone(),
            chr: result.record.chr.clone(),
            start: result.record.start,
            end: result.record.end,
            overlap_start: result.overlap_start,
            overlap_end: result.overlap_end,
            overlap_length: result.overlap_length,
            overlap_percentage: result.overlap_percentage,
            overlap_type: result.overlap_type,
        }
    }
}

/// Write the enriched overlap table as CSV, one row per overlapping
/// record, input order preserved, no row index column.
pub fn write_overlap_table(results: &[OverlapResult], path: &Path) -> Result<(), NumtError> {
    let mut writer = Writer::from_path(path)?;
    for result in results {
        writer.serialize(OverlapRow::from(result))?;
    }
    writer.flush()?;

    info!("Wrote {} overlap rows to {}", results.len(), path.display());

    Ok(())
}

/// Read an exported overlap table back into rows. Used by downstream
/// consumers of the artifact and by the round-trip tests.
pub fn read_overlap_table(path: &Path) -> Result<Vec<OverlapRow>, NumtError> {
    let mut reader = Reader::from_path(path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: OverlapRow = row?;
        rows.push(row);
    }

    Ok(rows)
}
