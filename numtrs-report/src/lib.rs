//! Reporting for NUMT overlap analyses: a PNG visualization of the
//! overlapping records and a CSV export of the enriched overlap table.
//!
//! Both outputs are best-effort artifacts derived from an
//! [`OverlapAnalysis`](numtrs_overlap::OverlapAnalysis); a failure here
//! surfaces to the caller but never disturbs the in-memory results.
//! Callers skip both steps when the result set is empty.

pub mod export;
pub mod plot;

// re-exports
pub use self::export::{OverlapRow, read_overlap_table, write_overlap_table};
pub use self::plot::render_overlaps;
