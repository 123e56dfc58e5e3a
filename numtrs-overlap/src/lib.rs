//! Overlap analysis between a fixed mitochondrial query region and a table
//! of NUMT intervals.
//!
//! Given a slice of [`NumtRecord`](numtrs_core::models::NumtRecord)s and a
//! [`QueryRegion`](numtrs_core::models::QueryRegion), [`analyze`] filters to
//! the records that intersect the query, annotates each with its overlap
//! geometry and an [`OverlapType`] classification, and aggregates an
//! [`OverlapSummary`] over the result set.
//!
//! ```rust
//! use numtrs_core::models::{NumtRecord, QueryRegion};
//! use numtrs_overlap::{analyze, OverlapType};
//!
//! let records = vec![NumtRecord {
//!     code: "HSA_NumtS_001".to_string(),
//!     chr: "1".to_string(),
//!     start: 11000,
//!     end: 11500,
//! }];
//!
//! let query = QueryRegion::new(10761, 12137).unwrap();
//! let analysis = analyze(&records, &query);
//!
//! assert_eq!(analysis.summary.total_overlaps, 1);
//! assert_eq!(analysis.results[0].overlap_type, OverlapType::Internal);
//! ```
//!
//! All overlap computation logic lives here. The reporting crate consumes
//! the analysis but does not reimplement any of it.

pub mod analyzer;
pub mod result;

// re-exports
pub use self::analyzer::{OverlapAnalysis, OverlapSummary, analyze, overlaps};
pub use self::result::{OverlapResult, OverlapType};
