use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use numtrs_core::models::{NumtRecord, QueryRegion};

/// Round to 2 decimal places, half away from zero.
#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// How a NUMT record's interval relates to the query region.
///
/// Variants are listed in classification precedence order; see
/// [`OverlapType::classify`].
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OverlapType {
    /// Record fully contains the query.
    Complete,
    /// Record extends past the query's left edge but does not contain it.
    #[serde(rename = "Partial (Left)")]
    PartialLeft,
    /// Record extends past the query's right edge but does not contain it.
    #[serde(rename = "Partial (Right)")]
    PartialRight,
    /// Record lies strictly within the query bounds on both sides.
    Internal,
}

impl OverlapType {
    /// Classify a record against the query region.
    ///
    /// Conditions are checked in precedence order and the first match
    /// wins: a record that contains the query satisfies the partial
    /// conditions too but is always Complete. Keep this an ordered chain,
    /// not independent flags.
    pub fn classify(record: &NumtRecord, query: &QueryRegion) -> OverlapType {
        if record.start <= query.start() && record.end >= query.end() {
            OverlapType::Complete
        } else if record.start <= query.start() {
            OverlapType::PartialLeft
        } else if record.end >= query.end() {
            OverlapType::PartialRight
        } else {
            OverlapType::Internal
        }
    }
}

impl Display for OverlapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OverlapType::Complete => "Complete",
            OverlapType::PartialLeft => "Partial (Left)",
            OverlapType::PartialRight => "Partial (Right)",
            OverlapType::Internal => "Internal",
        };
        write!(f, "{}", label)
    }
}

/// One overlapping NUMT record annotated with its overlap geometry.
///
/// Recomputed fresh on every analysis; never persisted except through the
/// export step.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    pub record: NumtRecord,
    pub overlap_start: u32,
    pub overlap_end: u32,
    pub overlap_length: u32,
    /// Overlap length as a share of the query length, rounded to 2 dp.
    pub overlap_percentage: f64,
    pub overlap_type: OverlapType,
}

impl OverlapResult {
    /// Compute the overlap geometry for a record already known to overlap
    /// the query.
    ///
    /// A boundary touch yields `overlap_start == overlap_end` and length
    /// 0. Inverted input rows (start > end) would underflow the length;
    /// saturate at zero instead of panicking, since input rows are not
    /// validated.
    pub fn compute(record: &NumtRecord, query: &QueryRegion) -> OverlapResult {
        let overlap_start = record.start.max(query.start());
        let overlap_end = record.end.min(query.end());
        let overlap_length = overlap_end.checked_sub(overlap_start).unwrap_or(0);
        let overlap_percentage =
            round2(overlap_length as f64 / query.length() as f64 * 100.0);

        OverlapResult {
            record: record.clone(),
            overlap_start,
            overlap_end,
            overlap_length,
            overlap_percentage,
            overlap_type: OverlapType::classify(record, query),
        }
    }
}
