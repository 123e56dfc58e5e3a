use log::debug;

use numtrs_core::models::{NumtRecord, QueryRegion};

use crate::result::{OverlapResult, round2};

/// The outcome of one overlap analysis: the annotated overlapping records
/// in input row order, plus the aggregate summary.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapAnalysis {
    pub results: Vec<OverlapResult>,
    pub summary: OverlapSummary,
}

impl OverlapAnalysis {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Aggregate statistics over one analysis.
///
/// All fields are literal zero when no record overlaps the query, the
/// mean included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlapSummary {
    pub total_overlaps: usize,
    /// Raw sum of overlap lengths. Records are not merged along the query
    /// axis, so bases covered by more than one record count more than
    /// once.
    pub total_bases_covered: u64,
    /// `total_bases_covered` as a share of the query length, rounded to
    /// 2 dp. Can exceed 100 when records overlap each other.
    pub percent_query_covered: f64,
    pub max_overlap_length: u32,
    pub min_overlap_length: u32,
    /// Mean overlap length, rounded to 2 dp.
    pub mean_overlap_length: f64,
}

/// Test whether a record overlaps the query region.
///
/// Bounds are inclusive on BOTH ends, so a record touching the query at a
/// single coordinate still counts (as a zero-length overlap). This is the
/// upstream data convention; do not tighten to strict inequalities.
#[inline]
pub fn overlaps(record: &NumtRecord, query: &QueryRegion) -> bool {
    record.start <= query.end() && record.end >= query.start()
}

/// Run the overlap analysis for one query region.
pub fn analyze(records: &[NumtRecord], query: &QueryRegion) -> OverlapAnalysis {
    let results: Vec<OverlapResult> = records
        .iter()
        .filter(|record| overlaps(record, query))
        .map(|record| OverlapResult::compute(record, query))
        .collect();

    debug!(
        "{} of {} records overlap {}",
        results.len(),
        records.len(),
        query
    );

    let summary = summarize(&results, query);

    OverlapAnalysis { results, summary }
}

fn summarize(results: &[OverlapResult], query: &QueryRegion) -> OverlapSummary {
    if results.is_empty() {
        return OverlapSummary::default();
    }

    let total_bases_covered: u64 = results.iter().map(|r| r.overlap_length as u64).sum();
    let max_overlap_length = results.iter().map(|r| r.overlap_length).max().unwrap_or(0);
    let min_overlap_length = results.iter().map(|r| r.overlap_length).min().unwrap_or(0);

    OverlapSummary {
        total_overlaps: results.len(),
        total_bases_covered,
        percent_query_covered: round2(
            total_bases_covered as f64 / query.length() as f64 * 100.0,
        ),
        max_overlap_length,
        min_overlap_length,
        mean_overlap_length: round2(total_bases_covered as f64 / results.len() as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use crate::result::OverlapType;

    fn record(code: &str, start: u32, end: u32) -> NumtRecord {
        NumtRecord {
            code: code.to_string(),
            chr: "1".to_string(),
            start,
            end,
        }
    }

    #[fixture]
    fn query() -> QueryRegion {
        QueryRegion::new(10761, 12137).unwrap()
    }

    #[fixture]
    fn records() -> Vec<NumtRecord> {
        vec![
            record("HSA_NumtS_A", 10000, 12137),
            record("HSA_NumtS_B", 11000, 11500),
            record("HSA_NumtS_C", 12000, 13000),
            record("HSA_NumtS_D", 5000, 9000),
        ]
    }

    #[rstest]
    fn test_inclusion_filter(records: Vec<NumtRecord>, query: QueryRegion) {
        let analysis = analyze(&records, &query);

        let codes: Vec<&str> = analysis
            .results
            .iter()
            .map(|r| r.record.code.as_str())
            .collect();
        // D ends before the query starts and must be excluded
        assert_eq!(codes, vec!["HSA_NumtS_A", "HSA_NumtS_B", "HSA_NumtS_C"]);
    }

    #[rstest]
    fn test_record_a_is_complete(records: Vec<NumtRecord>, query: QueryRegion) {
        let analysis = analyze(&records, &query);
        let a = &analysis.results[0];

        assert_eq!(a.overlap_type, OverlapType::Complete);
        assert_eq!(a.overlap_start, 10761);
        assert_eq!(a.overlap_end, 12137);
        assert_eq!(a.overlap_length, 1376);
        assert_eq!(a.overlap_percentage, 100.00);
    }

    #[rstest]
    fn test_record_b_is_internal(records: Vec<NumtRecord>, query: QueryRegion) {
        let analysis = analyze(&records, &query);
        let b = &analysis.results[1];

        assert_eq!(b.overlap_type, OverlapType::Internal);
        assert_eq!(b.overlap_length, 500);
        assert_eq!(b.overlap_percentage, 36.34);
    }

    #[rstest]
    fn test_record_c_is_partial_right(records: Vec<NumtRecord>, query: QueryRegion) {
        let analysis = analyze(&records, &query);
        let c = &analysis.results[2];

        assert_eq!(c.overlap_type, OverlapType::PartialRight);
        assert_eq!(c.overlap_start, 12000);
        assert_eq!(c.overlap_end, 12137);
        assert_eq!(c.overlap_length, 137);
    }

    #[rstest]
    fn test_summary_statistics(records: Vec<NumtRecord>, query: QueryRegion) {
        let analysis = analyze(&records, &query);
        let summary = &analysis.summary;

        assert_eq!(summary.total_overlaps, 3);
        assert_eq!(summary.total_bases_covered, 1376 + 500 + 137);
        assert_eq!(summary.percent_query_covered, 146.29);
        assert_eq!(summary.max_overlap_length, 1376);
        assert_eq!(summary.min_overlap_length, 137);
        assert_eq!(summary.mean_overlap_length, 671.0);
    }

    #[rstest]
    fn test_empty_result_set_is_all_zero(query: QueryRegion) {
        let records = vec![record("HSA_NumtS_D", 5000, 9000)];
        let analysis = analyze(&records, &query);

        assert!(analysis.is_empty());
        assert_eq!(analysis.summary, OverlapSummary::default());
        assert_eq!(analysis.summary.total_overlaps, 0);
        assert_eq!(analysis.summary.percent_query_covered, 0.0);
        assert_eq!(analysis.summary.mean_overlap_length, 0.0);
    }

    #[rstest]
    // touches the query end at a single coordinate: still included
    #[case(12137, 13000, true)]
    // touches the query start at a single coordinate: still included
    #[case(9000, 10761, true)]
    #[case(12138, 13000, false)]
    #[case(9000, 10760, false)]
    fn test_inclusive_boundary_touch(
        query: QueryRegion,
        #[case] start: u32,
        #[case] end: u32,
        #[case] included: bool,
    ) {
        let rec = record("HSA_NumtS_T", start, end);
        assert_eq!(overlaps(&rec, &query), included);

        let analysis = analyze(&[rec], &query);
        assert_eq!(analysis.summary.total_overlaps, usize::from(included));
        if included {
            let result = &analysis.results[0];
            assert!(result.overlap_start <= result.overlap_end);
            assert_eq!(result.overlap_length, 0);
        }
    }

    #[rstest]
    fn test_every_result_gets_exactly_one_type(query: QueryRegion) {
        // sweep a window across the query and make sure geometry and
        // classification stay consistent
        let records: Vec<NumtRecord> = (0..40)
            .map(|i| record("HSA_NumtS_S", 10000 + i * 100, 10500 + i * 100))
            .collect();

        let analysis = analyze(&records, &query);
        for result in &analysis.results {
            assert!(result.overlap_start <= result.overlap_end);
            assert!(overlaps(&result.record, &query));
            assert_eq!(
                result.overlap_type,
                OverlapType::classify(&result.record, &query)
            );
        }
    }
}
