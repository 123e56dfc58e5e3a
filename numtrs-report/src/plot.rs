use std::path::Path;

use anyhow::Result;
use log::info;
use plotters::prelude::*;

use numtrs_core::models::QueryRegion;
use numtrs_overlap::{OverlapResult, OverlapType};

const PLOT_SIZE: (u32, u32) = (1200, 600);

/// Fixed color mapping for overlap types.
fn color_for(overlap_type: OverlapType) -> RGBColor {
    match overlap_type {
        OverlapType::Complete => GREEN,
        OverlapType::PartialLeft => BLUE,
        OverlapType::PartialRight => RED,
        OverlapType::Internal => RGBColor(128, 0, 128), // purple
    }
}

/// Render the overlap visualization PNG: one horizontal segment per
/// overlapping record at a distinct vertical slot, colored by overlap
/// type, above a black reference segment for the query region at y = 0.
///
/// The drawing area lives only inside this function and is presented
/// before returning, so no figure state survives the call. Callers skip
/// this step entirely when the result set is empty.
pub fn render_overlaps(
    results: &[OverlapResult],
    query: &QueryRegion,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // axis bounds cover the query plus every record, full record extents
    // included (records are drawn whole, not clipped to the overlap)
    let x_min = results
        .iter()
        .map(|r| r.record.start)
        .min()
        .map_or(query.start(), |m| m.min(query.start()));
    let x_max = results
        .iter()
        .map(|r| r.record.end)
        .max()
        .map_or(query.end(), |m| m.max(query.end()));
    let y_max = results.len() as i32 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption("NUMT Overlaps with Query Region", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, -1..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Mitochondrial Genome Position")
        .y_desc("NUMT Index")
        .draw()?;

    let query_style = BLACK.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            [(query.start(), 0), (query.end(), 0)],
            query_style,
        ))?
        .label("Query Region")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], query_style));

    for (idx, result) in results.iter().enumerate() {
        let y = idx as i32 + 1;
        let style = color_for(result.overlap_type).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                [(result.record.start, y), (result.record.end, y)],
                style,
            ))?
            .label(format!(
                "NUMT {} ({})",
                result.record.code, result.overlap_type
            ))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    info!("Wrote overlap visualization to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use tempfile::TempDir;

    use numtrs_core::models::NumtRecord;
    use numtrs_overlap::analyze;

    #[rstest]
    fn test_render_writes_png() {
        let records = vec![
            NumtRecord {
                code: "HSA_NumtS_A".to_string(),
                chr: "1".to_string(),
                start: 10000,
                end: 12137,
            },
            NumtRecord {
                code: "HSA_NumtS_B".to_string(),
                chr: "2".to_string(),
                start: 11000,
                end: 11500,
            },
        ];
        let query = QueryRegion::new(10761, 12137).unwrap();
        let analysis = analyze(&records, &query);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NUMT_overlap_visualization.png");

        render_overlaps(&analysis.results, &query, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
