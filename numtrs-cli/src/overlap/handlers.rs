use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use numtrs_core::io::read_numt_table;
use numtrs_core::models::{DEFAULT_QUERY_END, DEFAULT_QUERY_START, QueryRegion};
use numtrs_overlap::{OverlapAnalysis, analyze};
use numtrs_report::{render_overlaps, write_overlap_table};

pub const PLOT_FILE: &str = "NUMT_overlap_visualization.png";
pub const RESULTS_FILE: &str = "NUMT_overlap_results.csv";
const DEFAULT_OUTPUT_DIR: &str = "output";

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a NUMT table is required.");

    let default_output = DEFAULT_OUTPUT_DIR.to_string();
    let output = matches
        .get_one::<String>("output")
        .unwrap_or(&default_output);

    let start = parse_bound(matches, "start", DEFAULT_QUERY_START)?;
    let end = parse_bound(matches, "end", DEFAULT_QUERY_END)?;
    let query = QueryRegion::new(start, end)?;

    let records = read_numt_table(Path::new(input))?;
    let analysis = analyze(&records, &query);

    print_report(&analysis, &query);

    // empty result set is a normal outcome: report printed, artifacts
    // skipped
    if analysis.is_empty() {
        println!("\nNo overlaps found to visualize.");
        return Ok(());
    }

    let output_dir = Path::new(output);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let plot_path = output_dir.join(PLOT_FILE);
    render_overlaps(&analysis.results, &query, &plot_path)?;

    let results_path = output_dir.join(RESULTS_FILE);
    write_overlap_table(&analysis.results, &results_path)?;

    println!("\nResults have been saved to {}", results_path.display());
    println!("Plot has been saved to {}", plot_path.display());

    Ok(())
}

fn parse_bound(matches: &ArgMatches, name: &str, default: u32) -> Result<u32> {
    match matches.get_one::<String>(name) {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("Invalid query {}: {}", name, raw)),
        None => Ok(default),
    }
}

fn print_report(analysis: &OverlapAnalysis, query: &QueryRegion) {
    let summary = &analysis.summary;

    println!("\nOverlap Analysis Results:");
    println!("{}", "-".repeat(50));
    println!("Query Region: {}", query);
    println!("Total length of query region: {} bp", query.length());

    println!("\nSummary Statistics:");
    println!("Total Overlaps: {}", summary.total_overlaps);
    println!("Total Bases Covered: {}", summary.total_bases_covered);
    println!("Percent Query Covered: {}", summary.percent_query_covered);
    println!("Max Overlap Length: {}", summary.max_overlap_length);
    println!("Min Overlap Length: {}", summary.min_overlap_length);
    println!("Mean Overlap Length: {}", summary.mean_overlap_length);

    if !analysis.is_empty() {
        println!("\nDetailed Overlapping NUMTs:");
        println!(
            "{:<16} {:<6} {:>9} {:>9} {:>13} {:>11} {:>14} {:>18} {}",
            "NumtS Code",
            "Chr",
            "Mt Start",
            "Mt End",
            "Overlap Start",
            "Overlap End",
            "Overlap Length",
            "Overlap Percentage",
            "Overlap Type"
        );
        for result in &analysis.results {
            println!(
                "{:<16} {:<6} {:>9} {:>9} {:>13} {:>11} {:>14} {:>18.2} {}",
                result.record.code,
                result.record.chr,
                result.record.start,
                result.record.end,
                result.overlap_start,
                result.overlap_end,
                result.overlap_length,
                result.overlap_percentage,
                result.overlap_type
            );
        }
    }
}
