use clap::{Command, arg};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Analyze NUMT overlaps with a mitochondrial query region")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "The NUMT annotation table (csv/tsv, optionally gzipped)"))
        .arg(
            arg!(-o --output <output> "Directory for the visualization and results table (default: output)")
                .required(false),
        )
        .arg(arg!(--start <start> "Start of the query region (default: 10761)").required(false))
        .arg(arg!(--end <end> "End of the query region (default: 12137)").required(false))
}
