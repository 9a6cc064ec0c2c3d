//! CLI tool producing the flat CSV schedule table.
//!
//! Usage:
//!   flat_report                         # schedule.json -> schedule_flat.csv
//!   flat_report <input.json>            # custom input, default output
//!   flat_report <input.json> -o out.csv # custom input and output

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::path::Path;

use timegrid::export::csv;
use timegrid::{flatten, parse_entries, ScheduleTables};

const DEFAULT_INPUT: &str = "schedule.json";
const DEFAULT_OUTPUT: &str = "schedule_flat.csv";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let input_path = args.get(1).map_or(DEFAULT_INPUT, String::as_str);
    let output_path = match (args.get(2).map(String::as_str), args.get(3)) {
        (Some("-o"), Some(path)) => path.as_str(),
        (None, _) => DEFAULT_OUTPUT,
        _ => {
            eprintln!("Usage: flat_report [input.json] [-o output.csv]");
            std::process::exit(1);
        }
    };

    let data = match fs::read(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {input_path}: {e}");
            std::process::exit(1);
        }
    };

    let entries = match parse_entries(&data) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error parsing {input_path}: {e}");
            std::process::exit(1);
        }
    };

    let tables = ScheduleTables::default();
    let rows = flatten(&entries, &tables);

    if let Err(e) = csv::write_file(&rows, Path::new(output_path)) {
        eprintln!("Error writing {output_path}: {e}");
        std::process::exit(1);
    }
    eprintln!("Written: {output_path} ({} rows)", rows.len());
}
