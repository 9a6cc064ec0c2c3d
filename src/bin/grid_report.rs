//! CLI tool producing the merged-cell XLSX schedule grid.
//!
//! Usage:
//!   grid_report                          # schedule.json -> schedule_grid.xlsx
//!   grid_report <input.json>             # custom input, default output
//!   grid_report <input.json> -o out.xlsx # custom input and output

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::path::Path;

use timegrid::export::xlsx;
use timegrid::{parse_entries, GridBuilder, ScheduleTables};

const DEFAULT_INPUT: &str = "schedule.json";
const DEFAULT_OUTPUT: &str = "schedule_grid.xlsx";

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
            eprintln!("Usage: grid_report [input.json] [-o output.xlsx]");
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
    let grid = match GridBuilder::new(&tables).build(&entries) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error building grid: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = xlsx::write_file(&grid, Path::new(output_path)) {
        eprintln!("Error writing {output_path}: {e}");
        std::process::exit(1);
    }
    eprintln!("Written: {output_path}");
}
