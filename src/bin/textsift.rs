//! textsift: Extract `text` field values from JSON or NDJSON files
//!
//! Usage:
//!   # Single JSON array or object at the root
//!   textsift data.json texts.json
//!
//!   # Newline-delimited JSON (detected automatically when the whole
//!   # file is not one JSON document)
//!   textsift events.jsonl texts.json
//!
//! The output file always holds a pretty-printed JSON array of
//! `{"text": ...}` objects, `[]` when nothing matched. Known failures
//! (missing input, malformed records) are reported on stdout and never
//! crash the process.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use textsift::extract_to_file;

#[derive(Parser, Debug)]
#[command(name = "textsift")]
#[command(about = "Extract 'text' values from a JSON or NDJSON file into a JSON array", long_about = None)]
struct Args {
    /// Input JSON or newline-delimited JSON file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output file for the extracted JSON array
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    // Every known error condition is reported and exits with status 0
    if let Err(err) = run(&args) {
        println!("Error: {:#}", err);
    }
}

fn run(args: &Args) -> Result<()> {
    let report = extract_to_file(&args.input_file, &args.output_file)?;

    for diagnostic in &report.diagnostics {
        println!("{}", diagnostic);
    }

    println!(
        "Extracted {} texts from {} processed records.",
        report.found, report.processed
    );
    println!("Results saved to '{}'.", args.output_file.display());
    println!(
        "The output file contains {} entries.",
        report.entries_written
    );

    Ok(())
}
