//! pdf2clauses - Split a standards PDF into JSON and spreadsheet clause files.
//!
//! Recovers the numbered clause hierarchy of a standards document and writes
//! two projections of it: `clauses.json` (nested clauses) and `clauses.xlsx`
//! (one row per clause).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use miranda_core::converter::write_workbook;
use miranda_core::high_level::extract_clause_data_from_file;

/// Split a standards PDF into JSON and spreadsheet clause files.
#[derive(Parser, Debug)]
#[command(name = "pdf2clauses")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the standards PDF
    pdf: PathBuf,

    /// Directory where outputs will be written
    #[arg(long = "output-dir", default_value = "output")]
    output_dir: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let (records, rows) = extract_clause_data_from_file(&args.pdf, None)?;

    std::fs::create_dir_all(&args.output_dir)?;

    let json_path = args.output_dir.join("clauses.json");
    let json_file = BufWriter::new(File::create(&json_path)?);
    serde_json::to_writer_pretty(json_file, &records)?;

    let xlsx_path = args.output_dir.join("clauses.xlsx");
    let xlsx_file = BufWriter::new(File::create(&xlsx_path)?);
    write_workbook(&rows, xlsx_file)?;

    println!("Wrote JSON: {}", json_path.display());
    println!("Wrote workbook: {}", xlsx_path.display());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
