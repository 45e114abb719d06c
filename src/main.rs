//! mintos2parqet CLI
//!
//! Converts a Mintos account statement CSV into a Parqet cash CSV for a
//! single holding.
//!
//! # Usage
//!
//! ```bash
//! mintos2parqet --mcsv statement.csv --pcsv cash.csv \
//!     --hurl https://app.parqet.com/p/PORTFOLIO/h/HOLDING
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to see which statement rows were skipped

use clap::Parser;
use mintos2parqet::{ConvertError, HoldingId, Result, StatementConverter};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

/// Convert Mintos account statement CSVs to Parqet cash CSVs
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// Path to the Mintos account statement CSV
    #[clap(short, long)]
    mcsv: PathBuf,

    /// Output path for the Parqet cash CSV
    #[clap(short, long)]
    pcsv: PathBuf,

    /// Link to the holding in Parqet: https://app.parqet.com/p/[PORTFOLIO]/h/[HOLDING]
    #[clap(short = 'u', long)]
    hurl: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if !args.mcsv.is_file() {
        return Err(ConvertError::SourceNotAFile(args.mcsv));
    }
    let holding = HoldingId::from_url(&args.hurl)?;

    let file = File::open(&args.mcsv)?;
    let mut converter = StatementConverter::new(holding);
    converter.process_csv(BufReader::new(file))?;

    // Created only after the statement was read in full, so a data error
    // never leaves a truncated output file behind
    let output = File::create(&args.pcsv)?;
    converter.write_output(output)?;

    Ok(())
}
