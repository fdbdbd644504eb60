use std::path::PathBuf;

use clap::Parser;
use list_compare::input::read_input;
use list_compare::{distance, similarity};

/// Compares two columns of integers by total distance and similarity score.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The file containing the input
    #[arg(long, default_value = "./input")]
    input_file: PathBuf,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut columns = read_input(&args.input_file)?;
    columns.sort();

    println!(
        "Sum of distance between left and right list is: {}",
        distance::process(&columns)
    );
    println!(
        "Similarity score between left and right list is: {}",
        similarity::process(&columns)
    );
    Ok(())
}
