//! taxdict - writes a dictionary containing all taxonomy entries of a
//! specific rank, optionally restricted to a subtree.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use taxdict_core::{write_dict, Rank};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "taxdict",
    version,
    about = "Writes a dictionary containing all taxonomy entries of a specific rank"
)]
struct Args {
    /// Rank of the entry, e.g. 'species' or 'genus'
    #[arg(short, long, default_value_t = Rank::Species)]
    rank: Rank,

    /// Path to taxonomy.dat
    #[arg(short, long, default_value = "./taxonomy.dat")]
    input: PathBuf,

    /// Write into this file
    #[arg(short, long, default_value = "./taxonomy.tsv")]
    output: PathBuf,

    /// Limit the selection to the subtree with this root, e.g. '2' for Bacteria
    #[arg(long)]
    root: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("ERROR: Input file {} does not exist.", args.input.display());
        process::exit(1);
    }
    if !args.input.is_file() {
        eprintln!(
            "ERROR: Input argument {} is not a file.",
            args.input.display()
        );
        process::exit(1);
    }
    if args.output.exists() {
        eprintln!(
            "ERROR: Output file {} already exists.",
            args.output.display()
        );
        process::exit(1);
    }

    match write_dict(&args.input, &args.output, args.rank, args.root.as_deref()) {
        Ok(1) => println!("Wrote 1 entry"),
        Ok(lines) => println!("Wrote {} entries", lines),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
