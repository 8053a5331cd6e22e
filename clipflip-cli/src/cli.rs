// clipflip-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Clipflip: manifest to CSV flip report converter",
    long_about = "Converts attached-media XML manifests into per-clip CSV flip reports via the clipflip-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts manifest files into CSV flip reports
    Convert(ConvertArgs),
    // Add other subcommands here later (e.g., inspect)
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input .xml manifest file or directory containing manifests
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Directory where CSV reports will be saved
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Apply RFC-4180 quoting to report fields containing commas or quotes.
    /// Off by default; the stock report format never quotes.
    #[arg(long, default_value_t = false)]
    pub quote: bool,
}
