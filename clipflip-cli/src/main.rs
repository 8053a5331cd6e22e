// clipflip-cli/src/main.rs
//
// Entry point for the clipflip CLI. Parses arguments, sets up logging, and
// dispatches to the requested command, mapping failures to a nonzero exit.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run_convert(args),
    };

    if let Err(e) = result {
        // {:#} includes the anyhow context chain on one line
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
