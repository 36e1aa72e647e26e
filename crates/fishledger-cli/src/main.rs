//! Fishledger - fish-market transaction calculator
//!
//! A CLI tool that prices weighed lots under the market's deduction
//! conventions and settles CSV batches of slips.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
