//! Stockpile CLI Binary

use clap::Parser;
use stockpile::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context (loads config, brings up logging, opens the store)
    let mut context =
        match CliContext::new(cli.data_file.clone(), cli.config.clone(), &cli.logging_overrides()) {
            Ok(ctx) => ctx,
            Err(e) => {
                eprintln!("Error initializing inventory: {}", e);
                process::exit(1);
            }
        };

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
