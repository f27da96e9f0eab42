// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RevShare - booking, reminder, and lead-magnet service.
//!
//! This is the binary entry point for the RevShare daemon.

use clap::{Parser, Subcommand};

mod remind;
mod serve;

/// RevShare - booking, reminder, and lead-magnet service.
#[derive(Parser, Debug)]
#[command(name = "revshare", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the booking service HTTP server.
    Serve,
    /// Run one reminder pass and print the summary as JSON.
    Remind,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match revshare_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            revshare_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Serve => serve::run_serve(config).await,
        Commands::Remind => remind::run_remind(config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
