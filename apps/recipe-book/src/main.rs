//! # Recipe Book Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Recipe Book                                      │
//! │                                                                         │
//! │  main.rs ────► parse CLI, init logging, run, map result to exit code   │
//! │  lib.rs ─────► config, transport, command execution                    │
//! │                                                                         │
//! │  Exit codes: 0 ok • 1 request failed or view ended in Error            │
//! │              2 usage (validation, not logged in, bad config)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use recipe_book::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    recipe_book::init_tracing(cli.verbose);

    match recipe_book::run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.code.exit_code())
        }
    }
}
