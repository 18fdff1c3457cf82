//! Tic-tac-toe terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig, init_tracing, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The log file location lives in the config, so tracing starts after it.
    let config = TuiConfig::load_or_default(&cli.config)?;
    init_tracing(&config)?;
    info!(
        path = %cli.config.display(),
        found = cli.config.exists(),
        log_filter = %config.log_filter(),
        "Configuration loaded"
    );

    match cli.selected_command() {
        Command::Play => {
            let palette = config.palette()?;
            run_tui(palette)
        }
        Command::Replay { cells, json } => {
            info!(moves = cells.len(), "Replaying moves");
            println!("{}", replay::run(&cells, json)?);
            Ok(())
        }
    }
}
