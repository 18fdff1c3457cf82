//! Terminal front end for the tictactoe engine.
//!
//! The front end owns one [`tictactoe::Game`] at a time inside [`App`],
//! forwards key presses to the engine and draws whatever comes back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
pub mod replay;
mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Palette, TuiConfig};
pub use input::{Action, move_cursor};
pub use logging::{init_tracing, open_log_file};
pub use tui::run_tui;
