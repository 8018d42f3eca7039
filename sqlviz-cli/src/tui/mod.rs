//! Ratatui client
//!
//! - state.rs: screen state wrapped around the core session
//! - input.rs: key handling and command parsing
//! - markdown.rs: chat tokens to styled terminal lines
//! - ui.rs: rendering
//! - runner.rs: event loop and background requests

mod input;
mod markdown;
mod runner;
mod state;
mod terminal;
mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use markdown::message_lines;
pub use runner::{CommandOutcome, apply_command, run_tui};
pub use state::App;
pub use terminal::{Tui, init_terminal, restore_terminal};
