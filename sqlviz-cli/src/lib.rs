//! Terminal front end for sqlviz
//!
//! - `tui`: full-screen chat client built on Ratatui
//! - `ask`: one-shot request that prints the response as JSON
//! - `logging`: tracing subscriber setup

pub mod ask;
pub mod logging;
pub mod tui;
