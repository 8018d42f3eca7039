//! Tracing setup
//!
//! The TUI owns the terminal, so interactive runs log to a file. One-shot
//! runs log to stderr and leave stdout to the JSON output.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

pub fn init_tracing(target: LogTarget<'_>) -> io::Result<()> {
    let writer = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Some(OpenOptions::new().create(true).append(true).open(path)?)
        }
        LogTarget::Stderr => None,
    };

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = fmt().with_env_filter(filter).with_target(false).with_level(true);
        match writer {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(io::stderr).init(),
        }
    });
    Ok(())
}
