//! Tracing setup.
//!
//! The view owns the terminal, so logs always go to a file. If the file
//! cannot be opened they are discarded rather than written over the screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::AppConfig;

const DEFAULT_FILTER: &str = "ascii_weather=info";

/// Appends to `path`, or swallows everything when it cannot be opened
pub fn log_writer(path: &Path) -> BoxMakeWriter {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("cannot open log file {}: {}", path.display(), e);
            BoxMakeWriter::new(std::io::sink)
        }
    }
}

pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer(&config.log_file)),
        )
        .init();
}
