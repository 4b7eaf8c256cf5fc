//! Logging setup.

use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup console logging with an optional file copy.
pub fn setup_logging(level: &str, json: bool, file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_writer = file.map(|path| {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let name = path.file_name().map(|n| n.to_owned()).unwrap_or_default();
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("could not create log directory {}: {e}", dir.display());
        }
        tracing_appender::rolling::never(dir, name)
    });

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .init();
    }
}
