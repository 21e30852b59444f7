// src/logger.rs

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs a colored stderr logger for the CLI.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "error".red().bold(),
                Level::Warn => "warn".yellow(),
                Level::Info => "info".cyan(),
                Level::Debug | Level::Trace => "debug".dimmed(),
            };
            eprintln!("{level}: {}", record.args());
        }
    }

    fn flush(&self) {}
}
