use std::io::{self, Write};

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;
static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Installs the stderr logger: `Info` and up, or `Debug` and up if `verbose`.
pub fn init_logger(verbose: bool) {
    log::set_logger(&LOGGER)
        .map(|()| {
            log::set_max_level(if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            })
        })
        .expect("Failed to initialize the logger");
}
