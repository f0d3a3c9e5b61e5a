//! Test logger: env_logger output plus an in-memory copy of every record.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, OnceLock};

struct CaptureLogger {
    inner: env_logger::Logger,
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
        if self.inner.matches(record) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();

/// Install the capturing logger. Safe to call from every test.
pub(crate) fn init_logger() {
    let logger = LOGGER.get_or_init(|| CaptureLogger {
        inner: env_logger::builder().is_test(true).build(),
        records: Mutex::new(Vec::new()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Messages logged at `level` so far, across all tests in this binary.
pub(crate) fn logged(level: Level) -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.records.lock().ok())
        .map(|records| {
            records
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}
