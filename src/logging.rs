#![cfg(feature = "std")]

use std::env;
use std::sync::Once;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level, `error` through `trace`.
pub const LOG_ENV: &str = "FLOTILLA_LOG";

static INIT: Once = Once::new();
static LOGGER: StderrLogger = StderrLogger;

/// Writes `LEVEL module: message` lines to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("flotilla::").unwrap_or(target);
        eprintln!("{:<5} {}: {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

/// Level named by `value`, falling back to `info`.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level taken from [`LOG_ENV`].
/// Later calls do nothing.
pub fn init_logging() {
    INIT.call_once(|| {
        let level = parse_level(env::var(LOG_ENV).ok().as_deref());
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    });
}
