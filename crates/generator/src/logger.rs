// Minimal `log` backend: one line per record on stderr.
// The level comes from the command line unless MONSTER_ART_LOG overrides it.

use std::io::Write;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable that overrides the command-line log level.
pub const LOG_ENV: &str = "MONSTER_ART_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:>5}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger. Safe to call more than once; only the first
/// call installs the backend, later calls just adjust the level.
pub fn init(cli_level: LevelFilter) {
    let level = resolve_level(cli_level, std::env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn resolve_level(cli_level: LevelFilter, env: Option<&str>) -> LevelFilter {
    env.and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(cli_level)
}
