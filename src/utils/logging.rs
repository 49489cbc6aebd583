use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "webhook-relay.log";

/// Installs the global subscriber: stdout always, plus an optional daily
/// rolling file under `logs/`.
///
/// `log_level` is an `EnvFilter` directive such as `info` or
/// `webhook_relay=debug,reqwest=warn`. An unparsable directive falls back to `info`.
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        EnvFilter::new("info")
    });

    let file_layer = with_file.then(|| {
        fmt::layer()
            .with_ansi(false)
            .with_line_number(true)
            .with_writer(RollingFileAppender::new(
                Rotation::DAILY,
                LOG_DIR,
                LOG_FILE_PREFIX,
            ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();
}
