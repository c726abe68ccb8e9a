use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directive enabling the per-request spans of the HTTP trace layer
const TRACE_LAYER_DIRECTIVE: &str = "tower_http=debug";

/// Adds the trace layer directive unless `log_level` already mentions `tower_http`
fn filter_directive(log_level: &str) -> String {
    if log_level.contains("tower_http") {
        log_level.to_string()
    } else {
        format!("{},{}", log_level, TRACE_LAYER_DIRECTIVE)
    }
}

/// Installs the global subscriber: stdout always, plus `logs/roster.log`
/// rotated daily when `with_file` is set.
///
/// An unparsable `log_level` falls back to `info`.
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = EnvFilter::try_new(filter_directive(log_level)).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        EnvFilter::new(filter_directive("info"))
    });

    let file_layer = with_file.then(|| {
        fmt::layer()
            .with_ansi(false)
            .with_line_number(true)
            .with_writer(RollingFileAppender::new(Rotation::DAILY, "logs", "roster.log"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(file_layer)
        .init();
}
