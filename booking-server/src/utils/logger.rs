//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `log_level` applies to this service,
//! the shared crate and tower-http.

use std::path::Path;

use tracing_subscriber::EnvFilter;

fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "booking_server={log_level},shared={log_level},tower_http={log_level}"
        ))
    })
}

/// Initialize the global subscriber, writing to a daily rolling file when
/// `log_dir` exists and to stdout otherwise.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(default_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if Path::new(dir).is_dir() {
            let file_appender = tracing_appender::rolling::daily(dir, "booking-server");
            subscriber.with_writer(file_appender).with_ansi(false).init();
            return;
        }

        subscriber.init();
        tracing::warn!("Log directory {dir} does not exist, logging to stdout");
        return;
    }

    subscriber.init();
}
