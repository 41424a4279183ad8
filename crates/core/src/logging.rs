//! Tracing setup shared by every symscope entry point.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::symscope_home;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `~/.symscope/logs`
pub fn log_dir() -> PathBuf {
    symscope_home().join("logs")
}

/// Installs the global subscriber: a daily file `<component>.log.<date>`
/// under [`log_dir`], plus a colored stderr mirror when `to_stderr` is set.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
/// A second call leaves the first subscriber in place.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .with(stderr_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_live_under_symscope_home() {
        assert_eq!(log_dir(), symscope_home().join("logs"));
        assert!(log_dir().ends_with(".symscope/logs"));
    }
}
