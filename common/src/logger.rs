use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// Events always go to a daily rolling file under `log_dir`; `log_to_stdout`
/// additionally mirrors them to stdout with colours. `log_level` is an
/// `EnvFilter` directive such as `checker=debug`, falling back to `info` when it
/// cannot be parsed.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process.
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> WorkerGuard {
    fs::create_dir_all(Path::new(log_dir)).ok();

    let file_appender = rolling::daily(log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true);
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
