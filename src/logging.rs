//! Tracing setup for the CLI.
//!
//! One-shot subcommands log human-readable lines to stderr only; the
//! long-running `messages watch` additionally writes JSON lines to a
//! daily-rotated file under the configured logs directory. `RUST_LOG`
//! controls the filter, defaulting to `info`.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer alive for the life of the process;
/// dropping it flushes pending entries and closes the log file.
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Console-only logging for one-shot subcommands.
pub fn init_console() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Console plus daily-rotated JSON file logging for long-running commands.
///
/// Writes to `{logs_dir}/anteroom.log.YYYY-MM-DD`. The returned guard must
/// be kept alive until exit.
///
/// # Errors
///
/// Fails when the logs directory cannot be created.
pub fn init_with_file(logs_dir: &Path) -> anyhow::Result<LogGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create logs directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, "anteroom.log");
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer().json().with_writer(writer);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(LogGuard { _worker: worker })
}

/// Filter from `RUST_LOG`, defaulting to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
