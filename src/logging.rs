use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging.
pub const LOG_ENV: &str = "CC_SWITCH_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so command output stays clean.
/// Set `CC_SWITCH_LOG` to a file path to append logs there; `RUST_LOG`
/// controls the filter (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to open log file {}: {}",
                log_path.to_string_lossy(),
                e
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
