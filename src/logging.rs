use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming a log file. When unset, logs go to stderr.
pub const LOG_PATH_ENV: &str = "SCENE_NAV_LOG";

/// Initialize tracing.
///
/// `RUST_LOG` overrides the configured filter. When `SCENE_NAV_LOG` is set
/// the log is written to `{path}.{timestamp}.{pid}` so concurrent runs don't
/// share a file; if that file can't be created, logging falls back to stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    let file = std::env::var(LOG_PATH_ENV).ok().and_then(|log_path| {
        let pid = std::process::id();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);
        match std::fs::File::create(&unique_path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
                None
            }
        }
    });

    match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            )
            .init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .init(),
    }
}
