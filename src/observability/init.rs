//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an `EnvFilter` and a log file in
//! the user data directory. The terminal is owned by the UI, so nothing is
//! ever logged to stdout or stderr while the session runs.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// # Trace Level Resolution
///
/// 1. `NOTEPICK_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Log lines are appended to `<data dir>/notepick/notepick.log` (e.g.
/// `~/.local/share/notepick/notepick.log` on Linux).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if the directory or subscriber cannot be set up
///   (observability is optional)
/// - Idempotent: only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = std::env::var("NOTEPICK_LOG")
        .ok()
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string());

    let Some(data_dir) = dirs::data_local_dir().map(|d| d.join("notepick")) else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Silently fail if we can't create the directory
        return;
    }

    let appender = tracing_appender::rolling::never(&data_dir, "notepick.log");

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false),
        );

    let _ = subscriber.try_init();
}
