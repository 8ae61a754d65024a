//! Structured logging for the Mars globe viewer.
//!
//! Installs a `tracing` subscriber with an uptime-stamped console layer and,
//! in debug builds, a JSON file layer for post-mortem analysis. The filter
//! comes from `RUST_LOG` when set, otherwise from the config's
//! `debug.log_level`.

use mars_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config say otherwise.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "mars-globe.log";

/// Resolve the filter directive string from an optional config.
///
/// A bare level such as `"debug"` keeps `winit` at `warn` so that event-loop
/// chatter does not drown the viewer's own output.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config.map(|c| c.debug.log_level.trim()) {
        Some(level) if !level.is_empty() && !level.contains('=') => {
            format!("{level},winit=warn")
        }
        Some(level) if !level.is_empty() => level.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - whether file logging is enabled
/// * `config` - optional configuration providing the log level
///
/// ```no_run
/// use mars_config::Config;
/// use mars_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(dir = %log_dir.display(), "JSON file logging enabled");
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
