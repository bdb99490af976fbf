//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Crates whose events are shown at the requested level
const WORKSPACE_TARGETS: &[&str] = &["fragment_server", "shared"];

/// Build the filter directive string used when `RUST_LOG` is not set
pub fn default_filter(log_level: &str) -> String {
    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .collect();
    directives.push(format!("tower_http={log_level}"));
    directives.push("hyper=warn".to_string());
    directives.push("reqwest=warn".to_string());
    directives.join(",")
}

/// Initialize the stdout tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the per-crate filter from
/// [`default_filter`] is applied with `log_level` (default `info`).
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let base_level = log_level.unwrap_or("info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(base_level)));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    // try_init so repeated calls (tests) don't panic
    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for route-aware info logging
#[macro_export]
macro_rules! route_info {
    ($route:expr, $($arg:tt)*) => {
        tracing::info!(
            route = %$route,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for route-aware warning logging
#[macro_export]
macro_rules! route_warn {
    ($route:expr, $($arg:tt)*) => {
        tracing::warn!(
            route = %$route,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for route-aware error logging
#[macro_export]
macro_rules! route_error {
    ($route:expr, $($arg:tt)*) => {
        tracing::error!(
            route = %$route,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for route-aware debug logging
#[macro_export]
macro_rules! route_debug {
    ($route:expr, $($arg:tt)*) => {
        tracing::debug!(
            route = %$route,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        let filter = default_filter("debug");

        assert!(filter.contains("fragment_server=debug"));
        assert!(filter.contains("shared=debug"));
        assert!(filter.contains("tower_http=debug"));
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(Some("warn"));
        init_tracing(None);
    }
}
