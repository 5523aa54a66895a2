//! Shared logging utilities for consistent tracing across screens
//!
//! The terminal UI owns stdout, so all trace output goes to stderr.

use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::{error, info};

/// Default level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter directive for the given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("restaurant={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::new(filter_directive(log_level));

    let result = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    // Only one global subscriber per process; later calls keep the first
    if let Err(error) = result {
        tracing::debug!(error = %error, "Tracing subscriber already installed");
    }
}

/// Initialize tracing subscriber at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for screen-aware info logging
#[macro_export]
macro_rules! screen_info {
    ($screen:expr, $($arg:tt)*) => {
        tracing::info!(
            screen = %$screen,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for screen-aware warning logging
#[macro_export]
macro_rules! screen_warn {
    ($screen:expr, $($arg:tt)*) => {
        tracing::warn!(
            screen = %$screen,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for screen-aware error logging
#[macro_export]
macro_rules! screen_error {
    ($screen:expr, $($arg:tt)*) => {
        tracing::error!(
            screen = %$screen,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for screen-aware debug logging
#[macro_export]
macro_rules! screen_debug {
    ($screen:expr, $($arg:tt)*) => {
        tracing::debug!(
            screen = %$screen,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &dyn Display, details: &str) {
    info!(
        screen = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &dyn Display, reason: &str) {
    info!(
        screen = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &dyn Display, context: &str, error: &dyn Display) {
    error!(
        screen = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &dyn Display, message: &str) {
    info!(
        screen = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
