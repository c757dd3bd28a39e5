//! Logging and tracing utilities for Planet Finder
//!
//! This module provides structured logging using the `tracing` crate.
//! Initialization is one-shot and idempotent so library consumers and
//! the CLI can both call it safely.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the default tracing subscriber
///
/// This should be called once at application startup. Multiple calls are
/// safe and will be ignored. `RUST_LOG` overrides the built-in filter.
pub fn init_default() {
    init_with_config(TracingConfig::default());
}

/// Initialize tracing with a custom configuration
pub fn init_with_config(config: TracingConfig) {
    if TRACING_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
        .is_ok()
    {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

        let fmt_layer = fmt::layer()
            .with_target(config.show_target)
            .with_thread_ids(config.show_thread_ids)
            .with_file(config.show_file)
            .with_line_number(config.show_line_number);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .init();
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default log level filter (e.g., "info", "debug", "warn")
    pub default_level: String,
    /// Show the target (module path) in log output
    pub show_target: bool,
    /// Show thread IDs in log output
    pub show_thread_ids: bool,
    /// Show source file in log output
    pub show_file: bool,
    /// Show line number in log output
    pub show_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}
