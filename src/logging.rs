//! Logging utilities for plot-palette.
//!
//! Structured `tracing` events for the CLI and for library callers that
//! install a subscriber.

use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::PaletteError;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set. Calling this twice is harmless; the
/// second subscriber is ignored.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed with errors"
        );
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    debug!(operation = operation, "Starting operation");

    let result = f();

    debug!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &PaletteError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_kind = error_kind(error),
        "Error occurred"
    );
}

fn error_kind(error: &PaletteError) -> &'static str {
    match error {
        PaletteError::InvalidSource { .. } => "type",
        PaletteError::Unsupported { .. } => "not_implemented",
        PaletteError::IndexOutOfRange { .. } => "index",
        PaletteError::InvalidParameter { .. } => "parameter",
        PaletteError::Config { .. } => "config",
        PaletteError::Io(_) => "io",
        PaletteError::Json(_) => "json",
        PaletteError::Image(_) => "image",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_timed_operation() {
        let result = log_timed_operation("test_operation", || 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_error_kind() {
        let err = PaletteError::IndexOutOfRange { index: 1, len: 1 };
        assert_eq!(error_kind(&err), "index");
        log_error(&err, "lookup");
    }

    #[test]
    fn test_init_twice() {
        init_tracing("debug");
        init_tracing("info");
        log_operation_start("noop", Some("details"));
        log_operation_end("noop", Instant::now(), true);
    }
}
