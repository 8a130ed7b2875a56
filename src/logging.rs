//! Structured logging for mock activity.
//!
//! This module provides helper functions for consistent, structured logging
//! across the crate using the `tracing` crate. The core emits trace-level
//! events on every recorded call and debug/warn events around stub
//! resolution; install a subscriber in the test harness to see them.

/// Log one recorded invocation.
pub(crate) fn log_call_recorded(operation: &str, sequence: usize) {
    tracing::trace!(operation, sequence, "Call recorded");
}

/// Log a provider registration, noting replacement of a prior provider.
pub(crate) fn log_provider_registered(operation: &str, replaced: bool) {
    if replaced {
        tracing::debug!(operation, "Result provider replaced");
    } else {
        tracing::debug!(operation, "Result provider registered");
    }
}

/// Log a required-result resolution that found no provider.
pub(crate) fn log_missing_stub(operation: &str) {
    tracing::warn!(operation, "No result registered for required operation");
}

/// Log an optional-result resolution that found no provider.
pub(crate) fn log_unstubbed_optional(operation: &str) {
    tracing::debug!(operation, "No result registered; resolving to None");
}

/// Log a fallback resolution that found no provider.
pub(crate) fn log_fallback_used(operation: &str) {
    tracing::debug!(operation, "No result registered; using caller fallback");
}

/// Log an invocation-history reset, for one operation or the whole instance.
pub(crate) fn log_history_reset(operation: Option<&str>) {
    match operation {
        Some(operation) => tracing::debug!(operation, "Invocation history reset"),
        None => tracing::debug!("All invocation histories reset"),
    }
}
