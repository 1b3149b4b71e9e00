//! Utility modules.

/// Log helpers that keep request/response logging short.
pub mod log_sanitizer;
