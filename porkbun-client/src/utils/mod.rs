//! Utility modules.

/// Registrar timestamp parsing and formatting.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Decoders for inconsistently typed wire fields.
pub mod wire;
