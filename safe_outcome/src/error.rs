//! Error type produced when a wrapped computation panics.
//!
//! The panic payload arrives as a `Box<dyn Any + Send>`. This crate
//! normalizes it into [`CapturedPanic`], a structured error carrying the
//! human-readable message, rather than preserving the raw payload. String
//! payloads (the overwhelmingly common case, produced by `panic!` with a
//! literal or a formatted message) keep their text; anything else collapses
//! to a fixed placeholder because an arbitrary `Any` payload cannot be
//! displayed, cloned, or compared. Keeping the normalized form makes
//! `Outcome<T, CapturedPanic>` comparable in tests and usable as an error
//! source through `std::error::Error`.

use std::any::Any;

use thiserror::Error;

const UNKNOWN_PAYLOAD: &str = "panic payload of unknown type";

/// A panic caught at the safe-execution boundary, normalized to its message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("panic captured: {message}")]
pub struct CapturedPanic {
    /// Message extracted from the panic payload.
    message: String,
}

impl CapturedPanic {
    /// Normalize a raw panic payload into a `CapturedPanic`.
    ///
    /// `&str` and `String` payloads keep their text; any other payload type
    /// is replaced by a placeholder message.
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(owned) => *owned,
            Err(other) => match other.downcast::<&'static str>() {
                Ok(text) => (*text).to_owned(),
                Err(_) => UNKNOWN_PAYLOAD.to_owned(),
            },
        };
        Self { message }
    }

    /// Build a `CapturedPanic` directly from a message.
    ///
    /// Useful in tests and when bridging failures that were captured by
    /// other means.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message extracted from the panic payload.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::{CapturedPanic, UNKNOWN_PAYLOAD};

    #[test]
    fn extracts_static_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        let err = CapturedPanic::new(payload);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn extracts_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted boom"));
        let err = CapturedPanic::new(payload);
        assert_eq!(err.message(), "formatted boom");
    }

    #[test]
    fn collapses_non_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        let err = CapturedPanic::new(payload);
        assert_eq!(err.message(), UNKNOWN_PAYLOAD);
    }

    #[test]
    fn display_includes_message() {
        let err = CapturedPanic::from_message("lost the plot");
        assert_eq!(err.to_string(), "panic captured: lost the plot");
    }

    #[test]
    fn usable_as_error_source() {
        let err = CapturedPanic::from_message("inner");
        let wrapped = anyhow::Error::new(err);
        assert!(wrapped.to_string().contains("inner"));
    }
}
