//! Conversions between [`Outcome`] and the standard `Result`.
//!
//! Rust callers mostly hold a `Result<T, E>` already; these extensions
//! bridge the two shapes without repetitive matching at every call site.
//!
//! - Use [`IntoOutcome::into_outcome`] to lift a `Result` into an
//!   [`Outcome`].
//! - Use [`IntoResult::into_result`] to hand an [`Outcome`] to `?`-based
//!   code.
//!
//! These are conversions only; no combinator algebra (`map`, `and_then`)
//! is provided on `Outcome` itself.
//!
//! # Examples
//!
//! ```
//! use safe_outcome::{IntoOutcome, Outcome};
//!
//! let parsed: Outcome<u32, std::num::ParseIntError> =
//!     "42".parse::<u32>().into_outcome();
//! assert!(parsed.is_success());
//! ```

use crate::Outcome;

/// Extension lifting a `Result<T, E>` into an [`Outcome<T, E>`].
pub trait IntoOutcome<T, E> {
    /// Convert `Ok` into the success variant and `Err` into the failure
    /// variant, payloads verbatim.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

/// Extension lowering an [`Outcome<T, E>`] into a `Result<T, E>`.
pub trait IntoResult<T, E> {
    /// Convert the success variant into `Ok` and the failure variant into
    /// `Err`, payloads verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Err` carrying the failure payload when the outcome is the
    /// failure variant.
    fn into_result(self) -> Result<T, E>;
}

impl<T, E> IntoResult<T, E> for Outcome<T, E> {
    fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success { value } => Ok(value),
            Outcome::Failure { error } => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_outcome()
    }
}
