//! Core crate for the `safe_outcome` error-handling library.
//!
//! This crate defines the [`Outcome`] type, a two-variant tagged union
//! representing success-with-value or failure-with-error, together with the
//! [`safe_execute`] and [`safe_execute_async`] wrappers that convert a panic
//! in a caller-supplied computation into the failure variant instead of
//! unwinding into the caller.
//!
//! A failure captured by the wrappers is normalized into [`CapturedPanic`],
//! a structured error carrying the panic message. The raw panic payload is
//! not preserved; see the [`CapturedPanic`] documentation for the policy.

mod error;
mod execute;
mod outcome;
mod result_ext;

pub use error::CapturedPanic;
pub use execute::{safe_execute, safe_execute_async};
pub use outcome::Outcome;
pub use result_ext::{IntoOutcome, IntoResult};
