//! The two-variant outcome type and its total operations.
//!
//! [`Outcome`] is a tagged union with exactly two variants: success carrying
//! a value, or failure carrying an error payload. The enum discriminant is
//! the sole means of telling the variants apart, so a success whose value is
//! `()` or `None` can never be mistaken for a failure. Values are built
//! once, never mutated in place, and carry no resources.
//!
//! Every operation in this module is total: none can fail or panic for any
//! input of the declared types.

/// Explicit result of a computation: success-with-value or
/// failure-with-error.
///
/// The error parameter `E` is unconstrained, so strings, plain records, and
/// numbers are all legal failure payloads. Nothing here forces errors into a
/// canonical shape; that is the job of whichever boundary produced the
/// outcome (see [`crate::safe_execute`]).
///
/// # Examples
///
/// ```
/// use safe_outcome::Outcome;
///
/// let parsed: Outcome<u32, String> = Outcome::success(7);
/// assert!(parsed.is_success());
/// assert_eq!(parsed.unwrap_or(0), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an Outcome carries a possible failure that should be inspected"]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success {
        /// The value produced, stored verbatim.
        value: T,
    },
    /// The computation failed.
    Failure {
        /// The error payload, stored verbatim.
        error: E,
    },
}

impl<T, E> Outcome<T, E> {
    /// Wrap a value in the success variant.
    ///
    /// The value is stored verbatim: `()`, `None`, and even another
    /// `Outcome` are accepted without flattening.
    ///
    /// # Examples
    ///
    /// ```
    /// use safe_outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<u8, ()>, ()> =
    ///     Outcome::success(Outcome::success(1));
    /// assert!(nested.is_success());
    /// ```
    pub const fn success(value: T) -> Self {
        Self::Success { value }
    }

    /// Wrap an error payload in the failure variant.
    ///
    /// Constructing a failure is not itself a fallible operation; any
    /// payload is accepted verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use safe_outcome::Outcome;
    ///
    /// let denied: Outcome<(), &str> = Outcome::failure("no such user");
    /// assert!(denied.is_failure());
    /// ```
    pub const fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    /// Whether this outcome is the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether this outcome is the failure variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Borrow the success value, or `None` for a failure.
    ///
    /// This is the checked accessor: payload access always goes through an
    /// `Option`, so reading the wrong variant cannot yield garbage.
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Borrow the error payload, or `None` for a success.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Return the success value, or `default` for a failure.
    ///
    /// Never panics, whichever variant is present. The failure payload is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use safe_outcome::Outcome;
    ///
    /// let missing: Outcome<u32, &str> = Outcome::failure("not found");
    /// assert_eq!(missing.unwrap_or(404), 404);
    /// ```
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success { value } => value,
            Self::Failure { .. } => default,
        }
    }

    /// Return the success value, or compute a fallback from the error.
    ///
    /// Lazy companion to [`Outcome::unwrap_or`]; the closure runs only for
    /// a failure and receives the payload by value.
    #[must_use]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success { value } => value,
            Self::Failure { error } => default(error),
        }
    }
}
