//! Safe-execution wrappers converting panics into failure outcomes.
//!
//! [`safe_execute`] covers synchronous callables and [`safe_execute_async`]
//! covers callables returning a future. Both invoke the supplied
//! computation exactly once and turn a panic anywhere inside it into
//! `Outcome::Failure` carrying a [`CapturedPanic`], instead of letting the
//! unwind reach the caller. Neither wrapper applies a timeout or offers
//! cancellation; a caller wanting either composes it around the returned
//! future.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;

use crate::{CapturedPanic, Outcome};

/// Normalize a caught payload and record the conversion.
fn capture(payload: Box<dyn Any + Send>) -> CapturedPanic {
    let err = CapturedPanic::new(payload);
    tracing::debug!(panic_message = err.message(), "converted panic into failure outcome");
    err
}

/// Run a synchronous callable, converting a panic into a failure outcome.
///
/// The callable is invoked exactly once. A normal return becomes
/// `Outcome::Success` and a panic becomes `Outcome::Failure`, both
/// synchronously; no async machinery is involved.
///
/// # Examples
///
/// ```
/// use safe_outcome::{Outcome, safe_execute};
///
/// assert_eq!(safe_execute(|| 42), Outcome::success(42));
///
/// let failed = safe_execute(|| -> u32 { panic!("boom") });
/// assert_eq!(
///     failed.as_failure().map(|e| e.message()),
///     Some("boom"),
/// );
/// ```
pub fn safe_execute<T, F>(f: F) -> Outcome<T, CapturedPanic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::success(value),
        Err(payload) => Outcome::failure(capture(payload)),
    }
}

/// Run a future-returning callable, converting a panic into a failure
/// outcome.
///
/// Returns a pending future immediately; the caller's thread of control is
/// never blocked here. A panic while the callable builds its future is
/// captured before the first suspension point, and a panic during any poll
/// of the returned future is captured at the single await inside the
/// wrapper. Either way the wrapper's future settles with a failure outcome
/// rather than propagating the unwind.
///
/// # Examples
///
/// ```
/// use safe_outcome::{Outcome, safe_execute_async};
///
/// let outcome = futures_executor::block_on(safe_execute_async(|| async { "ok" }));
/// assert_eq!(outcome, Outcome::success("ok"));
/// ```
pub async fn safe_execute_async<T, F, Fut>(f: F) -> Outcome<T, CapturedPanic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let fut = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(fut) => fut,
        Err(payload) => return Outcome::failure(capture(payload)),
    };
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Outcome::success(value),
        Err(payload) => Outcome::failure(capture(payload)),
    }
}

#[cfg(test)]
mod tests {
    use std::panic::panic_any;

    use futures_executor::block_on;

    use crate::{Outcome, safe_execute, safe_execute_async};

    #[test]
    fn sync_return_becomes_success() {
        assert_eq!(safe_execute(|| 42), Outcome::success(42));
    }

    #[test]
    fn sync_panic_becomes_failure() {
        let outcome = safe_execute(|| -> u32 { panic!("boom") });
        let Some(err) = outcome.as_failure() else {
            panic!("expected failure variant");
        };
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn sync_formatted_panic_keeps_message() {
        let code = 7;
        let outcome = safe_execute::<(), _>(|| panic!("exit code {code}"));
        assert_eq!(
            outcome.as_failure().map(super::CapturedPanic::message),
            Some("exit code 7"),
        );
    }

    #[test]
    fn sync_non_string_payload_is_normalized() {
        let outcome = safe_execute::<(), _>(|| panic_any(42u8));
        assert_eq!(
            outcome.as_failure().map(super::CapturedPanic::message),
            Some("panic payload of unknown type"),
        );
    }

    #[test]
    fn callable_runs_exactly_once() {
        let mut calls = 0;
        let outcome = safe_execute(|| {
            calls += 1;
            calls
        });
        assert_eq!(outcome, Outcome::success(1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn async_fulfilment_becomes_success() {
        let outcome = block_on(safe_execute_async(|| async { "ok" }));
        assert_eq!(outcome, Outcome::success("ok"));
    }

    #[test]
    fn async_panic_during_poll_becomes_failure() {
        let outcome = block_on(safe_execute_async::<(), _, _>(|| async {
            panic!("async string fail")
        }));
        assert_eq!(
            outcome.as_failure().map(super::CapturedPanic::message),
            Some("async string fail"),
        );
    }

    #[test]
    fn panic_while_building_future_becomes_failure() {
        let outcome = block_on(safe_execute_async(|| -> std::future::Ready<u8> {
            panic!("constructor boom")
        }));
        assert_eq!(
            outcome.as_failure().map(super::CapturedPanic::message),
            Some("constructor boom"),
        );
    }

    #[test]
    fn async_wrapper_awaits_a_real_suspension_point() {
        let outcome = block_on(safe_execute_async(|| async {
            futures::future::ready(21).await * 2
        }));
        assert_eq!(outcome, Outcome::success(42));
    }
}
