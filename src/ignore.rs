//! Run a fallible closure and swallow whatever goes wrong
//!
//! Both an `Err` return and a panic count as failure. A swallowed `Err` is
//! logged at `debug`, a swallowed panic at `warn`. The panic hook still runs,
//! so the panic message is printed as usual.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

fn run_caught<T, E, F>(func: F) -> Option<T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(func)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(err)) => {
            debug!(error = %err, "ignoring error");
            None
        }
        Err(payload) => {
            warn!(panic = panic_message(payload.as_ref()), "ignoring panic");
            None
        }
    }
}

/// Runs `action`, returning whether it completed without error or panic.
///
/// # Example
/// ```
/// use codehelpers::ignore::run_ignoring_errors;
///
/// assert!(run_ignoring_errors(|| Ok::<(), String>(())));
/// assert!(!run_ignoring_errors(|| "x".parse::<u8>().map(|_| ())));
/// ```
pub fn run_ignoring_errors<E, F>(action: F) -> bool
where
    E: Display,
    F: FnOnce() -> Result<(), E>,
{
    run_caught(action).is_some()
}

/// Runs `func`, returning its value or `default` if it fails or panics.
pub fn run_ignoring_errors_or<T, E, F>(func: F, default: T) -> T
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    run_caught(func).unwrap_or(default)
}

/// Runs `func`, returning its value or `T::default()` if it fails or panics.
pub fn run_ignoring_errors_or_default<T, E, F>(func: F) -> T
where
    T: Default,
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    run_caught(func).unwrap_or_default()
}
