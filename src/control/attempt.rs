//! Panic capture for `attempt` and `checked_map`.
//!
//! These are the only places where a failure raised by user code crosses
//! into the algebraic world. The panic is caught, logged at debug level and
//! handed back as a [`PanicError`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::error::PanicError;

/// Runs `supplier`, converting a panic into a [`PanicError`].
///
/// `operation` names the caller in the emitted `tracing` event.
pub(crate) fn capture<T, F>(operation: &'static str, supplier: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(supplier)).map_err(|payload| {
        let error = PanicError::new(panic_message(payload.as_ref()));
        tracing::debug!(operation, message = error.message(), "captured panic");
        error
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
