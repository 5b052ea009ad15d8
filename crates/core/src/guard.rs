//! Helpers shared by the guarded factories of every value object.
//!
//! Each type validates through one internal function returning `Result`. The
//! strict factory returns that result as-is; the fallible factory passes it
//! through [`accept`].

use crate::error::ValueError;

/// Turn a validation result into an `Option`, logging the rejection.
///
/// The error itself never leaves this function.
pub fn accept<T, E: ValueError>(result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(
                value_type = err.value_type(),
                code = err.code_name(),
                "rejected: {err}"
            );
            None
        }
    }
}

/// Whether a string is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
