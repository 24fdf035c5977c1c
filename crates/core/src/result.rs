//! Result type definition and extension trait.
//!
//! Provides combinators for Result types, so callers can recover from
//! sorter errors without unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for exercise operations.
///
/// # Examples
///
/// ```
/// use exercises_core::{Error, Result, ResultExt};
///
/// fn first(values: &[i32]) -> Result<i32> {
///     values.first().copied().ok_or(Error::empty_list(0))
/// }
///
/// assert_eq!(first(&[4, 5]).or_default_logged(0), 4);
/// assert_eq!(first(&[]).or_default_logged(0), 0);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the error without consuming the Result.
    #[must_use]
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(error = %e, "Operation failed");
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "Operation failed, using default");
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
