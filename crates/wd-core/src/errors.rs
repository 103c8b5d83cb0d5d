//! Error types for workdays-rs.
//!
//! The whole workspace funnels into a single `thiserror`-derived enum.
//! Argument validation goes through the [`ensure!`] macro; unconditional
//! failures through [`fail!`].

use thiserror::Error;

/// The top-level error type used throughout workdays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument violated its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout workdays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate an argument contract.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn non_negative(n: i32) -> wd_core::errors::Result<i32> {
///     ensure!(n >= 0, "count must be non-negative, got {n}");
///     Ok(n)
/// }
/// assert!(non_negative(3).is_ok());
/// assert!(non_negative(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with `Error::Runtime`.
///
/// # Example
/// ```
/// use wd_core::{fail, errors::Error};
/// fn always_err() -> wd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
