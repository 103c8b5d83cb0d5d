//! # workdays
//!
//! Weekday and business-day date arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workdays = "0.1"
//! ```
//!
//! ```rust
//! use workdays::time::{next_weekday, Date};
//!
//! let fri = Date::from_ymd(2023, 6, 2).unwrap();
//! let mon = next_weekday(fri, 1).unwrap();
//! assert_eq!(mon, Date::from_ymd(2023, 6, 5).unwrap());
//! ```
//!
//! Holiday-aware traversal injects an async predicate:
//!
//! ```rust
//! use workdays::time::{next_business_day, Date};
//!
//! # async fn demo() -> workdays::core::Result<()> {
//! let no_fourth_of_july = |d: Date| {
//!     d.weekday().is_weekday() && (d.month(), d.day_of_month()) != (7, 4)
//! };
//! let d = Date::from_ymd(2023, 7, 3).unwrap(); // Monday
//! let next = next_business_day(d, 1, &no_fourth_of_july).await?;
//! assert_eq!(next, Date::from_ymd(2023, 7, 5).unwrap());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, macros, and the clock capability.
pub use wd_core as core;

/// Date, weekday, and business-day arithmetic types.
pub use wd_time as time;
