//! # wd-time
//!
//! Date, weekday, and business-day arithmetic types.
//!
//! The heart of the crate is [`shift`] — closed-form weekday offsets — and
//! [`business`] — the sequential business-day walker driven by an injected
//! predicate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day predicate capability and the sequential walker.
pub mod business;

/// `Date` type.
pub mod date;

/// `DateTime` — a date with a time of day, no timezone attached.
pub mod datetime;

/// Weekday offsets, spans, and calendar anchors.
pub mod shift;

/// UTC offsets and timezone-rule conversion.
pub mod timezone;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business::{
    next_business_day, next_business_day_weekends, previous_business_day,
    previous_business_day_weekends, BusinessDayPredicate, Weekends,
};
pub use date::Date;
pub use datetime::DateTime;
pub use shift::{
    count_weekdays, is_weekday, month_diff, next_weekday, nth_day_of_week, previous_weekday,
};
pub use timezone::{at_zone, from_utc, to_utc, FixedZone, TimeZoneRule, UtcOffset, ZonedDateTime};
pub use weekday::Weekday;
