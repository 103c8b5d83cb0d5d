//! Weekday offsets, spans, and calendar anchors.
//!
//! The offset functions are closed-form: a shift of `n` weekdays decomposes
//! into `n / 5` full weeks (7 calendar days each, zero day-of-week drift)
//! plus an `n % 5` remainder, with a 2-day hop when the remainder crosses a
//! weekend. No candidate-day iteration anywhere.
//!
//! Dates landing on a weekend are first normalized to the nearest weekday
//! against the direction of travel, so the modular arithmetic always starts
//! from a Monday–Friday position.

use crate::date::Date;
use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::Result;

/// Return `true` if `date` falls on Monday–Friday.
pub fn is_weekday(date: Date) -> bool {
    date.weekday().is_weekday()
}

/// Return the `n`-th weekday on or after `date`.
///
/// `next_weekday(d, 0)` normalizes: a Saturday or Sunday input yields the
/// following Monday, a weekday input yields `d` itself. For `n > 0` the
/// shift counts weekdays only; the result is never a Saturday or Sunday.
///
/// # Errors
/// `InvalidArgument` if `n < 0`; a date error if the result leaves the
/// supported range.
pub fn next_weekday(date: Date, n: i32) -> Result<Date> {
    ensure!(n >= 0, "count must be non-negative, got {n}");
    if n == 0 {
        return match date.weekday() {
            Weekday::Saturday => date.add_days(2),
            Weekday::Sunday => date.add_days(1),
            _ => Ok(date),
        };
    }
    // Weekend inputs anchor on the preceding Friday.
    let start = match date.weekday() {
        Weekday::Saturday => date.add_days(-1)?,
        Weekday::Sunday => date.add_days(-2)?,
        _ => date,
    };
    let remainder = n % 5;
    let mut span = 7 * (n / 5) + remainder;
    if start.weekday().ordinal() as i32 + remainder > 5 {
        // The remainder crosses Friday; hop the weekend.
        span += 2;
    }
    start.add_days(span)
}

/// Return the `n`-th weekday on or before `date`.
///
/// Mirror image of [`next_weekday`]: `previous_weekday(d, 0)` normalizes a
/// weekend input to the preceding Friday, and for `n > 0` the shift counts
/// weekdays backward.
///
/// # Errors
/// `InvalidArgument` if `n < 0`; a date error if the result leaves the
/// supported range.
pub fn previous_weekday(date: Date, n: i32) -> Result<Date> {
    ensure!(n >= 0, "count must be non-negative, got {n}");
    if n == 0 {
        return match date.weekday() {
            Weekday::Saturday => date.add_days(-1),
            Weekday::Sunday => date.add_days(-2),
            _ => Ok(date),
        };
    }
    // Weekend inputs anchor on the following Monday.
    let start = match date.weekday() {
        Weekday::Saturday => date.add_days(2)?,
        Weekday::Sunday => date.add_days(1)?,
        _ => date,
    };
    let remainder = n % 5;
    let mut span = 7 * (n / 5) + remainder;
    if start.weekday().ordinal() as i32 - remainder < 1 {
        span += 2;
    }
    start.add_days(-span)
}

/// Count the weekdays in the inclusive range spanned by `d1` and `d2`.
///
/// Order-independent: the operands are swapped if needed. Complete 7-day
/// weeks contribute exactly 5 each; only the 0–6 day remainder is tested
/// individually.
pub fn count_weekdays(d1: Date, d2: Date) -> i32 {
    let (start, end) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
    let total = end - start + 1;
    let weeks = total / 7;
    let mut count = weeks * 5;
    for offset in weeks * 7..total {
        if (start + offset).weekday().is_weekday() {
            count += 1;
        }
    }
    count
}

/// Return the `n`-th occurrence of `target` on or after `date`.
///
/// `n = 1` is the next (or same) such day-of-week, `n = 2` one week later,
/// and so on.
///
/// # Errors
/// `InvalidArgument` if `n < 1`; a date error if the result leaves the
/// supported range.
pub fn nth_day_of_week(date: Date, n: i32, target: Weekday) -> Result<Date> {
    ensure!(n >= 1, "occurrence index must be >= 1, got {n}");
    let skip = date.weekday().days_until(target) as i32;
    date.add_days(skip + 7 * (n - 1))
}

/// Return the number of month boundaries between `d1` and `d2`:
/// `(year2 - year1) * 12 + (month2 - month1)`.
///
/// Ignores the day of the month entirely; negative when `d2` is in an
/// earlier month than `d1`.
pub fn month_diff(d1: Date, d2: Date) -> i32 {
    (d2.year() as i32 - d1.year() as i32) * 12 + (d2.month() as i32 - d1.month() as i32)
}
