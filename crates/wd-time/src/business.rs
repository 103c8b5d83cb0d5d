//! Business-day predicate capability and the sequential walker.
//!
//! A business day is whatever the caller says it is: the walker consults an
//! injected [`BusinessDayPredicate`] once per candidate date. Because the
//! predicate may need to ask an external source (a holiday calendar service,
//! say), the trait is async and the walk awaits each answer before choosing
//! the next candidate — the traversal is inherently sequential, never
//! batched.
//!
//! The walker has no termination bound of its own. A predicate that is never
//! satisfied in the direction of travel makes the walk run until date
//! arithmetic leaves the supported range; bounding lookups with a timeout is
//! the predicate's job.

use async_trait::async_trait;

use crate::date::Date;
use wd_core::ensure;
use wd_core::errors::Result;

/// Capability deciding whether a date counts as a business day.
///
/// Implementations must be stateless enough to be re-invoked for any number
/// of candidate dates during one traversal. [`Weekends`] is the default
/// choice when no holiday knowledge is available; plain `Fn(Date) -> bool`
/// closures also implement the trait via a blanket impl.
#[async_trait]
pub trait BusinessDayPredicate: Send + Sync {
    /// Return `true` if `date` is a business day.
    async fn is_business_day(&self, date: Date) -> bool;
}

/// The default predicate: every Monday–Friday is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weekends;

#[async_trait]
impl BusinessDayPredicate for Weekends {
    async fn is_business_day(&self, date: Date) -> bool {
        date.weekday().is_weekday()
    }
}

#[async_trait]
impl<F> BusinessDayPredicate for F
where
    F: Fn(Date) -> bool + Send + Sync,
{
    async fn is_business_day(&self, date: Date) -> bool {
        self(date)
    }
}

/// Return the `n`-th business day on or after `date`.
///
/// The walk advances one calendar day at a time, skipping dates the
/// predicate rejects, `n` times over; a final skip pass then guarantees the
/// returned date itself satisfies the predicate. In particular
/// `next_business_day(d, 0, p)` is *not* the identity: it returns `d` only
/// if `p` already accepts it, and the next acceptable date otherwise.
///
/// # Errors
/// `InvalidArgument` if `n < 0`; a date error if the walk runs off the end
/// of the supported range.
pub async fn next_business_day<P>(date: Date, n: i32, is_business_day: &P) -> Result<Date>
where
    P: BusinessDayPredicate + ?Sized,
{
    walk(date, n, 1, is_business_day).await
}

/// Return the `n`-th business day on or before `date`.
///
/// Mirror image of [`next_business_day`], stepping backward.
///
/// # Errors
/// `InvalidArgument` if `n < 0`; a date error if the walk runs off the end
/// of the supported range.
pub async fn previous_business_day<P>(date: Date, n: i32, is_business_day: &P) -> Result<Date>
where
    P: BusinessDayPredicate + ?Sized,
{
    walk(date, n, -1, is_business_day).await
}

/// [`next_business_day`] with the default [`Weekends`] predicate.
pub async fn next_business_day_weekends(date: Date, n: i32) -> Result<Date> {
    next_business_day(date, n, &Weekends).await
}

/// [`previous_business_day`] with the default [`Weekends`] predicate.
pub async fn previous_business_day_weekends(date: Date, n: i32) -> Result<Date> {
    previous_business_day(date, n, &Weekends).await
}

async fn walk<P>(mut date: Date, n: i32, step: i32, predicate: &P) -> Result<Date>
where
    P: BusinessDayPredicate + ?Sized,
{
    ensure!(n >= 0, "count must be non-negative, got {n}");
    for _ in 0..n {
        date = date.add_days(step)?;
        while !predicate.is_business_day(date).await {
            date = date.add_days(step)?;
        }
    }
    // Unconditional final pass: a no-op when the date is already valid, but
    // it is what makes n == 0 normalize instead of echoing the input.
    while !predicate.is_business_day(date).await {
        date = date.add_days(step)?;
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn default_predicate_skips_weekends() {
        // 2023-06-02 is a Friday
        let fri = date(2023, 6, 2);
        assert_eq!(
            next_business_day_weekends(fri, 1).await.unwrap(),
            date(2023, 6, 5)
        );
        assert_eq!(
            previous_business_day_weekends(date(2023, 6, 5), 1).await.unwrap(),
            fri
        );
    }

    #[tokio::test]
    async fn zero_normalizes() {
        // Weekday input comes back unchanged
        let fri = date(2023, 6, 2);
        assert_eq!(next_business_day_weekends(fri, 0).await.unwrap(), fri);
        // Weekend input normalizes forward / backward
        let sat = date(2023, 6, 3);
        assert_eq!(
            next_business_day_weekends(sat, 0).await.unwrap(),
            date(2023, 6, 5)
        );
        assert_eq!(
            previous_business_day_weekends(sat, 0).await.unwrap(),
            fri
        );
    }

    #[tokio::test]
    async fn closure_predicate() {
        // Mondays only
        let mondays = |d: Date| d.weekday() == Weekday::Monday;
        let got = next_business_day(date(2023, 6, 1), 2, &mondays).await.unwrap();
        // Thursday -> Mon Jun 5 -> Mon Jun 12
        assert_eq!(got, date(2023, 6, 12));
    }

    #[tokio::test]
    async fn negative_count_rejected() {
        assert!(next_business_day_weekends(date(2023, 6, 2), -1).await.is_err());
        assert!(previous_business_day_weekends(date(2023, 6, 2), -1)
            .await
            .is_err());
    }
}
