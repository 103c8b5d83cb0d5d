//! `DateTime` — a calendar date with a time of day, no timezone attached.
//!
//! The timestamp is "naive": it says 15:30 on some date without saying
//! where. Pair it with a [`crate::timezone::UtcOffset`] or a
//! [`crate::timezone::TimeZoneRule`] to pin it to an instant.

use crate::date::Date;
use wd_core::errors::{Error, Result};

/// Seconds in one calendar day.
pub const SECS_PER_DAY: i64 = 86_400;

/// A naive calendar timestamp: a [`Date`] plus seconds-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    date: Date,
    secs: u32, // 0..86_400
}

impl DateTime {
    /// Create a timestamp from a date and an hour/minute/second triple.
    pub fn new(date: Date, hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(Error::InvalidArgument(format!(
                "time of day {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        Ok(DateTime {
            date,
            secs: u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second),
        })
    }

    /// Midnight at the start of `date`.
    pub fn midnight(date: Date) -> Self {
        DateTime { date, secs: 0 }
    }

    /// Create a timestamp from seconds since 1970-01-01T00:00:00.
    ///
    /// Returns an error if the timestamp falls outside the supported date
    /// range.
    pub fn from_unix_timestamp(timestamp: i64) -> Result<Self> {
        let days = timestamp.div_euclid(SECS_PER_DAY);
        let secs = timestamp.rem_euclid(SECS_PER_DAY) as u32;
        let serial = i32::try_from(days)
            .map_err(|_| Error::Date(format!("timestamp {timestamp} out of range")))?;
        Ok(DateTime {
            date: Date::from_serial(serial)?,
            secs,
        })
    }

    /// Seconds since 1970-01-01T00:00:00 of this (naive) timestamp.
    pub fn unix_timestamp(&self) -> i64 {
        i64::from(self.date.serial()) * SECS_PER_DAY + i64::from(self.secs)
    }

    /// Shift by `delta` seconds, rolling over day boundaries as needed.
    pub fn add_seconds(self, delta: i64) -> Result<Self> {
        Self::from_unix_timestamp(self.unix_timestamp() + delta)
    }

    /// Return the calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Seconds elapsed since midnight (0–86 399).
    pub fn seconds_of_day(&self) -> u32 {
        self.secs
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        (self.secs / 3600) as u8
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        (self.secs / 60 % 60) as u8
    }

    /// Return the second (0–59).
    pub fn second(&self) -> u8 {
        (self.secs % 60) as u8
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date,
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn unix_roundtrip() {
        let dt = DateTime::new(date(2023, 6, 2), 15, 30, 45).unwrap();
        let ts = dt.unix_timestamp();
        assert_eq!(DateTime::from_unix_timestamp(ts).unwrap(), dt);
        // Epoch itself
        assert_eq!(
            DateTime::from_unix_timestamp(0).unwrap(),
            DateTime::midnight(date(1970, 1, 1))
        );
    }

    #[test]
    fn negative_timestamps() {
        // One second before the epoch is 1969-12-31T23:59:59
        let dt = DateTime::from_unix_timestamp(-1).unwrap();
        assert_eq!(dt.date(), date(1969, 12, 31));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 59));
    }

    #[test]
    fn invalid_time_of_day() {
        assert!(DateTime::new(date(2023, 6, 2), 24, 0, 0).is_err());
        assert!(DateTime::new(date(2023, 6, 2), 12, 60, 0).is_err());
        assert!(DateTime::new(date(2023, 6, 2), 12, 0, 60).is_err());
    }

    #[test]
    fn add_seconds_rolls_over() {
        let dt = DateTime::new(date(2023, 6, 2), 23, 59, 30).unwrap();
        let later = dt.add_seconds(45).unwrap();
        assert_eq!(later.date(), date(2023, 6, 3));
        assert_eq!((later.hour(), later.minute(), later.second()), (0, 0, 15));
        let earlier = dt.add_seconds(-SECS_PER_DAY).unwrap();
        assert_eq!(earlier.date(), date(2023, 6, 1));
    }

    #[test]
    fn iso_display() {
        let dt = DateTime::new(date(2023, 6, 2), 9, 5, 0).unwrap();
        assert_eq!(dt.to_string(), "2023-06-02T09:05:00");
    }

    #[test]
    fn ordering() {
        let a = DateTime::new(date(2023, 6, 2), 9, 0, 0).unwrap();
        let b = DateTime::new(date(2023, 6, 2), 10, 0, 0).unwrap();
        let c = DateTime::midnight(date(2023, 6, 3));
        assert!(a < b && b < c);
    }
}
