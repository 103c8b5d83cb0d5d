//! UTC offsets and timezone-rule conversion.
//!
//! Conversion works on naive [`DateTime`] values: a local wall-clock time
//! minus its offset is UTC, UTC plus an offset is local wall-clock time.
//! Offset *lookup* — which offset applies at a given instant, DST rules and
//! all — is a capability the caller brings via [`TimeZoneRule`]; this crate
//! ships no timezone database.

use crate::datetime::DateTime;
use wd_core::errors::{Error, Result};

/// A fixed offset from UTC in whole seconds, strictly less than 24 hours in
/// magnitude. Positive offsets are east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset(0);

    /// Create an offset from a signed second count.
    ///
    /// Returns an error if `|seconds|` is a day or more.
    pub fn from_seconds(seconds: i32) -> Result<Self> {
        if seconds.abs() >= 86_400 {
            return Err(Error::InvalidArgument(format!(
                "UTC offset {seconds}s exceeds a day"
            )));
        }
        Ok(UtcOffset(seconds))
    }

    /// Create an offset from hours, minutes, and seconds. The sign of
    /// `hours` gives the direction; `minutes` and `seconds` are magnitudes.
    ///
    /// Use [`UtcOffset::from_seconds`] for offsets like `-00:30` where the
    /// hour component is zero but the offset is negative.
    pub fn from_hms(hours: i8, minutes: u8, seconds: u8) -> Result<Self> {
        if minutes >= 60 || seconds >= 60 {
            return Err(Error::InvalidArgument(format!(
                "offset minutes/seconds {minutes}:{seconds} out of range"
            )));
        }
        let magnitude =
            i32::from(hours.unsigned_abs()) * 3600 + i32::from(minutes) * 60 + i32::from(seconds);
        Self::from_seconds(if hours < 0 { -magnitude } else { magnitude })
    }

    /// The offset in seconds east of UTC.
    pub fn total_seconds(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "Z");
        }
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        let (h, m, s) = (abs / 3600, abs / 60 % 60, abs % 60);
        if s == 0 {
            write!(f, "{sign}{h:02}:{m:02}")
        } else {
            write!(f, "{sign}{h:02}:{m:02}:{s:02}")
        }
    }
}

/// Capability resolving which UTC offset a zone applies at a given instant.
///
/// Implementations with DST carry their own rule data; [`FixedZone`] covers
/// the constant-offset case.
pub trait TimeZoneRule: Send + Sync {
    /// Zone identifier (e.g. `"UTC+02:00"` or an IANA name).
    fn name(&self) -> &str;

    /// The offset in effect at the given UTC instant.
    fn offset_at(&self, utc: DateTime) -> UtcOffset;
}

/// A zone with one constant offset, no transitions.
#[derive(Debug, Clone)]
pub struct FixedZone {
    name: String,
    offset: UtcOffset,
}

impl FixedZone {
    /// Create a fixed zone with the given name and offset.
    pub fn new(name: impl Into<String>, offset: UtcOffset) -> Self {
        FixedZone {
            name: name.into(),
            offset,
        }
    }

    /// A fixed zone named after its offset (e.g. `"UTC+05:30"`).
    pub fn from_offset(offset: UtcOffset) -> Self {
        let name = if offset == UtcOffset::UTC {
            "UTC".to_string()
        } else {
            format!("UTC{offset}")
        };
        FixedZone { name, offset }
    }
}

impl TimeZoneRule for FixedZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn offset_at(&self, _utc: DateTime) -> UtcOffset {
        self.offset
    }
}

/// A local wall-clock time paired with the zone it was resolved in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDateTime {
    /// Local wall-clock time.
    pub local: DateTime,
    /// Name of the zone the offset came from.
    pub zone: String,
    /// The offset that was applied.
    pub offset: UtcOffset,
}

impl ZonedDateTime {
    /// Convert back to the UTC instant this local time represents.
    pub fn to_utc(&self) -> Result<DateTime> {
        to_utc(self.local, self.offset)
    }
}

impl std::fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.local, self.offset)
    }
}

/// Convert a local wall-clock time at the given offset to UTC.
pub fn to_utc(local: DateTime, offset: UtcOffset) -> Result<DateTime> {
    local.add_seconds(-i64::from(offset.total_seconds()))
}

/// Convert a UTC time to the local wall-clock time at the given offset.
pub fn from_utc(utc: DateTime, offset: UtcOffset) -> Result<DateTime> {
    utc.add_seconds(i64::from(offset.total_seconds()))
}

/// Resolve `utc` in a zone: look up the offset through the rule capability
/// and pair the resulting local time with it.
pub fn at_zone(utc: DateTime, rule: &dyn TimeZoneRule) -> Result<ZonedDateTime> {
    let offset = rule.offset_at(utc);
    Ok(ZonedDateTime {
        local: from_utc(utc, offset)?,
        zone: rule.name().to_string(),
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn dt(y: u16, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> DateTime {
        DateTime::new(Date::from_ymd(y, mo, d).unwrap(), h, mi, s).unwrap()
    }

    #[test]
    fn offset_construction() {
        assert_eq!(UtcOffset::from_hms(5, 30, 0).unwrap().total_seconds(), 19_800);
        assert_eq!(UtcOffset::from_hms(-8, 0, 0).unwrap().total_seconds(), -28_800);
        assert!(UtcOffset::from_seconds(86_400).is_err());
        assert!(UtcOffset::from_hms(0, 60, 0).is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "Z");
        assert_eq!(UtcOffset::from_hms(5, 30, 0).unwrap().to_string(), "+05:30");
        assert_eq!(UtcOffset::from_hms(-8, 0, 0).unwrap().to_string(), "-08:00");
        assert_eq!(
            UtcOffset::from_seconds(-1800).unwrap().to_string(),
            "-00:30"
        );
    }

    #[test]
    fn conversion_is_inverse() {
        let local = dt(2023, 6, 2, 15, 30, 0);
        let offset = UtcOffset::from_hms(2, 0, 0).unwrap();
        let utc = to_utc(local, offset).unwrap();
        assert_eq!(utc, dt(2023, 6, 2, 13, 30, 0));
        assert_eq!(from_utc(utc, offset).unwrap(), local);
    }

    #[test]
    fn conversion_crosses_midnight() {
        let utc = dt(2023, 6, 2, 23, 0, 0);
        let offset = UtcOffset::from_hms(5, 30, 0).unwrap();
        let local = from_utc(utc, offset).unwrap();
        assert_eq!(local, dt(2023, 6, 3, 4, 30, 0));
    }

    #[test]
    fn at_zone_resolves() {
        let utc = dt(2023, 6, 2, 12, 0, 0);
        let zone = FixedZone::new("CEST", UtcOffset::from_hms(2, 0, 0).unwrap());
        let zoned = at_zone(utc, &zone).unwrap();
        assert_eq!(zoned.local, dt(2023, 6, 2, 14, 0, 0));
        assert_eq!(zoned.zone, "CEST");
        assert_eq!(zoned.to_string(), "2023-06-02T14:00:00+02:00");
        assert_eq!(zoned.to_utc().unwrap(), utc);
    }

    #[test]
    fn from_offset_names() {
        assert_eq!(FixedZone::from_offset(UtcOffset::UTC).name(), "UTC");
        let z = FixedZone::from_offset(UtcOffset::from_hms(5, 30, 0).unwrap());
        assert_eq!(z.name(), "UTC+05:30");
    }
}
