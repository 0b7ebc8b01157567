//! The immutable point-in-time value every operation consumes and produces.
//!
//! An [`Instant`] is a naive wall-clock value: calendar fields plus a total
//! order at millisecond resolution. There is no timezone attached and no
//! conversion ever happens. Validity is decided once, at construction: an
//! `Instant` that exists is always well-formed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SubsecRound, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, Result};

/// Display format: ISO 8601 without offset, millisecond precision.
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Accepted naive literal layouts, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A calendar point in time with millisecond resolution.
///
/// Ordering, equality and hashing follow the instant value (milliseconds
/// since the Unix epoch, reading the wall clock as UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Midnight at the start of the given date. `month` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the date does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_engine::Instant;
    ///
    /// let d = Instant::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(d.to_string(), "2024-02-29T00:00:00.000");
    /// assert!(Instant::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// Build an instant from every calendar field. `month` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if any field is out of range.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| milli < 1000)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
            .map(Self)
            .ok_or_else(|| {
                CalendarError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{milli:03} does not exist"
                ))
            })
    }

    /// Build an instant from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the value is outside the
    /// representable calendar range.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| Self(dt.naive_utc()))
            .ok_or_else(|| {
                CalendarError::InvalidDate(format!("timestamp {millis}ms is out of range"))
            })
    }

    /// Wrap a chrono value, truncating anything finer than a millisecond.
    ///
    /// A leap second (`:60`) is folded into the last millisecond of the
    /// preceding second, 23:59:59.999.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        let naive = if is_leap_second(&naive) {
            naive.with_nanosecond(999_999_999).unwrap_or(naive)
        } else {
            naive
        };
        Self(naive.trunc_subsecs(3))
    }

    /// Parse a date or datetime literal.
    ///
    /// Accepts RFC 3339 (the written local fields are kept, the offset is
    /// dropped), `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space
    /// separator, and a bare `YYYY-MM-DD` (midnight).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the text matches none of
    /// these layouts, names a date that does not exist, or names a leap
    /// second (`:60`).
    pub fn parse(text: &str) -> Result<Self> {
        let s = text.trim();
        if s.is_empty() {
            return Err(CalendarError::InvalidDate("empty datetime".to_string()));
        }

        let parsed = DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_local())
            .ok()
            .or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            });

        if let Some(naive) = parsed {
            if is_leap_second(&naive) {
                return Err(CalendarError::InvalidDate(format!(
                    "'{s}' names a leap second"
                )));
            }
            return Ok(Self::from_naive(naive));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| CalendarError::InvalidDate(format!("'{s}' is not a recognised datetime")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1..=12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month of year, 0..=11.
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Milliseconds since 1970-01-01T00:00:00, wall clock read as UTC.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    pub fn date_naive(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// The same calendar date at 00:00:00.000.
    pub fn start_of_day(&self) -> Self {
        Self(self.0.date().and_time(chrono::NaiveTime::MIN))
    }
}

/// chrono encodes a leap second as a nanosecond value of one second or more.
fn is_leap_second(naive: &NaiveDateTime) -> bool {
    naive.nanosecond() >= 1_000_000_000
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for Instant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_of_constructed_instant() {
        let i = Instant::from_ymd_hms_milli(2025, 12, 25, 18, 30, 5, 250).unwrap();
        assert_eq!(i.year(), 2025);
        assert_eq!(i.month(), 12);
        assert_eq!(i.month0(), 11);
        assert_eq!(i.day(), 25);
        assert_eq!(i.hour(), 18);
        assert_eq!(i.minute(), 30);
        assert_eq!(i.second(), 5);
        assert_eq!(i.millisecond(), 250);
    }

    #[test]
    fn test_nonexistent_dates_rejected() {
        assert!(Instant::from_ymd(2025, 2, 29).is_err());
        assert!(Instant::from_ymd(2025, 13, 1).is_err());
        assert!(Instant::from_ymd(2025, 4, 31).is_err());
        assert!(Instant::from_ymd_hms_milli(2025, 1, 1, 24, 0, 0, 0).is_err());
        assert!(Instant::from_ymd_hms_milli(2025, 1, 1, 0, 0, 0, 1000).is_err());

        let err = Instant::from_ymd(2025, 2, 30).unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
    }

    #[test]
    fn test_timestamp_round_trip_epoch() {
        let epoch = Instant::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(epoch.timestamp_millis(), 0);
        assert_eq!(Instant::from_timestamp_millis(0).unwrap(), epoch);

        let later = Instant::from_timestamp_millis(86_400_000 + 1).unwrap();
        assert_eq!(later.to_string(), "1970-01-02T00:00:00.001");
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(Instant::from_timestamp_millis(i64::MAX).is_err());
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let i = Instant::parse("2025-01-15").unwrap();
        assert_eq!(i.to_string(), "2025-01-15T00:00:00.000");
    }

    #[test]
    fn test_parse_naive_datetime_layouts() {
        assert_eq!(
            Instant::parse("2025-12-25T18:30:00").unwrap().to_string(),
            "2025-12-25T18:30:00.000"
        );
        assert_eq!(
            Instant::parse("2025-12-25 18:30:00.5").unwrap().to_string(),
            "2025-12-25T18:30:00.500"
        );
        assert_eq!(
            Instant::parse("2025-12-25T18:30").unwrap().to_string(),
            "2025-12-25T18:30:00.000"
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_written_wall_clock() {
        let i = Instant::parse("2025-06-01T09:15:00-05:00").unwrap();
        assert_eq!(i.hour(), 9);
        assert_eq!(i.day(), 1);
    }

    #[test]
    fn test_parse_truncates_to_milliseconds() {
        let i = Instant::parse("2025-01-01T00:00:00.123456789").unwrap();
        assert_eq!(i.millisecond(), 123);
        assert_eq!(i, Instant::from_ymd_hms_milli(2025, 1, 1, 0, 0, 0, 123).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "not-a-date", "2025-02-30", "2025-13-01", "25/12/2025"] {
            let err = Instant::parse(bad).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidDate(_)), "{bad}: {err}");
        }
    }

    #[test]
    fn test_ordering_is_millisecond_resolution() {
        let a = Instant::from_ymd_hms_milli(2025, 1, 1, 0, 0, 0, 1).unwrap();
        let b = Instant::from_ymd_hms_milli(2025, 1, 1, 0, 0, 0, 2).unwrap();
        assert!(a < b);
        assert_eq!(b.timestamp_millis() - a.timestamp_millis(), 1);
    }

    #[test]
    fn test_parse_rejects_leap_second() {
        for text in [
            "2016-12-31T23:59:60",
            "2016-12-31 23:59:60.500",
            "2016-12-31T23:59:60.500Z",
        ] {
            let err = Instant::parse(text).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidDate(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_from_naive_folds_leap_second() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        let i = Instant::from_naive(leap);
        assert_eq!(i, Instant::from_ymd_hms_milli(2016, 12, 31, 23, 59, 59, 999).unwrap());
        assert_eq!(i.millisecond(), 999);
        assert_eq!(i.to_string(), "2016-12-31T23:59:59.999");
    }

    #[test]
    fn test_start_of_day() {
        let i = Instant::parse("2025-03-04T23:59:59.999").unwrap();
        assert_eq!(i.start_of_day(), Instant::from_ymd(2025, 3, 4).unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let i = Instant::from_ymd(2025, 1, 6).unwrap();
        let json = serde_json::to_string(&i).unwrap();
        assert_eq!(json, "\"2025-01-06T00:00:00.000\"");
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, i);
        assert!(serde_json::from_str::<Instant>("\"nope\"").is_err());
    }
}
