//! Fixed-date holiday calendar.
//!
//! Every year has the same three holidays, in this order:
//!
//! | Holiday          | Date   |
//! |------------------|--------|
//! | New Year's Day   | Jan 1  |
//! | Christmas Day    | Dec 25 |
//! | New Year's Eve   | Dec 31 |
//!
//! The set is computed from the year alone. No weekday observance, region
//! or cache is involved, so lookups for different years never interact.

use serde::Serialize;
use tracing::debug;

use crate::clock::{current_year, Clock};
use crate::compare::is_same_day;
use crate::error::Result;
use crate::instant::Instant;

/// A fixed month/day holiday rule.
#[derive(Debug, Clone, Copy)]
struct HolidayRule {
    name: &'static str,
    month: u32,
    day: u32,
}

impl HolidayRule {
    fn on(&self, year: i32) -> Result<Instant> {
        Instant::from_ymd(year, self.month, self.day)
    }
}

/// Chronological within a year.
const RULES: [HolidayRule; 3] = [
    HolidayRule {
        name: "New Year's Day",
        month: 1,
        day: 1,
    },
    HolidayRule {
        name: "Christmas Day",
        month: 12,
        day: 25,
    },
    HolidayRule {
        name: "New Year's Eve",
        month: 12,
        day: 31,
    },
];

/// A holiday date with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub date: Instant,
}

/// The holidays of `year` at midnight, in chronological order.
///
/// # Errors
///
/// Returns [`crate::CalendarError::InvalidDate`] only for years outside
/// the representable calendar range.
///
/// # Examples
///
/// ```
/// use calendar_engine::{get_holidays, Instant};
///
/// let days = get_holidays(2025).unwrap();
/// assert_eq!(days, vec![
///     Instant::from_ymd(2025, 1, 1).unwrap(),
///     Instant::from_ymd(2025, 12, 25).unwrap(),
///     Instant::from_ymd(2025, 12, 31).unwrap(),
/// ]);
/// ```
pub fn get_holidays(year: i32) -> Result<Vec<Instant>> {
    debug!(year, "computing holidays");
    RULES.iter().map(|rule| rule.on(year)).collect()
}

/// Like [`get_holidays`], with each date's name.
pub fn named_holidays(year: i32) -> Result<Vec<Holiday>> {
    RULES
        .iter()
        .map(|rule| {
            Ok(Holiday {
                name: rule.name,
                date: rule.on(year)?,
            })
        })
        .collect()
}

/// `true` iff `x` falls on a holiday of its own year. Time of day is ignored.
pub fn is_holiday(x: Instant) -> bool {
    holiday_name(x).is_some()
}

/// Name of the holiday `x` falls on, if any.
pub fn holiday_name(x: Instant) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| rule.on(x.year()).is_ok_and(|date| is_same_day(x, date)))
        .map(|rule| rule.name)
}

/// The holidays of the clock's current year.
pub fn holidays_this_year<C: Clock + ?Sized>(clock: &C) -> Result<Vec<Holiday>> {
    named_holidays(current_year(clock))
}
