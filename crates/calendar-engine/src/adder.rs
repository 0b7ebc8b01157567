//! Unit-typed calendar addition.
//!
//! [`add`] moves an [`Instant`] by a signed amount of one [`AmountUnit`]:
//!
//! - **Seconds / minutes** shift the instant value. Overflow carries into
//!   the date naturally (23:59:59 + 1s is midnight of the next day).
//! - **Days / weeks** shift the calendar date, rolling through month and
//!   year boundaries. The time of day is kept.
//! - **Months / years** shift the month index with carry into the year,
//!   then clamp the day-of-month to the length of the target month
//!   (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year). The time of
//!   day is kept.
//!
//! Clamping makes month and year steps lossy: Jan 31 + 1 month - 1 month
//! is Jan 28, not Jan 31.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CalendarError, Result};
use crate::instant::Instant;
use crate::unit::AmountUnit;
use crate::validate::{require_valid_amount, require_valid_instant};

/// Add `amount` units to `instant`, returning a new instant.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidAmount`] if the result falls outside
/// the representable calendar range.
///
/// # Examples
///
/// ```
/// use calendar_engine::{add, AmountUnit, Instant};
///
/// let jan31 = Instant::from_ymd(2025, 1, 31).unwrap();
/// let feb = add(jan31, 1, AmountUnit::Months).unwrap();
/// assert_eq!(feb, Instant::from_ymd(2025, 2, 28).unwrap());
/// ```
pub fn add(instant: Instant, amount: i64, unit: AmountUnit) -> Result<Instant> {
    trace!(%instant, amount, %unit, "add");

    let naive = instant.naive();
    let shifted = match unit {
        AmountUnit::Seconds => shift_seconds(naive, Some(amount)),
        AmountUnit::Minutes => shift_seconds(naive, amount.checked_mul(60)),
        AmountUnit::Days => shift_days(naive, Some(amount)),
        AmountUnit::Weeks => shift_days(naive, amount.checked_mul(7)),
        AmountUnit::Months => shift_months(naive, Some(amount)),
        AmountUnit::Years => shift_months(naive, amount.checked_mul(12)),
    };

    shifted.map(Instant::from_naive).ok_or_else(|| {
        CalendarError::InvalidAmount(format!(
            "adding {amount} {unit} to {instant} leaves the supported calendar range"
        ))
    })
}

/// [`add`] with the default unit, days.
pub fn add_days(instant: Instant, amount: i64) -> Result<Instant> {
    add(instant, amount, AmountUnit::default())
}

// ── Month-length helpers ────────────────────────────────────────────────────

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`. A month outside 1..=12
/// has no days and yields 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Clamp `day` to the last valid day of the target month.
pub fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    day.min(days_in_month(year, month))
}

// ── Per-unit shifts ─────────────────────────────────────────────────────────

fn shift_seconds(naive: NaiveDateTime, seconds: Option<i64>) -> Option<NaiveDateTime> {
    let delta = TimeDelta::try_seconds(seconds?)?;
    naive.checked_add_signed(delta)
}

fn shift_days(naive: NaiveDateTime, days: Option<i64>) -> Option<NaiveDateTime> {
    let delta = TimeDelta::try_days(days?)?;
    naive.checked_add_signed(delta)
}

fn shift_months(naive: NaiveDateTime, months: Option<i64>) -> Option<NaiveDateTime> {
    let start = naive.date();
    let total = i64::from(start.year())
        .checked_mul(12)?
        .checked_add(i64::from(start.month0()))?
        .checked_add(months?)?;

    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    let day = clamp_day(year, month, start.day());

    if day != start.day() {
        debug!(
            year,
            month,
            from_day = start.day(),
            to_day = day,
            "clamped day-of-month to end of target month"
        );
    }

    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(naive.time()))
}

// ── adjust ──────────────────────────────────────────────────────────────────

/// The result of adjusting a datetime literal by an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedInstant {
    /// The parsed input.
    pub original: Instant,
    /// The input moved by `amount` `unit`s.
    pub adjusted: Instant,
    /// The validated amount applied.
    pub amount: i64,
    /// The unit the amount was expressed in.
    pub unit: AmountUnit,
    /// Whether end-of-month clamping changed the day-of-month.
    pub clamped: bool,
}

/// Validate loosely typed input, then [`add`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `datetime` cannot be parsed,
/// [`CalendarError::InvalidAmount`] if `amount` is not a finite whole
/// number or the result leaves the calendar range.
///
/// # Examples
///
/// ```
/// use calendar_engine::{adjust, AmountUnit};
///
/// let r = adjust("2024-03-31", -1.0, AmountUnit::Months).unwrap();
/// assert_eq!(r.adjusted.to_string(), "2024-02-29T00:00:00.000");
/// assert!(r.clamped);
/// ```
pub fn adjust(datetime: &str, amount: f64, unit: AmountUnit) -> Result<AdjustedInstant> {
    let original = require_valid_instant(datetime)?;
    let amount = require_valid_amount(amount)?;
    AdjustedInstant::compute(original, amount, unit)
}

impl AdjustedInstant {
    /// Run [`add`] and record whether the day-of-month was clamped.
    pub fn compute(original: Instant, amount: i64, unit: AmountUnit) -> Result<Self> {
        let adjusted = add(original, amount, unit)?;
        Ok(Self {
            original,
            adjusted,
            amount,
            unit,
            clamped: unit.clamps() && adjusted.day() != original.day(),
        })
    }
}
