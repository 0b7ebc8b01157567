//! Ordering and calendar-date comparison predicates.
//!
//! [`is_date_before`] and [`is_within_range`] compare full instants at
//! millisecond resolution. [`is_same_day`] compares calendar dates only.

use crate::error::{CalendarError, Result};
use crate::instant::Instant;

/// `true` iff `a` is strictly earlier than `b`.
pub fn is_date_before(a: Instant, b: Instant) -> bool {
    a < b
}

/// `true` iff `from < x < to`. Both bounds are excluded.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] when `from` is not strictly
/// before `to`, including the degenerate `from == to`, whatever `x` is.
///
/// # Examples
///
/// ```
/// use calendar_engine::{is_within_range, Instant};
///
/// let from = Instant::from_ymd(2025, 1, 10).unwrap();
/// let to = Instant::from_ymd(2025, 1, 20).unwrap();
/// assert!(is_within_range(Instant::from_ymd(2025, 1, 15).unwrap(), from, to).unwrap());
/// assert!(!is_within_range(from, from, to).unwrap());
/// assert!(is_within_range(from, to, from).is_err());
/// ```
pub fn is_within_range(x: Instant, from: Instant, to: Instant) -> Result<bool> {
    if !is_date_before(from, to) {
        return Err(CalendarError::InvalidRange(format!(
            "start {from} is not before end {to}"
        )));
    }
    Ok(is_date_before(from, x) && is_date_before(x, to))
}

/// `true` iff `a` and `b` fall on the same calendar date, whatever their
/// time of day.
pub fn is_same_day(a: Instant, b: Instant) -> bool {
    a.date_naive() == b.date_naive()
}
