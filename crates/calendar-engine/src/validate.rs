//! Input gates that run before any arithmetic.
//!
//! The typed API cannot be handed an invalid [`Instant`], so these gates
//! sit at the boundary where loosely typed input (text, floating point
//! amounts) enters the engine.

use crate::error::{CalendarError, Result};
use crate::instant::Instant;

/// Largest float magnitude that still converts to `i64` without saturating.
const MAX_EXACT_AMOUNT: f64 = 9_223_372_036_854_774_784.0;

/// Parse a datetime literal, or fail with [`CalendarError::InvalidDate`].
///
/// See [`Instant::parse`] for accepted layouts.
pub fn require_valid_instant(text: &str) -> Result<Instant> {
    Instant::parse(text)
}

/// Accept a finite whole number and return it as an integer amount.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidAmount`] for NaN, infinities, values
/// with a fractional part, and magnitudes `i64` cannot hold.
///
/// # Examples
///
/// ```
/// use calendar_engine::validate::require_valid_amount;
///
/// assert_eq!(require_valid_amount(-3.0).unwrap(), -3);
/// assert!(require_valid_amount(f64::NAN).is_err());
/// assert!(require_valid_amount(1.5).is_err());
/// ```
pub fn require_valid_amount(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(CalendarError::InvalidAmount(format!(
            "{value} is not a finite number"
        )));
    }
    if value.fract() != 0.0 {
        return Err(CalendarError::InvalidAmount(format!(
            "{value} is not a whole number"
        )));
    }
    if value.abs() > MAX_EXACT_AMOUNT {
        return Err(CalendarError::InvalidAmount(format!(
            "{value} is too large"
        )));
    }
    Ok(value as i64)
}

/// Parse an amount from text.
///
/// Integer literals are taken exactly; anything else goes through the
/// floating point path of [`require_valid_amount`], so `"5.0"` and `"1e3"`
/// are accepted while `"NaN"`, `"inf"` and `"abc"` are not.
pub fn parse_amount(text: &str) -> Result<i64> {
    let s = text.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Ok(n);
    }
    let value: f64 = s
        .parse()
        .map_err(|_| CalendarError::InvalidAmount(format!("'{s}' is not a number")))?;
    require_valid_amount(value)
}
