//! # calendar-engine
//!
//! Deterministic calendar arithmetic over naive wall-clock instants.
//!
//! The engine adds signed offsets of seconds, minutes, days, weeks, months
//! or years to an [`Instant`] with explicit end-of-month clamping, answers
//! ordering and same-day questions, and knows a fixed set of holidays per
//! year. Every function is pure; the only reader of the system clock is
//! [`clock::SystemClock`], and callers inject it.
//!
//! ## Modules
//!
//! - [`instant`]: the immutable point-in-time value
//! - [`unit`]: the closed set of amount units
//! - [`validate`]: gates for loosely typed input (text, float amounts)
//! - [`adder`]: unit-typed addition with month/year clamping
//! - [`compare`]: strict ordering, strict range membership, same-day equality
//! - [`holiday`]: fixed-date holidays by year
//! - [`clock`]: injectable time source
//! - [`error`]: error types

pub mod adder;
pub mod clock;
pub mod compare;
pub mod error;
pub mod holiday;
pub mod instant;
pub mod unit;
pub mod validate;

pub use adder::{
    add, add_days, adjust, clamp_day, days_in_month, is_leap_year, AdjustedInstant,
};
pub use clock::{current_year, get_current_year, Clock, FixedClock, SystemClock};
pub use compare::{is_date_before, is_same_day, is_within_range};
pub use error::{CalendarError, Result};
pub use holiday::{
    get_holidays, holiday_name, holidays_this_year, is_holiday, named_holidays, Holiday,
};
pub use instant::Instant;
pub use unit::AmountUnit;
pub use validate::{parse_amount, require_valid_amount, require_valid_instant};
