//! The closed set of units an amount can be expressed in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Unit of a signed offset passed to [`crate::add`].
///
/// Seconds and minutes move the instant value; every other unit moves
/// the date portion and leaves the time of day untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountUnit {
    Seconds,
    Minutes,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl AmountUnit {
    /// Every unit, shortest first.
    pub const ALL: [AmountUnit; 6] = [
        AmountUnit::Seconds,
        AmountUnit::Minutes,
        AmountUnit::Days,
        AmountUnit::Weeks,
        AmountUnit::Months,
        AmountUnit::Years,
    ];

    /// Lowercase plural name, as used in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            AmountUnit::Seconds => "seconds",
            AmountUnit::Minutes => "minutes",
            AmountUnit::Days => "days",
            AmountUnit::Weeks => "weeks",
            AmountUnit::Months => "months",
            AmountUnit::Years => "years",
        }
    }

    /// Whether adding this unit can change the day-of-month through
    /// end-of-month clamping (and therefore cannot always be undone).
    pub fn clamps(self) -> bool {
        matches!(self, AmountUnit::Months | AmountUnit::Years)
    }
}

impl fmt::Display for AmountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(AmountUnit::Seconds),
            "min" | "mins" | "minute" | "minutes" => Ok(AmountUnit::Minutes),
            "d" | "day" | "days" => Ok(AmountUnit::Days),
            "w" | "week" | "weeks" => Ok(AmountUnit::Weeks),
            "mo" | "month" | "months" => Ok(AmountUnit::Months),
            "y" | "yr" | "year" | "years" => Ok(AmountUnit::Years),
            _ => Err(CalendarError::InvalidUnit(format!("'{s}'"))),
        }
    }
}
