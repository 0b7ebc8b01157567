//! Error types for calendar-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
