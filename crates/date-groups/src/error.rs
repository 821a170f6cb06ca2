//! Error types for date-groups operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid weekday index {0} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekday(u8),

    #[error("Invalid long-weekend length {0} (expected 3 or 4 days)")]
    InvalidLongWeekend(u32),

    #[error("Invalid custom period length {0} (expected 1..=31 days)")]
    InvalidCustomDays(u32),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date range spans {days} days, limit is {max}")]
    RangeTooWide { days: i64, max: u32 },

    #[error("Stored group {0} has no dates")]
    EmptyGroup(usize),

    #[error("Stored dates do not match the layout of pattern {0}")]
    StoredShapeMismatch(String),

    #[error("Stored group {0} is not a run of consecutive days of the pattern's length")]
    MalformedGroup(usize),
}

pub type Result<T> = std::result::Result<T, PatternError>;
