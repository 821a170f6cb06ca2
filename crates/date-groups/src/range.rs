//! Inclusive calendar date ranges and the width guard applied before
//! generation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PatternError, Result};

/// ISO calendar date format used for every date string in this crate.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default cap on range width: two years, leap day included.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 731;

/// A date range, inclusive on both ends.
///
/// Dates carry no time of day. A range with `start > end` is allowed and
/// simply contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Build a range from datetimes, dropping the time of day.
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateRange {
            start: start.date(),
            end: end.date(),
        }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidDate` naming the first string that fails.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(DateRange {
            start: parse_iso_date(start)?,
            end: parse_iso_date(end)?,
        })
    }

    /// Number of days in the range, counting both ends. Zero when inverted.
    pub fn total_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Every day of the range in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.succ_opt())
            .take_while(move |day| *day <= end)
    }

    /// Reject ranges wider than `limits` allows.
    ///
    /// # Errors
    /// Returns `PatternError::RangeTooWide` with the offending width.
    pub fn check_limits(&self, limits: &RangeLimits) -> Result<()> {
        let days = self.total_days();
        if days > i64::from(limits.max_days) {
            warn!(
                start = %self.start,
                end = %self.end,
                days,
                max = limits.max_days,
                "date range exceeds configured width"
            );
            return Err(PatternError::RangeTooWide {
                days,
                max: limits.max_days,
            });
        }
        Ok(())
    }
}

/// Bounds enforced on ranges at the application boundary.
///
/// The generator is linear in the number of days it walks; callers apply
/// these limits before handing a user-supplied range to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeLimits {
    pub max_days: u32,
}

impl Default for RangeLimits {
    fn default() -> Self {
        RangeLimits {
            max_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

/// Parse a `YYYY-MM-DD` string. Surrounding whitespace is ignored.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|_| PatternError::InvalidDate(s.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
