//! Recurrence patterns that partition a date range into voting options.
//!
//! Two families exist side by side:
//!
//! - weekday-aligned patterns (`Weekend`, `WeekdayRange`) emit one option per
//!   weekly occurrence of a fixed weekday span;
//! - fixed-chunk patterns (`Week`, `TwoWeeks`, `LongWeekend`, `Custom`) cut the
//!   range into consecutive N-day blocks counted from the range start,
//!   regardless of weekday.
//!
//! `Flexible` makes every day its own option.
//!
//! The JSON shape is internally tagged by `"type"`:
//!
//! ```json
//! {"type": "weekday-range", "startDay": 5, "endDay": 0}
//! {"type": "custom", "days": 5}
//! ```
//!
//! Deserialization validates field bounds, so a `DatePattern` obtained from
//! JSON is always well-formed.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};
use crate::weekday::{abbreviation, weekday_from_index, weekday_index, weekday_span};

/// Largest period length accepted by [`DatePattern::Custom`].
pub const MAX_CUSTOM_DAYS: u32 = 31;

/// A recurrence rule describing how a date range becomes voting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PatternRepr", into = "PatternRepr")]
pub enum DatePattern {
    /// Every calendar day is its own option.
    Flexible,
    /// Every complete Saturday + Sunday pair.
    Weekend,
    /// Every weekly occurrence of the closed span `start_day..=end_day`,
    /// wrapping past Saturday when `end_day` is earlier in the week.
    WeekdayRange { start_day: Weekday, end_day: Weekday },
    /// Consecutive 7-day chunks from the range start.
    Week,
    /// Consecutive 14-day chunks from the range start.
    TwoWeeks,
    /// Consecutive 3- or 4-day chunks from the range start.
    LongWeekend { days: u32 },
    /// Consecutive chunks of 1 to 31 days from the range start.
    Custom { days: u32 },
}

/// How a pattern lays its groups out over a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// One single-day group per day.
    Daily,
    /// One `span`-day group starting on every `first` weekday.
    Weekly { first: Weekday, span: u32 },
    /// Back-to-back groups of `size` days from the range start.
    Chunked { size: u32 },
}

impl DatePattern {
    /// Build a weekday-range pattern from Sunday-based weekday indices.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidWeekday` if either index is outside `0..=6`.
    pub fn weekday_range(start_day: u8, end_day: u8) -> Result<Self> {
        Ok(DatePattern::WeekdayRange {
            start_day: weekday_from_index(start_day)?,
            end_day: weekday_from_index(end_day)?,
        })
    }

    /// Build a long-weekend pattern of 3 or 4 days.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidLongWeekend` for any other length.
    pub fn long_weekend(days: u32) -> Result<Self> {
        match days {
            3 | 4 => Ok(DatePattern::LongWeekend { days }),
            other => Err(PatternError::InvalidLongWeekend(other)),
        }
    }

    /// Build a custom fixed-chunk pattern of 1 to 31 days.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidCustomDays` for lengths outside `1..=31`.
    pub fn custom(days: u32) -> Result<Self> {
        if (1..=MAX_CUSTOM_DAYS).contains(&days) {
            Ok(DatePattern::Custom { days })
        } else {
            Err(PatternError::InvalidCustomDays(days))
        }
    }

    /// Re-check the field bounds of a pattern built directly from its variants.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DatePattern::LongWeekend { days } => Self::long_weekend(days).map(|_| ()),
            DatePattern::Custom { days } => Self::custom(days).map(|_| ()),
            DatePattern::Flexible
            | DatePattern::Weekend
            | DatePattern::WeekdayRange { .. }
            | DatePattern::Week
            | DatePattern::TwoWeeks => Ok(()),
        }
    }

    /// True for patterns whose groups start on a fixed weekday.
    ///
    /// For these, leftover days outside complete periods are not reported by
    /// [`remaining_days`](crate::remaining_days).
    pub fn is_weekday_aligned(&self) -> bool {
        matches!(self.layout(), Layout::Weekly { .. })
    }

    pub(crate) fn layout(&self) -> Layout {
        match *self {
            DatePattern::Flexible => Layout::Daily,
            DatePattern::Weekend => Layout::Weekly {
                first: Weekday::Sat,
                span: 2,
            },
            DatePattern::WeekdayRange { start_day, end_day } => Layout::Weekly {
                first: start_day,
                span: weekday_span(start_day, end_day),
            },
            DatePattern::Week => Layout::Chunked { size: 7 },
            DatePattern::TwoWeeks => Layout::Chunked { size: 14 },
            DatePattern::LongWeekend { days } | DatePattern::Custom { days } => {
                Layout::Chunked { size: days }
            }
        }
    }
}

/// Nominal length in days of one group produced by `pattern`.
pub fn pattern_days(pattern: &DatePattern) -> u32 {
    match pattern.layout() {
        Layout::Daily => 1,
        Layout::Weekly { span, .. } => span,
        Layout::Chunked { size } => size,
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePattern::Flexible => f.write_str("flexible"),
            DatePattern::Weekend => f.write_str("weekend"),
            DatePattern::WeekdayRange { start_day, end_day } => write!(
                f,
                "weekday-range:{}-{}",
                weekday_index(*start_day),
                weekday_index(*end_day)
            ),
            DatePattern::Week => f.write_str("week"),
            DatePattern::TwoWeeks => f.write_str("two-weeks"),
            DatePattern::LongWeekend { days } => write!(f, "long-weekend:{}", days),
            DatePattern::Custom { days } => write!(f, "custom:{}", days),
        }
    }
}

/// Parse a pattern from its JSON object form or from the shorthand produced
/// by its `Display` impl (`weekend`, `custom:5`, `weekday-range:5-0`, ...).
impl FromStr for DatePattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('{') {
            return serde_json::from_str(s).map_err(|e| PatternParseError(e.to_string()));
        }

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let pattern = match (name, arg) {
            ("flexible", None) => Ok(DatePattern::Flexible),
            ("weekend", None) => Ok(DatePattern::Weekend),
            ("week", None) => Ok(DatePattern::Week),
            ("two-weeks", None) => Ok(DatePattern::TwoWeeks),
            ("long-weekend", Some(arg)) => DatePattern::long_weekend(parse_number(arg)?),
            ("custom", Some(arg)) => DatePattern::custom(parse_number(arg)?),
            ("weekday-range", Some(arg)) => {
                let (start, end) = arg.split_once('-').ok_or_else(|| {
                    PatternParseError(format!("expected weekday-range:START-END, got '{}'", s))
                })?;
                DatePattern::weekday_range(parse_number(start)?, parse_number(end)?)
            }
            _ => return Err(PatternParseError(format!("unknown pattern '{}'", s))),
        };

        pattern.map_err(|e| PatternParseError(e.to_string()))
    }
}

fn parse_number<T: FromStr>(raw: &str) -> std::result::Result<T, PatternParseError> {
    raw.trim()
        .parse()
        .map_err(|_| PatternParseError(format!("expected a number, got '{}'", raw)))
}

/// A pattern string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid pattern: {0}")]
pub struct PatternParseError(String);

// ---------------------------------------------------------------------------
// Wire representation
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum PatternRepr {
    Flexible,
    Weekend,
    #[serde(rename_all = "camelCase")]
    WeekdayRange {
        start_day: u8,
        end_day: u8,
    },
    Week,
    TwoWeeks,
    LongWeekend {
        days: u32,
    },
    Custom {
        days: u32,
    },
}

impl TryFrom<PatternRepr> for DatePattern {
    type Error = PatternError;

    fn try_from(repr: PatternRepr) -> Result<Self> {
        match repr {
            PatternRepr::Flexible => Ok(DatePattern::Flexible),
            PatternRepr::Weekend => Ok(DatePattern::Weekend),
            PatternRepr::WeekdayRange { start_day, end_day } => {
                DatePattern::weekday_range(start_day, end_day)
            }
            PatternRepr::Week => Ok(DatePattern::Week),
            PatternRepr::TwoWeeks => Ok(DatePattern::TwoWeeks),
            PatternRepr::LongWeekend { days } => DatePattern::long_weekend(days),
            PatternRepr::Custom { days } => DatePattern::custom(days),
        }
    }
}

impl From<DatePattern> for PatternRepr {
    fn from(pattern: DatePattern) -> Self {
        match pattern {
            DatePattern::Flexible => PatternRepr::Flexible,
            DatePattern::Weekend => PatternRepr::Weekend,
            DatePattern::WeekdayRange { start_day, end_day } => PatternRepr::WeekdayRange {
                start_day: weekday_index(start_day),
                end_day: weekday_index(end_day),
            },
            DatePattern::Week => PatternRepr::Week,
            DatePattern::TwoWeeks => PatternRepr::TwoWeeks,
            DatePattern::LongWeekend { days } => PatternRepr::LongWeekend { days },
            DatePattern::Custom { days } => PatternRepr::Custom { days },
        }
    }
}

/// Human-readable span description, e.g. `Fri-Sun` for a weekday range.
pub(crate) fn span_name(start_day: Weekday, end_day: Weekday) -> String {
    format!("{}-{}", abbreviation(start_day), abbreviation(end_day))
}
