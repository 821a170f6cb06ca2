//! Display text for groups: numbered labels and compact date ranges.

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::pattern::{span_name, DatePattern};
use crate::range::parse_iso_date;

/// Label of the group at 1-based `index` for `pattern`.
///
/// Depends only on the pattern and the index, so a stored poll can be
/// re-labelled without regenerating its groups.
pub fn group_label(pattern: &DatePattern, index: usize) -> String {
    match pattern {
        DatePattern::Flexible => format!("Day {}", index),
        DatePattern::Weekend => format!("Weekend {}", index),
        DatePattern::WeekdayRange { start_day, end_day } => {
            format!("{} {}", span_name(*start_day, *end_day), index)
        }
        DatePattern::Week => format!("Week {}", index),
        DatePattern::TwoWeeks => format!("Fortnight {}", index),
        DatePattern::LongWeekend { .. } => format!("Long Weekend {}", index),
        DatePattern::Custom { .. } => format!("Period {}", index),
    }
}

/// Compact range text for an ordered run of dates.
///
/// - `[]` → `""`
/// - one date → `"Jan 20"`
/// - same month → `"Jan 20 - 25"`
/// - otherwise → `"Jan 28 - Feb 3"`, `"Dec 28 - Jan 4"`
///
/// Only the first and last dates are consulted. Endpoints in the same month
/// of different years are treated as different months (`"Jan 20 - Jan 5"`).
pub fn format_group_range(dates: &[NaiveDate]) -> String {
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => format_endpoints(*first, *last, dates.len() == 1),
        _ => String::new(),
    }
}

/// [`format_group_range`] over ISO `YYYY-MM-DD` strings.
///
/// # Errors
/// Returns `PatternError::InvalidDate` if the first or last string does not
/// parse. Interior strings are not inspected.
pub fn format_iso_group_range<S: AsRef<str>>(dates: &[S]) -> Result<String> {
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => Ok(format_endpoints(
            parse_iso_date(first.as_ref())?,
            parse_iso_date(last.as_ref())?,
            dates.len() == 1,
        )),
        _ => Ok(String::new()),
    }
}

fn format_endpoints(first: NaiveDate, last: NaiveDate, single: bool) -> String {
    let start = first.format("%b %-d").to_string();
    if single {
        start
    } else if (first.year(), first.month()) == (last.year(), last.month()) {
        format!("{} - {}", start, last.day())
    } else {
        format!("{} - {}", start, last.format("%b %-d"))
    }
}
