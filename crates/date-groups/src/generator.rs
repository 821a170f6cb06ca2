//! Date range + pattern → ordered voting options.
//!
//! Every pattern reduces to one of three layouts (see [`DatePattern`]):
//! one group per day, one group per weekly occurrence of a weekday span, or
//! back-to-back fixed-size chunks from the range start. Groups that would run
//! past the range end are dropped whole, never truncated.

use chrono::{Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::label::{format_group_range, group_label};
use crate::pattern::{DatePattern, Layout};
use crate::range::{to_iso_date, DateRange};
use crate::weekday::next_weekday_on_or_after;

/// One voting option: an ordered run of calendar days plus its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    /// ISO `YYYY-MM-DD` dates, chronological, never empty.
    pub dates: Vec<String>,
    /// e.g. "Weekend 2" or "Fri-Sun 1".
    pub label: String,
    /// e.g. "Jan 31 - Feb 2".
    pub range: String,
}

impl DateGroup {
    /// Assemble the group at 1-based `index` for `pattern` from its days.
    pub(crate) fn build(pattern: &DatePattern, index: usize, days: &[NaiveDate]) -> Self {
        DateGroup {
            dates: days.iter().copied().map(to_iso_date).collect(),
            label: group_label(pattern, index),
            range: format_group_range(days),
        }
    }
}

/// Expand `range` into the voting options described by `pattern`.
///
/// Groups come back in chronological order; the group at position `i` carries
/// the label `group_label(pattern, i + 1)`. An inverted range yields no groups.
///
/// ```
/// use date_groups::{generate_date_groups, DatePattern, DateRange};
///
/// let range = DateRange::parse("2025-01-18", "2025-01-26").unwrap();
/// let groups = generate_date_groups(&DatePattern::Weekend, &range);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].dates, ["2025-01-18", "2025-01-19"]);
/// assert_eq!(groups[1].label, "Weekend 2");
/// ```
pub fn generate_date_groups(pattern: &DatePattern, range: &DateRange) -> Vec<DateGroup> {
    let spans = match pattern.layout() {
        Layout::Daily => daily_spans(range),
        Layout::Weekly { first, span } => weekly_spans(range, first, span),
        Layout::Chunked { size } => chunked_spans(range, size),
    };

    let groups: Vec<DateGroup> = spans
        .iter()
        .enumerate()
        .map(|(i, days)| DateGroup::build(pattern, i + 1, days))
        .collect();

    debug!(
        %pattern,
        start = %range.start,
        end = %range.end,
        groups = groups.len(),
        "generated date groups"
    );

    groups
}

/// One single-day span per day of the range.
fn daily_spans(range: &DateRange) -> Vec<Vec<NaiveDate>> {
    range.days().map(|day| vec![day]).collect()
}

/// One `span`-day run starting on each `first` weekday, stopping at the
/// first run that would end past the range.
fn weekly_spans(range: &DateRange, first: Weekday, span: u32) -> Vec<Vec<NaiveDate>> {
    let mut spans = Vec::new();
    let Some(mut current) = next_weekday_on_or_after(range.start, first) else {
        return spans;
    };

    while current <= range.end {
        match current.checked_add_days(Days::new(u64::from(span.saturating_sub(1)))) {
            Some(group_end) if group_end <= range.end => spans.push(consecutive(current, span)),
            _ => break,
        }
        match current.checked_add_days(Days::new(7)) {
            Some(next) => current = next,
            None => break,
        }
    }

    spans
}

/// Back-to-back `size`-day chunks from the range start; the trailing partial
/// chunk is dropped.
fn chunked_spans(range: &DateRange, size: u32) -> Vec<Vec<NaiveDate>> {
    debug_assert!(size > 0, "chunk size must be positive");
    if size == 0 {
        warn!("zero-length chunk pattern produces no groups");
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut current = range.start;

    while let Some(chunk_end) = current.checked_add_days(Days::new(u64::from(size - 1))) {
        if chunk_end > range.end {
            break;
        }
        spans.push(consecutive(current, size));
        match chunk_end.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    spans
}

fn consecutive(start: NaiveDate, len: u32) -> Vec<NaiveDate> {
    (0..u64::from(len))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
