//! Group statistics computed without building the groups.
//!
//! These feed "this range gives N options" hints while a poll is being set
//! up. Each result matches what [`generate_date_groups`] would produce for the
//! same input.
//!
//! [`generate_date_groups`]: crate::generate_date_groups

use chrono::Days;

use crate::pattern::{DatePattern, Layout};
use crate::range::DateRange;
use crate::weekday::next_weekday_on_or_after;

/// Number of groups `pattern` yields over `range`.
pub fn count_possible_groups(pattern: &DatePattern, range: &DateRange) -> usize {
    match pattern.layout() {
        Layout::Daily => range.total_days() as usize,
        Layout::Weekly { first, span } => {
            let Some(first_start) = next_weekday_on_or_after(range.start, first) else {
                return 0;
            };
            // Latest day a run of `span` days may start on and still fit.
            let Some(last_start) = range
                .end
                .checked_sub_days(Days::new(u64::from(span.saturating_sub(1))))
            else {
                return 0;
            };
            if first_start > last_start {
                0
            } else {
                ((last_start - first_start).num_days() / 7 + 1) as usize
            }
        }
        Layout::Chunked { size } if size > 0 => (range.total_days() / i64::from(size)) as usize,
        Layout::Chunked { .. } => 0,
    }
}

/// Days left over after the last complete chunk of a fixed-chunk pattern.
///
/// Weekday-aligned and flexible patterns always report 0: days outside a
/// complete weekly occurrence are not a remainder in the chunk sense, so this
/// number must not be shown as "N days unused" for them.
pub fn remaining_days(pattern: &DatePattern, range: &DateRange) -> u32 {
    match pattern.layout() {
        Layout::Daily | Layout::Weekly { .. } => 0,
        Layout::Chunked { size } if size > 0 => (range.total_days() % i64::from(size)) as u32,
        Layout::Chunked { .. } => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn weekly_count_is_zero_when_the_first_start_is_past_the_end() {
        // Wed..Thu never reaches a Saturday.
        let r = range((2025, 1, 22), (2025, 1, 23));
        assert_eq!(count_possible_groups(&DatePattern::Weekend, &r), 0);
    }

    #[test]
    fn zero_sized_chunks_count_nothing() {
        let r = range((2025, 1, 1), (2025, 1, 31));
        let broken = DatePattern::Custom { days: 0 };
        assert_eq!(count_possible_groups(&broken, &r), 0);
        assert_eq!(remaining_days(&broken, &r), 0);
    }
}
