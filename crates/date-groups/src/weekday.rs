//! Weekday arithmetic on calendar dates.
//!
//! Patterns address weekdays by a 0-based index starting at Sunday
//! (0=Sunday .. 6=Saturday). Internally everything is a [`chrono::Weekday`];
//! the helpers here convert between the two and do the span/navigation math
//! the generator and the counters share.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{PatternError, Result};

/// Three-letter weekday abbreviations, indexed from Sunday.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Convert a Sunday-based weekday index into a [`Weekday`].
///
/// # Errors
/// Returns `PatternError::InvalidWeekday` for indices outside `0..=6`.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(PatternError::InvalidWeekday(other)),
    }
}

/// Sunday-based index of a weekday (0=Sunday .. 6=Saturday).
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Three-letter abbreviation ("Sun", "Mon", ...) of a weekday.
pub fn abbreviation(day: Weekday) -> &'static str {
    WEEKDAY_ABBREVIATIONS[day.num_days_from_sunday() as usize]
}

/// Number of days from `start` to `end` inclusive, wrapping forward past
/// Saturday when `end` comes earlier in the week than `start`.
///
/// Always in `1..=7`; a same-day span is 1.
///
/// ```
/// use chrono::Weekday;
/// use date_groups::weekday_span;
///
/// assert_eq!(weekday_span(Weekday::Mon, Weekday::Fri), 5);
/// assert_eq!(weekday_span(Weekday::Fri, Weekday::Mon), 4);
/// ```
pub fn weekday_span(start: Weekday, end: Weekday) -> u32 {
    let start = start.num_days_from_sunday();
    let end = end.num_days_from_sunday();
    if end >= start {
        end - start + 1
    } else {
        (7 - start) + end + 1
    }
}

/// Smallest date `>= date` falling on `weekday`.
///
/// Returns `date` itself when it already falls on `weekday`. `None` only when
/// the answer would lie past the last representable date.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let target = weekday.num_days_from_sunday();
    let current = date.weekday().num_days_from_sunday();
    let ahead = (7 + target - current) % 7;
    date.checked_add_days(Days::new(u64::from(ahead)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_covers_every_weekday() {
        for index in 0..7u8 {
            let day = weekday_from_index(index).unwrap();
            assert_eq!(weekday_index(day), index);
            assert_eq!(abbreviation(day), WEEKDAY_ABBREVIATIONS[index as usize]);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(weekday_from_index(7), Err(PatternError::InvalidWeekday(7)));
        assert_eq!(
            weekday_from_index(255),
            Err(PatternError::InvalidWeekday(255))
        );
    }

    #[test]
    fn sunday_is_index_zero() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
        assert_eq!(abbreviation(Weekday::Sat), "Sat");
    }
}
