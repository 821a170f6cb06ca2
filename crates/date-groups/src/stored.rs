//! The `(pattern, dates)` pair a poll persists, and how groups are rebuilt
//! from it.
//!
//! Flexible polls store a flat list of ISO dates; pattern polls store one
//! inner list per generated group. Vote keys follow the same split: the ISO
//! date itself for flat polls, the zero-based group index for grouped ones.
//! Group order is therefore part of the contract.

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};
use crate::generator::DateGroup;
use crate::pattern::{pattern_days, DatePattern, Layout};
use crate::range::parse_iso_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredDates {
    /// One ISO date per option.
    Flat(Vec<String>),
    /// One ordered list of ISO dates per option.
    Grouped(Vec<Vec<String>>),
}

impl StoredDates {
    /// Flatten freshly generated groups into their persisted form.
    pub fn from_groups(pattern: &DatePattern, groups: &[DateGroup]) -> Self {
        match pattern.layout() {
            Layout::Daily => StoredDates::Flat(
                groups
                    .iter()
                    .flat_map(|group| group.dates.iter().cloned())
                    .collect(),
            ),
            Layout::Weekly { .. } | Layout::Chunked { .. } => {
                StoredDates::Grouped(groups.iter().map(|group| group.dates.clone()).collect())
            }
        }
    }

    /// Number of voting options.
    pub fn len(&self) -> usize {
        match self {
            StoredDates::Flat(dates) => dates.len(),
            StoredDates::Grouped(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys votes are recorded under, one per option, in option order.
    pub fn option_keys(&self) -> Vec<String> {
        match self {
            StoredDates::Flat(dates) => dates.clone(),
            StoredDates::Grouped(groups) => (0..groups.len()).map(|i| i.to_string()).collect(),
        }
    }
}

/// Rebuild display groups for a stored poll.
///
/// Labels come from `(pattern, index)` and ranges from the stored dates, so
/// the result matches what was shown when the poll was created. Flexible polls
/// must be stored flat and every other pattern grouped; each stored group must
/// be a run of consecutive days exactly `pattern_days(pattern)` long.
///
/// # Errors
/// Returns `PatternError::InvalidDate` for a stored date that does not parse,
/// `PatternError::EmptyGroup` for a stored group with no dates,
/// `PatternError::StoredShapeMismatch` when flat/grouped storage does not fit
/// the pattern, or `PatternError::MalformedGroup` for a group that is out of
/// order, has gaps or has the wrong length.
pub fn restore_groups(pattern: &DatePattern, stored: &StoredDates) -> Result<Vec<DateGroup>> {
    if stored.is_empty() {
        return Ok(Vec::new());
    }

    match (pattern.layout(), stored) {
        (Layout::Daily, StoredDates::Flat(dates)) => dates
            .iter()
            .enumerate()
            .map(|(i, date)| restore_one(pattern, i, std::slice::from_ref(date)))
            .collect(),
        (Layout::Weekly { .. } | Layout::Chunked { .. }, StoredDates::Grouped(groups)) => groups
            .iter()
            .enumerate()
            .map(|(i, dates)| restore_one(pattern, i, dates))
            .collect(),
        (Layout::Daily, StoredDates::Grouped(_))
        | (Layout::Weekly { .. } | Layout::Chunked { .. }, StoredDates::Flat(_)) => {
            Err(PatternError::StoredShapeMismatch(pattern.to_string()))
        }
    }
}

fn restore_one(pattern: &DatePattern, position: usize, dates: &[String]) -> Result<DateGroup> {
    if dates.is_empty() {
        return Err(PatternError::EmptyGroup(position));
    }
    let days = dates
        .iter()
        .map(|date| parse_iso_date(date))
        .collect::<Result<Vec<_>>>()?;

    let contiguous = days.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1]));
    if !contiguous || days.len() != pattern_days(pattern) as usize {
        return Err(PatternError::MalformedGroup(position));
    }

    Ok(DateGroup::build(pattern, position + 1, &days))
}
