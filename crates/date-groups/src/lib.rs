//! # date-groups
//!
//! Turns an organizer's date range and recurrence pattern into the ordered
//! list of options a scheduling poll votes on.
//!
//! Everything here is pure and deterministic: no I/O, no shared state. The
//! same `(pattern, range)` always yields the same groups in the same order,
//! which is what lets vote keys (group indices) stay stable between creating
//! a poll and displaying it later.
//!
//! ## Modules
//!
//! - [`weekday`] — weekday spans and "next Friday on or after" navigation
//! - [`pattern`] — the `DatePattern` recurrence rules and their JSON form
//! - [`range`] — inclusive `DateRange` and the width guard for callers
//! - [`generator`] — pattern + range → `DateGroup` list
//! - [`label`] — group labels and compact range text
//! - [`count`] — group counts and remainders without generating
//! - [`stored`] — persisted poll dates and rebuilding groups from them
//! - [`error`] — Error types

pub mod count;
pub mod error;
pub mod generator;
pub mod label;
pub mod pattern;
pub mod range;
pub mod stored;
pub mod weekday;

pub use count::{count_possible_groups, remaining_days};
pub use error::PatternError;
pub use generator::{generate_date_groups, DateGroup};
pub use label::{format_group_range, format_iso_group_range, group_label};
pub use pattern::{pattern_days, DatePattern, PatternParseError};
pub use range::{DateRange, RangeLimits};
pub use stored::{restore_groups, StoredDates};
pub use weekday::{next_weekday_on_or_after, weekday_span};
