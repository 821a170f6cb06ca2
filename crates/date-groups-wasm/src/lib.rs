//! WASM bindings for date-groups.
//!
//! Exposes group generation, labelling, counting and range formatting to the
//! poll UI via `wasm-bindgen`. Patterns, groups and stored dates cross the
//! boundary as JSON strings; dates as `YYYY-MM-DD` strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p date-groups-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/date-groups-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/date_groups_wasm.wasm
//! ```

use date_groups::{DatePattern, DateRange, RangeLimits, StoredDates};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out, errors as plain strings
// ---------------------------------------------------------------------------

fn parse_pattern(json: &str) -> Result<DatePattern, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid pattern JSON: {}", e))
}

fn parse_range(start: &str, end: &str, max_range_days: Option<u32>) -> Result<DateRange, String> {
    let range = DateRange::parse(start, end).map_err(|e| e.to_string())?;
    let limits = max_range_days
        .map(|max_days| RangeLimits { max_days })
        .unwrap_or_default();
    range.check_limits(&limits).map_err(|e| e.to_string())?;
    Ok(range)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn generate(
    pattern_json: &str,
    start: &str,
    end: &str,
    max_range_days: Option<u32>,
) -> Result<String, String> {
    let pattern = parse_pattern(pattern_json)?;
    let range = parse_range(start, end, max_range_days)?;
    to_json(&date_groups::generate_date_groups(&pattern, &range))
}

fn count(pattern_json: &str, start: &str, end: &str) -> Result<usize, String> {
    let pattern = parse_pattern(pattern_json)?;
    let range = DateRange::parse(start, end).map_err(|e| e.to_string())?;
    Ok(date_groups::count_possible_groups(&pattern, &range))
}

fn remaining(pattern_json: &str, start: &str, end: &str) -> Result<u32, String> {
    let pattern = parse_pattern(pattern_json)?;
    let range = DateRange::parse(start, end).map_err(|e| e.to_string())?;
    Ok(date_groups::remaining_days(&pattern, &range))
}

fn format_range(dates_json: &str) -> Result<String, String> {
    let dates: Vec<String> =
        serde_json::from_str(dates_json).map_err(|e| format!("Invalid dates JSON: {}", e))?;
    date_groups::format_iso_group_range(&dates).map_err(|e| e.to_string())
}

fn label(pattern_json: &str, index: usize) -> Result<String, String> {
    if index == 0 {
        return Err("Group index is 1-based; got 0".to_string());
    }
    let pattern = parse_pattern(pattern_json)?;
    Ok(date_groups::group_label(&pattern, index))
}

fn span(start_day: u8, end_day: u8) -> Result<u32, String> {
    let start = date_groups::weekday::weekday_from_index(start_day).map_err(|e| e.to_string())?;
    let end = date_groups::weekday::weekday_from_index(end_day).map_err(|e| e.to_string())?;
    Ok(date_groups::weekday_span(start, end))
}

fn restore(pattern_json: &str, stored_json: &str) -> Result<String, String> {
    let pattern = parse_pattern(pattern_json)?;
    let stored: StoredDates = serde_json::from_str(stored_json)
        .map_err(|e| format!("Invalid stored dates JSON: {}", e))?;
    let groups = date_groups::restore_groups(&pattern, &stored).map_err(|e| e.to_string())?;
    to_json(&groups)
}

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the voting options for a pattern over an inclusive date range.
///
/// `pattern_json` is a pattern object such as
/// `{"type":"weekday-range","startDay":5,"endDay":0}`. Returns a JSON array of
/// `{dates, label, range}` objects. Ranges wider than `max_range_days`
/// (default 731) are rejected.
#[wasm_bindgen(js_name = "generateDateGroups")]
pub fn generate_date_groups(
    pattern_json: &str,
    start: &str,
    end: &str,
    max_range_days: Option<u32>,
) -> Result<String, JsValue> {
    generate(pattern_json, start, end, max_range_days).map_err(js_err)
}

/// Number of options the pattern yields over the range.
#[wasm_bindgen(js_name = "countPossibleGroups")]
pub fn count_possible_groups(pattern_json: &str, start: &str, end: &str) -> Result<usize, JsValue> {
    count(pattern_json, start, end).map_err(js_err)
}

/// Days left after the last complete chunk (0 for weekday-aligned patterns).
#[wasm_bindgen(js_name = "getRemainingDays")]
pub fn get_remaining_days(pattern_json: &str, start: &str, end: &str) -> Result<u32, JsValue> {
    remaining(pattern_json, start, end).map_err(js_err)
}

/// Nominal length in days of one option.
#[wasm_bindgen(js_name = "getPatternDays")]
pub fn get_pattern_days(pattern_json: &str) -> Result<u32, JsValue> {
    parse_pattern(pattern_json)
        .map(|pattern| date_groups::pattern_days(&pattern))
        .map_err(js_err)
}

/// Label of the option at 1-based `index`, e.g. "Weekend 2".
#[wasm_bindgen(js_name = "getGroupLabel")]
pub fn get_group_label(pattern_json: &str, index: usize) -> Result<String, JsValue> {
    label(pattern_json, index).map_err(js_err)
}

/// Compact range text for a JSON array of ISO dates, e.g. "Jan 28 - Feb 3".
#[wasm_bindgen(js_name = "formatGroupRange")]
pub fn format_group_range(dates_json: &str) -> Result<String, JsValue> {
    format_range(dates_json).map_err(js_err)
}

/// Days from `start_day` to `end_day` inclusive (0=Sunday), wrapping the week.
#[wasm_bindgen(js_name = "weekdaySpan")]
pub fn weekday_span(start_day: u8, end_day: u8) -> Result<u32, JsValue> {
    span(start_day, end_day).map_err(js_err)
}

/// Rebuild `{dates, label, range}` groups from a poll's stored dates JSON.
#[wasm_bindgen(js_name = "restoreGroups")]
pub fn restore_groups(pattern_json: &str, stored_json: &str) -> Result<String, JsValue> {
    restore(pattern_json, stored_json).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRI_SUN: &str = r#"{"type":"weekday-range","startDay":5,"endDay":0}"#;

    #[test]
    fn generate_returns_group_json() {
        let json = generate(FRI_SUN, "2025-01-29", "2025-02-28", None).unwrap();
        let groups: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(groups.as_array().unwrap().len(), 4);
        assert_eq!(groups[0]["label"], "Fri-Sun 1");
        assert_eq!(
            groups[0]["dates"],
            serde_json::json!(["2025-01-31", "2025-02-01", "2025-02-02"])
        );
    }

    #[test]
    fn generate_applies_range_limit() {
        let err = generate(FRI_SUN, "2025-01-01", "2025-12-31", Some(90)).unwrap_err();
        assert!(err.contains("limit is 90"), "{}", err);
    }

    #[test]
    fn invalid_pattern_json_is_reported() {
        let err = parse_pattern(r#"{"type":"custom","days":0}"#).unwrap_err();
        assert!(err.starts_with("Invalid pattern JSON"), "{}", err);
    }

    #[test]
    fn counts_and_remainders() {
        let custom = r#"{"type":"custom","days":5}"#;
        assert_eq!(count(custom, "2025-01-01", "2025-01-31").unwrap(), 6);
        assert_eq!(remaining(custom, "2025-01-01", "2025-01-31").unwrap(), 1);
        assert_eq!(remaining(FRI_SUN, "2025-01-01", "2025-01-31").unwrap(), 0);
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(label(r#"{"type":"weekend"}"#, 2).unwrap(), "Weekend 2");
        assert!(label(r#"{"type":"weekend"}"#, 0).is_err());
    }

    #[test]
    fn span_and_format_helpers() {
        assert_eq!(span(5, 1).unwrap(), 4);
        assert!(span(7, 1).is_err());
        assert_eq!(
            format_range(r#"["2024-12-28","2025-01-04"]"#).unwrap(),
            "Dec 28 - Jan 4"
        );
    }

    #[test]
    fn restore_rebuilds_labels() {
        let json = restore(r#"{"type":"weekend"}"#, r#"[["2025-01-25","2025-01-26"]]"#).unwrap();
        let groups: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(groups[0]["label"], "Weekend 1");
        assert_eq!(groups[0]["range"], "Jan 25 - 26");
    }
}
