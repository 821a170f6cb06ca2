//! Tests for the pattern JSON representation, validation and shorthand parsing.

use chrono::Weekday;
use date_groups::{DatePattern, PatternError};
use serde_json::json;

fn from_json(value: serde_json::Value) -> Result<DatePattern, serde_json::Error> {
    serde_json::from_value(value)
}

#[test]
fn deserializes_every_variant() {
    let cases = [
        (json!({"type": "flexible"}), DatePattern::Flexible),
        (json!({"type": "weekend"}), DatePattern::Weekend),
        (
            json!({"type": "weekday-range", "startDay": 5, "endDay": 0}),
            DatePattern::WeekdayRange {
                start_day: Weekday::Fri,
                end_day: Weekday::Sun,
            },
        ),
        (json!({"type": "week"}), DatePattern::Week),
        (json!({"type": "two-weeks"}), DatePattern::TwoWeeks),
        (
            json!({"type": "long-weekend", "days": 4}),
            DatePattern::LongWeekend { days: 4 },
        ),
        (
            json!({"type": "custom", "days": 10}),
            DatePattern::Custom { days: 10 },
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(from_json(value.clone()).unwrap(), expected, "{}", value);
    }
}

#[test]
fn serializes_with_type_tag_and_camel_case_fields() {
    let pattern = DatePattern::weekday_range(6, 2).unwrap();
    assert_eq!(
        serde_json::to_value(pattern).unwrap(),
        json!({"type": "weekday-range", "startDay": 6, "endDay": 2})
    );
    assert_eq!(
        serde_json::to_value(DatePattern::TwoWeeks).unwrap(),
        json!({"type": "two-weeks"})
    );
    assert_eq!(
        serde_json::to_value(DatePattern::long_weekend(3).unwrap()).unwrap(),
        json!({"type": "long-weekend", "days": 3})
    );
}

#[test]
fn out_of_bounds_fields_are_rejected_on_deserialize() {
    let rejected = [
        json!({"type": "weekday-range", "startDay": 7, "endDay": 0}),
        json!({"type": "weekday-range", "startDay": 1, "endDay": 9}),
        json!({"type": "long-weekend", "days": 2}),
        json!({"type": "long-weekend", "days": 5}),
        json!({"type": "custom", "days": 0}),
        json!({"type": "custom", "days": 32}),
    ];

    for value in rejected {
        assert!(from_json(value.clone()).is_err(), "{} should be rejected", value);
    }
}

#[test]
fn unknown_or_incomplete_patterns_are_rejected() {
    assert!(from_json(json!({"type": "monthly"})).is_err());
    assert!(from_json(json!({"type": "weekday-range", "startDay": 1})).is_err());
    assert!(from_json(json!({"days": 3})).is_err());
}

#[test]
fn checked_constructors_report_the_bad_value() {
    assert_eq!(
        DatePattern::weekday_range(1, 7),
        Err(PatternError::InvalidWeekday(7))
    );
    assert_eq!(
        DatePattern::long_weekend(7),
        Err(PatternError::InvalidLongWeekend(7))
    );
    assert_eq!(DatePattern::custom(0), Err(PatternError::InvalidCustomDays(0)));
    assert_eq!(DatePattern::custom(1), Ok(DatePattern::Custom { days: 1 }));
}

#[test]
fn shorthand_parsing() {
    assert_eq!("flexible".parse::<DatePattern>().unwrap(), DatePattern::Flexible);
    assert_eq!("weekend".parse::<DatePattern>().unwrap(), DatePattern::Weekend);
    assert_eq!("two-weeks".parse::<DatePattern>().unwrap(), DatePattern::TwoWeeks);
    assert_eq!(
        "long-weekend:4".parse::<DatePattern>().unwrap(),
        DatePattern::LongWeekend { days: 4 }
    );
    assert_eq!(
        "custom:5".parse::<DatePattern>().unwrap(),
        DatePattern::Custom { days: 5 }
    );
    assert_eq!(
        "weekday-range:5-1".parse::<DatePattern>().unwrap(),
        DatePattern::weekday_range(5, 1).unwrap()
    );
    assert_eq!(
        r#"{"type":"custom","days":3}"#.parse::<DatePattern>().unwrap(),
        DatePattern::Custom { days: 3 }
    );
}

#[test]
fn shorthand_rejects_bad_input() {
    for input in [
        "",
        "monthly",
        "custom",
        "custom:abc",
        "custom:40",
        "long-weekend:2",
        "weekday-range:5",
        "weekday-range:5-8",
        "weekend:2",
        r#"{"type":"custom","days":0}"#,
    ] {
        assert!(
            input.parse::<DatePattern>().is_err(),
            "'{}' should not parse",
            input
        );
    }
}

#[test]
fn display_output_parses_back() {
    let patterns = [
        DatePattern::Flexible,
        DatePattern::Weekend,
        DatePattern::weekday_range(6, 2).unwrap(),
        DatePattern::Week,
        DatePattern::TwoWeeks,
        DatePattern::long_weekend(3).unwrap(),
        DatePattern::custom(14).unwrap(),
    ];

    for pattern in patterns {
        assert_eq!(pattern.to_string().parse::<DatePattern>().unwrap(), pattern);
    }
    assert_eq!(
        DatePattern::weekday_range(5, 0).unwrap().to_string(),
        "weekday-range:5-0"
    );
}
