use chrono::NaiveDate;
use dynval::normalize::normalize;
use dynval::{DynamicValue, decode_from_str};
use serde_json::json;

#[test]
fn offset_string_becomes_datetime_offset() {
    let v = normalize(json!("2024-01-01T00:00:00+00:00"));
    let DynamicValue::DateTimeOffset(dt) = v else {
        panic!("expected offset-aware date-time");
    };
    assert_eq!(dt.offset().local_minus_utc(), 0);
    assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn zulu_suffix_is_offset_aware() {
    let v = normalize(json!("2024-05-01T12:34:56Z"));
    let DynamicValue::DateTimeOffset(dt) = v else {
        panic!("expected offset-aware date-time");
    };
    assert_eq!(dt.offset().local_minus_utc(), 0);
}

#[test]
fn offsetless_string_becomes_datetime() {
    let v = normalize(json!("2024-01-01T00:00:00"));
    let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(v, DynamicValue::DateTime(expected));
}

#[test]
fn colonless_offset_is_recognized() {
    let v = normalize(json!("2024-01-15T10:30:00+0500"));
    let DynamicValue::DateTimeOffset(dt) = v else {
        panic!("expected offset-aware date-time");
    };
    assert_eq!(dt.offset().local_minus_utc(), 5 * 3600);
}

#[test]
fn space_separated_datetime_is_recognized() {
    let v = normalize(json!("2024-01-15 10:30:00"));
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    assert_eq!(v, DynamicValue::DateTime(expected));
}

#[test]
fn fractional_seconds_are_preserved() {
    let v = normalize(json!("2024-01-01T00:00:00.123Z"));
    let DynamicValue::DateTimeOffset(dt) = v else {
        panic!("expected offset-aware date-time");
    };
    assert_eq!(dt.timestamp_subsec_millis(), 123);
}

#[test]
fn plain_string_is_kept() {
    assert_eq!(
        normalize(json!("hello")),
        DynamicValue::String("hello".to_string())
    );
}

#[test]
fn date_only_string_is_kept() {
    assert_eq!(
        normalize(json!("2024-01-01")),
        DynamicValue::String("2024-01-01".to_string())
    );
}

#[test]
fn numeric_looking_string_is_kept() {
    assert_eq!(
        normalize(json!("20240101")),
        DynamicValue::String("20240101".to_string())
    );
}

// The same lexical string is a date nested one level down but a plain string
// at the top level.
#[test]
fn nested_strings_are_inferred_but_top_level_is_not()
-> Result<(), Box<dyn std::error::Error>> {
    let nested = decode_from_str(r#"{"ts": "2024-01-01T00:00:00+00:00"}"#)?;
    let DynamicValue::Map(map) = nested else {
        panic!("expected map");
    };
    assert!(matches!(
        map.get("ts"),
        Some(DynamicValue::DateTimeOffset(_))
    ));

    let top = decode_from_str("\"2024-01-01T00:00:00+00:00\"")?;
    assert!(matches!(top, DynamicValue::String(_)));
    Ok(())
}

#[test]
fn strings_inside_arrays_are_inferred() -> Result<(), Box<dyn std::error::Error>> {
    let v = decode_from_str(r#"["2024-01-01T00:00:00", "hello"]"#)?;
    let DynamicValue::Array(items) = v else {
        panic!("expected array");
    };
    assert!(matches!(items[0], DynamicValue::DateTime(_)));
    assert_eq!(items[1], DynamicValue::String("hello".to_string()));
    Ok(())
}
