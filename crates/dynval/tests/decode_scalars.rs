use dynval::{DynamicValue, decode_from_str};

#[test]
fn integer_in_i32_range_narrows_to_int32() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode_from_str("1")?, DynamicValue::Int32(1));
    assert_eq!(decode_from_str("-7")?, DynamicValue::Int32(-7));
    assert_eq!(decode_from_str("2147483647")?, DynamicValue::Int32(i32::MAX));
    assert_eq!(decode_from_str("-2147483648")?, DynamicValue::Int32(i32::MIN));
    Ok(())
}

#[test]
fn integer_beyond_i32_uses_int64() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        decode_from_str("2147483648")?,
        DynamicValue::Int64(2_147_483_648)
    );
    assert_eq!(
        decode_from_str("-2147483649")?,
        DynamicValue::Int64(-2_147_483_649)
    );
    assert_eq!(
        decode_from_str("99999999999")?,
        DynamicValue::Int64(99_999_999_999)
    );
    Ok(())
}

#[test]
fn fractional_number_is_float64() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode_from_str("1.5")?, DynamicValue::Float64(1.5));
    Ok(())
}

#[test]
fn unsigned_beyond_i64_is_float64() -> Result<(), Box<dyn std::error::Error>> {
    let v = decode_from_str("18446744073709551615")?;
    assert_eq!(v, DynamicValue::Float64(u64::MAX as f64));
    Ok(())
}

#[test]
fn bool_literals_map_to_bool() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode_from_str("true")?, DynamicValue::Bool(true));
    assert_eq!(decode_from_str("false")?, DynamicValue::Bool(false));
    Ok(())
}

#[test]
fn null_literal_maps_to_null() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode_from_str("null")?, DynamicValue::Null);
    Ok(())
}

// Top-level strings skip date inference; only nested strings get it.
#[test]
fn top_level_date_shaped_string_stays_string() -> Result<(), Box<dyn std::error::Error>> {
    let v = decode_from_str("\"2024-01-01T00:00:00+00:00\"")?;
    assert_eq!(
        v,
        DynamicValue::String("2024-01-01T00:00:00+00:00".to_string())
    );
    Ok(())
}

#[test]
fn malformed_stream_propagates_parse_error() {
    let err = decode_from_str("{ not json").unwrap_err();
    assert!(matches!(err, dynval::Error::Json(_)));
}

#[test]
fn decode_from_reader_matches_str() -> Result<(), Box<dyn std::error::Error>> {
    let doc = r#"{"a": 1}"#;
    let from_reader = dynval::decode_from_reader(doc.as_bytes())?;
    let from_str = decode_from_str(doc)?;
    assert_eq!(from_reader, from_str);
    Ok(())
}
