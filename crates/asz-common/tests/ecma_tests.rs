//! Tests for the ECMAScript conversion algorithms.

use crate::ecma::*;

#[test]
fn test_to_int32_truncates_toward_zero() {
    assert_eq!(to_int32(3.7), 3);
    assert_eq!(to_int32(-3.7), -3);
    assert_eq!(to_int32(1.5), 1);
}

#[test]
fn test_to_int32_wraps_modulo_two_32() {
    assert_eq!(to_int32(2_147_483_648.0), -2_147_483_648);
    assert_eq!(to_int32(4_294_967_295.0), -1);
    assert_eq!(to_int32(4_294_967_296.0), 0);
    assert_eq!(to_int32(-2_147_483_649.0), 2_147_483_647);
    assert_eq!(to_int32(1e20), 1_661_992_960);
}

#[test]
fn test_to_int32_non_finite_is_zero() {
    assert_eq!(to_int32(f64::NAN), 0);
    assert_eq!(to_int32(f64::INFINITY), 0);
    assert_eq!(to_int32(f64::NEG_INFINITY), 0);
}

#[test]
fn test_to_uint32_wraps_negative_values() {
    assert_eq!(to_uint32(-1.0), 4_294_967_295);
    assert_eq!(to_uint32(-1.5), 4_294_967_295);
    assert_eq!(to_uint32(4_294_967_296.0), 0);
    assert_eq!(to_uint32(4_294_967_297.9), 1);
    assert_eq!(to_uint32(f64::NAN), 0);
}

#[test]
fn test_int32_range_is_total() {
    for value in [
        0.0,
        -0.5,
        123_456_789_012.3,
        -9e15,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
    ] {
        let wrapped = i64::from(to_int32(value));
        assert!((i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&wrapped));
        let unsigned = i64::from(to_uint32(value));
        assert!((0..=i64::from(u32::MAX)).contains(&unsigned));
    }
}

#[test]
fn test_to_integer() {
    assert_eq!(to_integer(f64::NAN), 0.0);
    assert_eq!(to_integer(-2.9), -2.0);
    assert_eq!(to_integer(2.9), 2.0);
    assert!(to_integer(f64::INFINITY).is_infinite());
}

#[test]
fn test_to_boolean() {
    assert!(!number_to_boolean(0.0));
    assert!(!number_to_boolean(-0.0));
    assert!(!number_to_boolean(f64::NAN));
    assert!(number_to_boolean(0.1));
    assert!(!string_to_boolean(""));
    assert!(string_to_boolean("false"));
}

#[test]
fn test_string_to_number() {
    assert_eq!(string_to_number(""), 0.0);
    assert_eq!(string_to_number("   "), 0.0);
    assert_eq!(string_to_number(" 42 "), 42.0);
    assert_eq!(string_to_number("-1.5e2"), -150.0);
    assert_eq!(string_to_number("0x1F"), 31.0);
    assert_eq!(string_to_number("Infinity"), f64::INFINITY);
    assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    assert!(string_to_number("inf").is_nan());
    assert!(string_to_number("nan").is_nan());
    assert!(string_to_number("12px").is_nan());
    assert!(string_to_number("0x").is_nan());
}

#[test]
fn test_number_to_string() {
    assert_eq!(number_to_string(3.0), "3");
    assert_eq!(number_to_string(3.7), "3.7");
    assert_eq!(number_to_string(-0.0), "0");
    assert_eq!(number_to_string(-12.25), "-12.25");
    assert_eq!(number_to_string(100.0), "100");
    assert_eq!(number_to_string(0.000001), "0.000001");
    assert_eq!(number_to_string(1e-7), "1e-7");
    assert_eq!(number_to_string(1e21), "1e+21");
    assert_eq!(number_to_string(1.5e300), "1.5e+300");
    assert_eq!(number_to_string(4_294_967_295.0), "4294967295");
    assert_eq!(number_to_string(f64::NAN), "NaN");
    assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_pooled_value_display_uses_ecma_number_text() {
    use crate::PooledValue;
    assert_eq!(PooledValue::Double(3.7).to_string(), "3.7");
    assert_eq!(PooledValue::Double(3.0).to_string(), "3");
    assert_eq!(PooledValue::Int(-4).to_string(), "-4");
    assert_eq!(PooledValue::Null.to_string(), "null");
    assert!(PooledValue::Double(f64::NAN).is_nan());
    assert!(!PooledValue::Int(0).is_nan());
    assert_eq!(PooledValue::from_bool(true).as_bool(), Some(true));
}

#[test]
fn test_pooled_value_conversions() {
    use crate::PooledValue;
    assert_eq!(PooledValue::Utf8("12".into()).to_number(), 12.0);
    assert_eq!(PooledValue::True.to_number(), 1.0);
    assert_eq!(PooledValue::Null.to_number(), 0.0);
    assert!(PooledValue::Undefined.to_number().is_nan());
    assert!(PooledValue::Utf8("0".into()).to_boolean());
    assert!(!PooledValue::Utf8(String::new()).to_boolean());
    assert!(!PooledValue::Double(f64::NAN).to_boolean());
    assert!(PooledValue::UInt(7).to_boolean());
    assert!(!PooledValue::Null.to_boolean());
}
