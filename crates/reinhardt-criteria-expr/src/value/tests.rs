//! Tests for the value module.

use super::{IntoValue, Value};
use crate::types::ValueType;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn test_value_is_null() {
	assert!(Value::Int(None).is_null());
	assert!(Value::String(None).is_null());
	assert!(Value::Bytes(None).is_null());

	assert!(!Value::Int(Some(42)).is_null());
	assert!(!Value::String(Some(Box::new("hello".to_string()))).is_null());
}

#[rstest]
fn test_value_default_is_null_string() {
	let default = Value::default();
	assert_eq!(default, Value::String(None));
	assert!(default.is_null());
}

#[rstest]
#[case::bool(true.into_value(), ValueType::Bool)]
#[case::i8(1i8.into_value(), ValueType::TinyInt)]
#[case::i64(1i64.into_value(), ValueType::BigInt)]
#[case::u32(1u32.into_value(), ValueType::Unsigned)]
#[case::f64(1.5f64.into_value(), ValueType::Double)]
#[case::str("a".into_value(), ValueType::String)]
#[case::bytes(vec![1u8].into_value(), ValueType::Bytes)]
fn test_runtime_type_of_non_null(#[case] value: Value, #[case] expected: ValueType) {
	assert_eq!(value.runtime_type(), Some(expected));
	assert_eq!(value.value_type(), expected);
}

#[rstest]
fn test_runtime_type_of_null_is_unknown() {
	let null: Value = Option::<String>::None.into_value();
	assert_eq!(null.runtime_type(), None);
	assert_eq!(null.value_type(), ValueType::String);
}

#[rstest]
fn test_option_into_value() {
	assert_eq!(Some(7i32).into_value(), Value::Int(Some(7)));
	assert_eq!(Option::<char>::None.into_value(), Value::Char(None));
	assert_eq!(Some("x").into_value(), Value::String(Some(Box::new("x".to_string()))));
}

#[rstest]
fn test_cow_and_slice_into_value() {
	use std::borrow::Cow;

	let borrowed: Cow<'_, str> = Cow::Borrowed("hello");
	assert_eq!(
		borrowed.into_value(),
		Value::String(Some(Box::new("hello".to_string())))
	);

	let slice: &[u8] = &[5, 6, 7];
	assert_eq!(slice.into_value(), Value::Bytes(Some(Box::new(vec![5, 6, 7]))));
}

#[rstest]
#[case::int(Value::Int(Some(42)), "42")]
#[case::bool(Value::Bool(Some(false)), "FALSE")]
#[case::null(Value::Double(None), "NULL")]
#[case::quote(Value::String(Some(Box::new("O'Brien".to_string()))), "'O''Brien'")]
#[case::char(Value::Char(Some('\'')), "''''")]
#[case::bytes(Value::Bytes(Some(Box::new(vec![0xAB, 0x01]))), "X'AB01'")]
fn test_to_query_literal(#[case] value: Value, #[case] expected: &str) {
	assert_eq!(value.to_query_literal(), expected);
}
