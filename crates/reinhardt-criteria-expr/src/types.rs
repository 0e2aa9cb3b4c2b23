//! Value type tags.
//!
//! A [`ValueType`] is the Rust-side equivalent of the runtime class of a
//! value: literal expressions infer it from their value, explicit parameters
//! declare it, and prepared queries check bound values against it.

use std::fmt;

use crate::value::Value;

/// The type of an expression's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Bool,
	TinyInt,
	SmallInt,
	Int,
	BigInt,
	TinyUnsigned,
	SmallUnsigned,
	Unsigned,
	BigUnsigned,
	Float,
	Double,
	Char,
	String,
	Bytes,
	#[cfg(feature = "with-chrono")]
	Date,
	#[cfg(feature = "with-chrono")]
	Time,
	#[cfg(feature = "with-chrono")]
	DateTime,
	#[cfg(feature = "with-chrono")]
	DateTimeUtc,
	#[cfg(feature = "with-uuid")]
	Uuid,
	#[cfg(feature = "with-json")]
	Json,
}

impl ValueType {
	/// Returns the name of this type.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::TinyInt => "tinyint",
			Self::SmallInt => "smallint",
			Self::Int => "int",
			Self::BigInt => "bigint",
			Self::TinyUnsigned => "tinyint unsigned",
			Self::SmallUnsigned => "smallint unsigned",
			Self::Unsigned => "int unsigned",
			Self::BigUnsigned => "bigint unsigned",
			Self::Float => "float",
			Self::Double => "double",
			Self::Char => "char",
			Self::String => "string",
			Self::Bytes => "bytes",
			#[cfg(feature = "with-chrono")]
			Self::Date => "date",
			#[cfg(feature = "with-chrono")]
			Self::Time => "time",
			#[cfg(feature = "with-chrono")]
			Self::DateTime => "datetime",
			#[cfg(feature = "with-chrono")]
			Self::DateTimeUtc => "datetime utc",
			#[cfg(feature = "with-uuid")]
			Self::Uuid => "uuid",
			#[cfg(feature = "with-json")]
			Self::Json => "json",
		}
	}

	/// A null value of this type.
	///
	/// ```rust
	/// use reinhardt_criteria_expr::{Value, ValueType};
	///
	/// assert_eq!(ValueType::Int.null_value(), Value::Int(None));
	/// ```
	#[must_use]
	pub fn null_value(self) -> Value {
		match self {
			Self::Bool => Value::Bool(None),
			Self::TinyInt => Value::TinyInt(None),
			Self::SmallInt => Value::SmallInt(None),
			Self::Int => Value::Int(None),
			Self::BigInt => Value::BigInt(None),
			Self::TinyUnsigned => Value::TinyUnsigned(None),
			Self::SmallUnsigned => Value::SmallUnsigned(None),
			Self::Unsigned => Value::Unsigned(None),
			Self::BigUnsigned => Value::BigUnsigned(None),
			Self::Float => Value::Float(None),
			Self::Double => Value::Double(None),
			Self::Char => Value::Char(None),
			Self::String => Value::String(None),
			Self::Bytes => Value::Bytes(None),
			#[cfg(feature = "with-chrono")]
			Self::Date => Value::ChronoDate(None),
			#[cfg(feature = "with-chrono")]
			Self::Time => Value::ChronoTime(None),
			#[cfg(feature = "with-chrono")]
			Self::DateTime => Value::ChronoDateTime(None),
			#[cfg(feature = "with-chrono")]
			Self::DateTimeUtc => Value::ChronoDateTimeUtc(None),
			#[cfg(feature = "with-uuid")]
			Self::Uuid => Value::Uuid(None),
			#[cfg(feature = "with-json")]
			Self::Json => Value::Json(None),
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ValueType::Bool)]
	#[case(ValueType::Int)]
	#[case(ValueType::String)]
	#[case(ValueType::Bytes)]
	fn test_null_value_keeps_type(#[case] ty: ValueType) {
		let null = ty.null_value();
		assert!(null.is_null());
		assert_eq!(null.value_type(), ty);
		assert_eq!(null.runtime_type(), None);
	}

	#[rstest]
	fn test_display() {
		assert_eq!(ValueType::BigInt.to_string(), "bigint");
		assert_eq!(ValueType::String.to_string(), "string");
	}
}
