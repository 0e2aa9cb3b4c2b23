//! Core Value enum definition.

use crate::types::ValueType;

/// A constant carried by a literal expression or bound to a query parameter.
///
/// Every variant wraps an `Option<T>`; `None` is a null of that variant.
/// Larger payloads are boxed to keep the enum at roughly one pointer width.
///
/// ## Example
///
/// ```rust
/// use reinhardt_criteria_expr::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// let string_val = Value::String(Some(Box::new("hello".to_string())));
///
/// assert!(null_int.is_null());
/// assert!(!int_val.is_null());
/// assert!(!string_val.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	// -------------------------------------------------------------------------
	// Primitive types (inline, not boxed)
	// -------------------------------------------------------------------------
	/// Boolean value
	Bool(Option<bool>),
	/// 8-bit signed integer
	TinyInt(Option<i8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 8-bit unsigned integer
	TinyUnsigned(Option<u8>),
	/// 16-bit unsigned integer
	SmallUnsigned(Option<u16>),
	/// 32-bit unsigned integer
	Unsigned(Option<u32>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),

	// -------------------------------------------------------------------------
	// Heap-allocated types (boxed for size optimization)
	// -------------------------------------------------------------------------
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),

	// -------------------------------------------------------------------------
	// Feature-gated types
	// -------------------------------------------------------------------------
	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveTime
	#[cfg(feature = "with-chrono")]
	ChronoTime(Option<Box<chrono::NaiveTime>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
	/// Chrono DateTime with UTC timezone
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeUtc(Option<Box<chrono::DateTime<chrono::Utc>>>),
	/// UUID value
	#[cfg(feature = "with-uuid")]
	Uuid(Option<Box<uuid::Uuid>>),
	/// JSON value
	#[cfg(feature = "with-json")]
	Json(Option<Box<serde_json::Value>>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_criteria_expr::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyInt(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::TinyUnsigned(v) => v.is_none(),
			Self::SmallUnsigned(v) => v.is_none(),
			Self::Unsigned(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-json")]
			Self::Json(v) => v.is_none(),
		}
	}

	/// The type tag of this variant, whether or not the value is null.
	#[must_use]
	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Bool(_) => ValueType::Bool,
			Self::TinyInt(_) => ValueType::TinyInt,
			Self::SmallInt(_) => ValueType::SmallInt,
			Self::Int(_) => ValueType::Int,
			Self::BigInt(_) => ValueType::BigInt,
			Self::TinyUnsigned(_) => ValueType::TinyUnsigned,
			Self::SmallUnsigned(_) => ValueType::SmallUnsigned,
			Self::Unsigned(_) => ValueType::Unsigned,
			Self::BigUnsigned(_) => ValueType::BigUnsigned,
			Self::Float(_) => ValueType::Float,
			Self::Double(_) => ValueType::Double,
			Self::Char(_) => ValueType::Char,
			Self::String(_) => ValueType::String,
			Self::Bytes(_) => ValueType::Bytes,
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(_) => ValueType::Date,
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(_) => ValueType::Time,
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(_) => ValueType::DateTime,
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(_) => ValueType::DateTimeUtc,
			#[cfg(feature = "with-uuid")]
			Self::Uuid(_) => ValueType::Uuid,
			#[cfg(feature = "with-json")]
			Self::Json(_) => ValueType::Json,
		}
	}

	/// The type of the value actually held, or `None` for a null.
	///
	/// A null carries no runtime value to inspect, so literal type inference
	/// treats it as unknown even though the variant names a type.
	///
	/// ```rust
	/// use reinhardt_criteria_expr::{Value, ValueType};
	///
	/// assert_eq!(Value::Int(Some(1)).runtime_type(), Some(ValueType::Int));
	/// assert_eq!(Value::Int(None).runtime_type(), None);
	/// ```
	#[must_use]
	pub fn runtime_type(&self) -> Option<ValueType> {
		if self.is_null() {
			None
		} else {
			Some(self.value_type())
		}
	}

	/// Render this value as a query-language literal.
	///
	/// Only used for diagnostics (see `CompiledQuery::inline_text`); compiled
	/// queries always carry values as bound parameters.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_criteria_expr::Value;
	///
	/// assert_eq!(Value::Int(Some(42)).to_query_literal(), "42");
	/// assert_eq!(Value::Int(None).to_query_literal(), "NULL");
	/// assert_eq!(
	///     Value::String(Some(Box::new("it's".to_string()))).to_query_literal(),
	///     "'it''s'"
	/// );
	/// ```
	#[must_use]
	pub fn to_query_literal(&self) -> String {
		if self.is_null() {
			return "NULL".to_string();
		}
		match self {
			Self::Bool(Some(true)) => "TRUE".to_string(),
			Self::Bool(Some(false)) => "FALSE".to_string(),
			Self::TinyInt(Some(v)) => v.to_string(),
			Self::SmallInt(Some(v)) => v.to_string(),
			Self::Int(Some(v)) => v.to_string(),
			Self::BigInt(Some(v)) => v.to_string(),
			Self::TinyUnsigned(Some(v)) => v.to_string(),
			Self::SmallUnsigned(Some(v)) => v.to_string(),
			Self::Unsigned(Some(v)) => v.to_string(),
			Self::BigUnsigned(Some(v)) => v.to_string(),
			Self::Float(Some(v)) => v.to_string(),
			Self::Double(Some(v)) => v.to_string(),
			Self::Char(Some(v)) => quote(&v.to_string()),
			Self::String(Some(v)) => quote(v),
			Self::Bytes(Some(v)) => {
				let hex: String = v.iter().map(|b| format!("{:02X}", b)).collect();
				format!("X'{}'", hex)
			}
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(Some(v)) => format!("'{}'", v.to_rfc3339()),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-json")]
			Self::Json(Some(v)) => quote(&v.to_string()),
			_ => "NULL".to_string(),
		}
	}
}

// Escape single quotes by doubling them
fn quote(s: &str) -> String {
	format!("'{}'", s.replace('\'', "''"))
}

impl Default for Value {
	/// Returns the default value, which is a null string.
	fn default() -> Self {
		Self::String(None)
	}
}
