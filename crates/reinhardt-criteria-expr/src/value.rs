//! Values carried by literals and bound parameters.
//!
//! - [`Value`]: the tagged scalar
//! - [`IntoValue`]: conversion from Rust types into [`Value`]

mod core;

pub use self::core::Value;

use std::borrow::Cow;

/// Conversion into a [`Value`].
///
/// Implemented for the Rust primitives, strings, byte buffers, `Option`s of
/// those (where `None` becomes a typed null) and `Value` itself.
///
/// # Example
///
/// ```rust
/// use reinhardt_criteria_expr::{IntoValue, Value};
///
/// assert_eq!(42i32.into_value(), Value::Int(Some(42)));
/// assert_eq!(Option::<bool>::None.into_value(), Value::Bool(None));
/// ```
pub trait IntoValue {
	/// Convert `self` into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value_inline {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(Some(self))
				}
			}

			impl IntoValue for Option<$ty> {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					v.into_value()
				}
			}
		)*
	};
}

impl_into_value_inline!(
	bool => Bool,
	i8 => TinyInt,
	i16 => SmallInt,
	i32 => Int,
	i64 => BigInt,
	u8 => TinyUnsigned,
	u16 => SmallUnsigned,
	u32 => Unsigned,
	u64 => BigUnsigned,
	f32 => Float,
	f64 => Double,
	char => Char,
);

macro_rules! impl_into_value_boxed {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(Some(Box::new(self)))
				}
			}

			impl IntoValue for Option<$ty> {
				fn into_value(self) -> Value {
					Value::$variant(self.map(Box::new))
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					v.into_value()
				}
			}
		)*
	};
}

impl_into_value_boxed!(String => String, Vec<u8> => Bytes);

#[cfg(feature = "with-chrono")]
impl_into_value_boxed!(
	chrono::NaiveDate => ChronoDate,
	chrono::NaiveTime => ChronoTime,
	chrono::NaiveDateTime => ChronoDateTime,
	chrono::DateTime<chrono::Utc> => ChronoDateTimeUtc,
);

#[cfg(feature = "with-uuid")]
impl_into_value_boxed!(uuid::Uuid => Uuid);

#[cfg(feature = "with-json")]
impl_into_value_boxed!(serde_json::Value => Json);

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		Value::String(self.map(|s| Box::new(s.to_string())))
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		v.into_value()
	}
}

impl IntoValue for Cow<'_, str> {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.into_owned())))
	}
}

impl IntoValue for &[u8] {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self.to_vec())))
	}
}

#[cfg(test)]
mod tests;
