//! Explicit parameter expression node.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::expression::Renderable;
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

static NEXT_ANONYMOUS_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of an explicit parameter.
///
/// Two parameter nodes with the same key are the same parameter: they are
/// registered once and bound once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterKey {
	/// `:name`
	Named(String),
	/// `?N`
	Positional(u32),
	/// Unnamed parameter, identified by a process-wide id
	Anonymous(u64),
}

impl fmt::Display for ParameterKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(name) => f.write_str(name),
			Self::Positional(position) => write!(f, "?{position}"),
			Self::Anonymous(id) => write!(f, "<unnamed #{id}>"),
		}
	}
}

/// A parameter declared by the caller and bound after compilation.
///
/// This is the only node that adds itself to the [`ParameterRegistry`].
/// Unnamed parameters receive a generated name when rendered; cloning one
/// keeps its identity, so every clone renders under the same name.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{ParameterExpr, ValueType};
///
/// let age = ParameterExpr::named("age", ValueType::Int);
/// assert_eq!(age.name(), Some("age"));
/// assert_eq!(age.value_type(), ValueType::Int);
///
/// let first = ParameterExpr::positional(1, ValueType::String);
/// assert_eq!(first.position(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterExpr {
	key: ParameterKey,
	value_type: ValueType,
}

impl ParameterExpr {
	pub fn named(name: impl Into<String>, value_type: ValueType) -> Self {
		Self {
			key: ParameterKey::Named(name.into()),
			value_type,
		}
	}

	pub fn positional(position: u32, value_type: ValueType) -> Self {
		Self {
			key: ParameterKey::Positional(position),
			value_type,
		}
	}

	pub fn unnamed(value_type: ValueType) -> Self {
		let id = NEXT_ANONYMOUS_ID.fetch_add(1, Ordering::Relaxed);
		Self {
			key: ParameterKey::Anonymous(id),
			value_type,
		}
	}

	pub fn name(&self) -> Option<&str> {
		match &self.key {
			ParameterKey::Named(name) => Some(name),
			_ => None,
		}
	}

	pub fn position(&self) -> Option<u32> {
		match self.key {
			ParameterKey::Positional(position) => Some(position),
			_ => None,
		}
	}

	pub fn key(&self) -> &ParameterKey {
		&self.key
	}

	/// Declared type; bound values must match it
	pub fn value_type(&self) -> ValueType {
		self.value_type
	}
}

impl Renderable for ParameterExpr {
	fn value_type(&self) -> Option<ValueType> {
		Some(self.value_type)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		registry.register(self);
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let name = context.register_explicit_parameter(self);
		match self.key {
			ParameterKey::Positional(position) => format!("?{position}"),
			_ => context.placeholder(&name),
		}
	}
}
