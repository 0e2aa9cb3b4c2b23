//! Attribute path expression node.

use super::expression::Renderable;
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

/// An attribute of a query root, rendered as `alias.attribute`.
///
/// Paths are usually obtained from [`Root::get`](crate::query::Root::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
	alias: String,
	attribute: String,
	value_type: Option<ValueType>,
}

impl PathExpr {
	pub fn new(alias: impl Into<String>, attribute: impl Into<String>) -> Self {
		Self {
			alias: alias.into(),
			attribute: attribute.into(),
			value_type: None,
		}
	}

	/// Declare the type of the attribute.
	#[must_use]
	pub fn with_type(mut self, value_type: ValueType) -> Self {
		self.value_type = Some(value_type);
		self
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	pub fn attribute(&self) -> &str {
		&self.attribute
	}
}

impl Renderable for PathExpr {
	fn value_type(&self) -> Option<ValueType> {
		self.value_type
	}

	fn register_parameters(&self, _registry: &mut ParameterRegistry) {}

	fn render(&self, _context: &mut RenderingContext) -> String {
		format!("{}.{}", self.alias, self.attribute)
	}
}
