//! Literal expression node.

use super::expression::Renderable;
use crate::compile::{ImplicitParameterBinding, ParameterRegistry, RenderingContext};
use crate::types::ValueType;
use crate::value::{IntoValue, Value};

/// A constant value in an expression tree.
///
/// A literal is never inlined into the query text. Rendering generates a
/// fresh parameter name, registers an [`ImplicitParameterBinding`] for the
/// value and emits the placeholder.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{LiteralExpr, Renderable, ValueType};
///
/// assert_eq!(LiteralExpr::new("A").value_type(), Some(ValueType::String));
/// assert_eq!(LiteralExpr::new(Option::<i32>::None).value_type(), None);
/// assert_eq!(
///     LiteralExpr::typed(ValueType::Int, Option::<i32>::None).value_type(),
///     Some(ValueType::Int)
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
	value: Value,
	value_type: Option<ValueType>,
}

impl LiteralExpr {
	/// Create a literal typed from the runtime type of `value`.
	///
	/// A null value has no runtime type, so the literal's type is unknown.
	pub fn new<V>(value: V) -> Self
	where
		V: IntoValue,
	{
		let value = value.into_value();
		let value_type = value.runtime_type();
		Self { value, value_type }
	}

	/// Create a literal with an explicit type.
	pub fn typed<T, V>(value_type: T, value: V) -> Self
	where
		T: Into<Option<ValueType>>,
		V: IntoValue,
	{
		Self {
			value: value.into_value(),
			value_type: value_type.into(),
		}
	}

	/// The wrapped value
	pub fn value(&self) -> &Value {
		&self.value
	}
}

impl Renderable for LiteralExpr {
	fn value_type(&self) -> Option<ValueType> {
		self.value_type
	}

	fn register_parameters(&self, _registry: &mut ParameterRegistry) {}

	fn render(&self, context: &mut RenderingContext) -> String {
		let name = context.generate_parameter_name();
		let placeholder = context.placeholder(&name);
		context.register_implicit_binding(ImplicitParameterBinding::new(
			name,
			self.value.clone(),
			self.value_type,
		));
		placeholder
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_criteria_conf::CriteriaSettings;
	use rstest::rstest;
	use std::sync::Arc;

	#[rstest]
	#[case(LiteralExpr::new(1i32), Some(ValueType::Int))]
	#[case(LiteralExpr::new(1i64), Some(ValueType::BigInt))]
	#[case(LiteralExpr::new("x"), Some(ValueType::String))]
	#[case(LiteralExpr::new(true), Some(ValueType::Bool))]
	#[case(LiteralExpr::new(Option::<String>::None), None)]
	fn test_type_is_inferred_from_runtime_type(
		#[case] literal: LiteralExpr,
		#[case] expected: Option<ValueType>,
	) {
		assert_eq!(literal.value_type(), expected);
	}

	#[rstest]
	fn test_render_registers_binding() {
		let mut context = RenderingContext::new(Arc::new(CriteriaSettings::default()));
		let literal = LiteralExpr::new(42i32);

		let text = literal.render(&mut context);

		assert_eq!(text, ":param0");
		let bindings = context.implicit_bindings();
		assert_eq!(bindings.len(), 1);
		assert_eq!(bindings[0].name(), "param0");
		assert_eq!(bindings[0].value(), &Value::Int(Some(42)));
		assert_eq!(bindings[0].value_type(), Some(ValueType::Int));
	}

	#[rstest]
	fn test_rendering_twice_uses_fresh_names() {
		let mut context = RenderingContext::new(Arc::new(CriteriaSettings::default()));
		let literal = LiteralExpr::new("same");

		let first = literal.render(&mut context);
		let second = literal.render_projection(&mut context);

		assert_eq!(first, ":param0");
		assert_eq!(second, ":param1");
		assert_eq!(context.implicit_bindings().len(), 2);
	}

	#[rstest]
	fn test_registration_is_noop() {
		let mut registry = ParameterRegistry::new();
		LiteralExpr::new(1i32).register_parameters(&mut registry);
		assert!(registry.is_empty());
	}
}
