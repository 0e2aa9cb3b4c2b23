//! Simple CASE expression node.

use super::expression::{Expression, IntoCaseResult, Renderable};
use super::searched_case::supply_result_type;
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

/// `case <operand> when <v1> then <r1> ... [else <d>] end`
///
/// Typed the same way as [`SearchedCase`](super::SearchedCase).
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCase {
	operand: Expression,
	declared_type: Option<ValueType>,
	/// `(value, result)` pairs
	when_clauses: Vec<(Expression, Expression)>,
	otherwise_result: Option<Expression>,
	resolved_type: Option<ValueType>,
}

impl SimpleCase {
	pub fn new<E>(operand: E) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			operand: operand.into(),
			declared_type: None,
			when_clauses: Vec::new(),
			otherwise_result: None,
			resolved_type: None,
		}
	}

	pub fn typed<E>(operand: E, value_type: ValueType) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			declared_type: Some(value_type),
			..Self::new(operand)
		}
	}

	/// Add a `when <value> then <result>` branch.
	#[must_use]
	pub fn when<V, R>(mut self, value: V, result: R) -> Self
	where
		V: Into<Expression>,
		R: IntoCaseResult,
	{
		let result = result.into_case_result().into_expression(self.value_type());
		self.resolved_type = supply_result_type(self.resolved_type, &result);
		self.when_clauses.push((value.into(), result));
		self
	}

	/// Set the `else` result, replacing any earlier one.
	#[must_use]
	pub fn otherwise<R>(mut self, result: R) -> Self
	where
		R: IntoCaseResult,
	{
		let result = result.into_case_result().into_expression(self.value_type());
		self.resolved_type = supply_result_type(self.resolved_type, &result);
		self.otherwise_result = Some(result);
		self
	}

	pub fn operand(&self) -> &Expression {
		&self.operand
	}

	pub fn when_clauses(&self) -> &[(Expression, Expression)] {
		&self.when_clauses
	}

	pub fn otherwise_result(&self) -> Option<&Expression> {
		self.otherwise_result.as_ref()
	}
}

impl Renderable for SimpleCase {
	fn value_type(&self) -> Option<ValueType> {
		self.declared_type.or(self.resolved_type)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		self.operand.register_parameters(registry);
		for (value, result) in &self.when_clauses {
			value.register_parameters(registry);
			result.register_parameters(registry);
		}
		if let Some(otherwise) = &self.otherwise_result {
			otherwise.register_parameters(registry);
		}
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let mut text = format!("case {}", self.operand.render(context));
		for (value, result) in &self.when_clauses {
			let value = value.render(context);
			let result = result.render(context);
			text.push_str(&format!(" when {value} then {result}"));
		}
		if let Some(otherwise) = &self.otherwise_result {
			let otherwise = otherwise.render(context);
			text.push_str(&format!(" else {otherwise}"));
		}
		text.push_str(" end");
		text
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::{ParameterExpr, PathExpr};
	use reinhardt_criteria_conf::CriteriaSettings;
	use rstest::rstest;
	use std::sync::Arc;

	#[rstest]
	fn test_render() {
		let case = SimpleCase::new(PathExpr::new("o", "status"))
			.when("N", "new")
			.when("S", "shipped")
			.otherwise("other");
		let mut context = RenderingContext::new(Arc::new(CriteriaSettings::default()));

		assert_eq!(
			case.render(&mut context),
			"case o.status when :param0 then :param1 when :param2 then :param3 else :param4 end"
		);
		assert_eq!(context.implicit_bindings().len(), 5);
		assert_eq!(case.value_type(), Some(ValueType::String));
	}

	#[rstest]
	fn test_registration_walks_operand_first() {
		let operand = ParameterExpr::named("op", ValueType::Int);
		let value = ParameterExpr::named("v", ValueType::Int);
		let result = ParameterExpr::named("r", ValueType::String);
		let default = ParameterExpr::named("d", ValueType::String);

		let case = SimpleCase::new(operand.clone())
			.when(value.clone(), result.clone())
			.otherwise(default.clone());

		let mut registry = ParameterRegistry::new();
		case.register_parameters(&mut registry);
		assert_eq!(registry.parameters(), &[operand, value, result, default]);
	}

	#[rstest]
	fn test_typed() {
		let case = SimpleCase::typed(PathExpr::new("o", "kind"), ValueType::Int).when(1i32, "x");
		assert_eq!(case.value_type(), Some(ValueType::Int));
	}
}
