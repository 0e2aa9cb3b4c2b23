//! Searched CASE expression node.

use super::expression::{Expression, IntoCaseResult, Renderable};
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

/// One `when <condition> then <result>` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
	condition: Expression,
	result: Expression,
}

impl WhenClause {
	pub fn new(condition: Expression, result: Expression) -> Self {
		Self { condition, result }
	}

	pub fn condition(&self) -> &Expression {
		&self.condition
	}

	pub fn result(&self) -> &Expression {
		&self.result
	}
}

/// `case when <c1> then <r1> ... [else <d>] end`
///
/// Branches are kept in the order they were added. Plain values passed to
/// [`when`](SearchedCase::when) or [`otherwise`](SearchedCase::otherwise)
/// are wrapped into literals; a null value is typed with the case's value
/// type as known at that moment.
///
/// The case's value type is its declared type if one was given, otherwise
/// the first known type among its branch results, in the order they were
/// supplied.
///
/// ```sql
/// CASE
///     WHEN condition1 THEN result1
///     WHEN condition2 THEN result2
///     ELSE default_result
/// END
/// ```
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{ExprTrait, PathExpr, Renderable, SearchedCase, ValueType};
///
/// let grade = SearchedCase::new()
///     .when(PathExpr::new("s", "score").gte(90i32), "A")
///     .when(PathExpr::new("s", "score").gte(80i32), "B")
///     .otherwise("C");
///
/// assert_eq!(grade.when_clauses().len(), 2);
/// assert_eq!(grade.value_type(), Some(ValueType::String));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchedCase {
	declared_type: Option<ValueType>,
	when_clauses: Vec<WhenClause>,
	otherwise_result: Option<Expression>,
	/// First known type among the results supplied so far, replaced defaults included
	resolved_type: Option<ValueType>,
}

impl SearchedCase {
	/// Create an empty case whose type follows its branches.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty case with a declared value type.
	pub fn typed(value_type: ValueType) -> Self {
		Self {
			declared_type: Some(value_type),
			..Self::default()
		}
	}

	/// Add a `when <condition> then <result>` branch.
	///
	/// `result` may be a plain value or an expression.
	#[must_use]
	pub fn when<C, R>(self, condition: C, result: R) -> Self
	where
		C: Into<Expression>,
		R: IntoCaseResult,
	{
		let result = result.into_case_result().into_expression(self.value_type());
		self.when_expr(condition, result)
	}

	/// Add a branch whose result is an expression.
	#[must_use]
	pub fn when_expr<C, R>(mut self, condition: C, result: R) -> Self
	where
		C: Into<Expression>,
		R: Into<Expression>,
	{
		let result = result.into();
		self.resolved_type = supply_result_type(self.resolved_type, &result);
		self.when_clauses
			.push(WhenClause::new(condition.into(), result));
		self
	}

	/// Set the `else` result, replacing any earlier one.
	#[must_use]
	pub fn otherwise<R>(self, result: R) -> Self
	where
		R: IntoCaseResult,
	{
		let result = result.into_case_result().into_expression(self.value_type());
		self.otherwise_expr(result)
	}

	/// Set the `else` result to an expression, replacing any earlier one.
	#[must_use]
	pub fn otherwise_expr<R>(mut self, result: R) -> Self
	where
		R: Into<Expression>,
	{
		let result = result.into();
		self.resolved_type = supply_result_type(self.resolved_type, &result);
		self.otherwise_result = Some(result);
		self
	}

	pub fn when_clauses(&self) -> &[WhenClause] {
		&self.when_clauses
	}

	pub fn otherwise_result(&self) -> Option<&Expression> {
		self.otherwise_result.as_ref()
	}

	pub fn declared_type(&self) -> Option<ValueType> {
		self.declared_type
	}
}

/// Fold one supplied branch result into the type resolved so far.
///
/// The first known type sticks, even if the result that carried it is later
/// replaced.
pub(crate) fn supply_result_type(
	resolved: Option<ValueType>,
	result: &Expression,
) -> Option<ValueType> {
	resolved.or_else(|| result.value_type())
}

impl Renderable for SearchedCase {
	fn value_type(&self) -> Option<ValueType> {
		self.declared_type.or(self.resolved_type)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		for clause in &self.when_clauses {
			clause.condition.register_parameters(registry);
			clause.result.register_parameters(registry);
		}
		if let Some(otherwise) = &self.otherwise_result {
			otherwise.register_parameters(registry);
		}
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let mut text = String::from("case");
		for clause in &self.when_clauses {
			let condition = clause.condition.render(context);
			let result = clause.result.render(context);
			text.push_str(&format!(" when {condition} then {result}"));
		}
		if let Some(otherwise) = &self.otherwise_result {
			let otherwise = otherwise.render(context);
			text.push_str(&format!(" else {otherwise}"));
		}
		text.push_str(" end");
		text
	}
}
