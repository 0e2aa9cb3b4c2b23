//! Predicate nodes: comparisons, junctions and null tests.

use std::fmt;

use super::expression::{Expression, Renderable};
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
	Equal,
	NotEqual,
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
	Like,
}

impl ComparisonOperator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::LessThan => "<",
			Self::LessThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Like => "like",
		}
	}
}

impl fmt::Display for ComparisonOperator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// `<left> <op> <right>`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
	left: Expression,
	operator: ComparisonOperator,
	right: Expression,
}

impl Comparison {
	pub fn new<L, R>(left: L, operator: ComparisonOperator, right: R) -> Self
	where
		L: Into<Expression>,
		R: Into<Expression>,
	{
		Self {
			left: left.into(),
			operator,
			right: right.into(),
		}
	}

	pub fn left(&self) -> &Expression {
		&self.left
	}

	pub fn operator(&self) -> ComparisonOperator {
		self.operator
	}

	pub fn right(&self) -> &Expression {
		&self.right
	}
}

impl Renderable for Comparison {
	fn value_type(&self) -> Option<ValueType> {
		Some(ValueType::Bool)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		self.left.register_parameters(registry);
		self.right.register_parameters(registry);
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let left = self.left.render(context);
		let right = self.right.render(context);
		format!("{left} {} {right}", self.operator)
	}
}

/// How a [`Junction`] combines its predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JunctionType {
	/// Every predicate must hold
	#[default]
	And,
	/// At least one predicate must hold
	Or,
}

impl JunctionType {
	fn keyword(self) -> &'static str {
		match self {
			Self::And => "and",
			Self::Or => "or",
		}
	}

	/// Text of a junction without predicates: always true for `and`, always
	/// false for `or`.
	fn empty_text(self) -> &'static str {
		match self {
			Self::And => "1=1",
			Self::Or => "0=1",
		}
	}
}

/// A list of predicates joined by `and` or `or`.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{ExprTrait, Junction, PathExpr};
///
/// let filter = Junction::all()
///     .add(PathExpr::new("p", "active").eq(true))
///     .add(Junction::any()
///         .add(PathExpr::new("p", "role").eq("admin"))
///         .add(PathExpr::new("p", "role").eq("owner")));
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Junction {
	junction_type: JunctionType,
	predicates: Vec<Expression>,
}

impl Junction {
	pub fn new(junction_type: JunctionType) -> Self {
		Self {
			junction_type,
			predicates: Vec::new(),
		}
	}

	/// Empty conjunction.
	pub fn all() -> Self {
		Self::new(JunctionType::And)
	}

	/// Empty disjunction.
	pub fn any() -> Self {
		Self::new(JunctionType::Or)
	}

	/// Append a predicate.
	#[must_use]
	// Builder method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add<P>(mut self, predicate: P) -> Self
	where
		P: Into<Expression>,
	{
		self.predicates.push(predicate.into());
		self
	}

	pub fn junction_type(&self) -> JunctionType {
		self.junction_type
	}

	pub fn predicates(&self) -> &[Expression] {
		&self.predicates
	}

	pub fn len(&self) -> usize {
		self.predicates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.predicates.is_empty()
	}

	pub(crate) fn push(&mut self, predicate: Expression) {
		self.predicates.push(predicate);
	}
}

impl Renderable for Junction {
	fn value_type(&self) -> Option<ValueType> {
		Some(ValueType::Bool)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		for predicate in &self.predicates {
			predicate.register_parameters(registry);
		}
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		match self.predicates.as_slice() {
			[] => self.junction_type.empty_text().to_string(),
			[single] => single.render(context),
			predicates => {
				let separator = format!(" {} ", self.junction_type.keyword());
				let rendered: Vec<String> = predicates
					.iter()
					.map(|predicate| predicate.render(context))
					.collect();
				format!("({})", rendered.join(&separator))
			}
		}
	}
}

/// `<expression> is [not] null`
#[derive(Debug, Clone, PartialEq)]
pub struct NullTest {
	expression: Expression,
	negated: bool,
}

impl NullTest {
	pub fn is_null<E>(expression: E) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			expression: expression.into(),
			negated: false,
		}
	}

	pub fn is_not_null<E>(expression: E) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			expression: expression.into(),
			negated: true,
		}
	}

	pub fn expression(&self) -> &Expression {
		&self.expression
	}

	pub fn is_negated(&self) -> bool {
		self.negated
	}
}

impl Renderable for NullTest {
	fn value_type(&self) -> Option<ValueType> {
		Some(ValueType::Bool)
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		self.expression.register_parameters(registry);
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let expression = self.expression.render(context);
		if self.negated {
			format!("{expression} is not null")
		} else {
			format!("{expression} is null")
		}
	}
}
