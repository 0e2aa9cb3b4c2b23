//! The expression tree and its render contract.

use super::function::FunctionExpr;
use super::literal::LiteralExpr;
use super::parameter::ParameterExpr;
use super::path::PathExpr;
use super::predicate::{Comparison, Junction, NullTest};
use super::searched_case::SearchedCase;
use super::simple_case::SimpleCase;
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;
use crate::value::{IntoValue, Value};

/// Contract shared by every expression node.
///
/// Compilation calls [`register_parameters`](Renderable::register_parameters)
/// on the whole tree first, then [`render`](Renderable::render). Nodes
/// forward both calls to their children in the order the children appear in
/// the rendered text.
pub trait Renderable {
	/// Type of the value this node produces, if known.
	fn value_type(&self) -> Option<ValueType>;

	/// Add every explicit parameter of this subtree to `registry`.
	fn register_parameters(&self, registry: &mut ParameterRegistry);

	/// Render this node as part of a predicate or another expression.
	fn render(&self, context: &mut RenderingContext) -> String;

	/// Render this node as a select-list item.
	fn render_projection(&self, context: &mut RenderingContext) -> String {
		self.render(context)
	}
}

/// Any node of a criteria expression tree.
///
/// Composite variants are boxed so that the enum stays small.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	/// Constant value, rendered as a generated parameter
	Literal(LiteralExpr),
	/// User-declared parameter
	Parameter(ParameterExpr),
	/// Attribute of a query root
	Path(PathExpr),
	/// Function call
	Function(FunctionExpr),
	/// Binary comparison
	Comparison(Box<Comparison>),
	/// `and` / `or` over a list of predicates
	Junction(Junction),
	/// Negated predicate
	Not(Box<Expression>),
	/// `is null` / `is not null`
	NullTest(Box<NullTest>),
	/// `case when ... then ... end`
	SearchedCase(Box<SearchedCase>),
	/// `case <operand> when ... then ... end`
	SimpleCase(Box<SimpleCase>),
}

impl Renderable for Expression {
	fn value_type(&self) -> Option<ValueType> {
		match self {
			Self::Literal(e) => e.value_type(),
			Self::Parameter(e) => Renderable::value_type(e),
			Self::Path(e) => e.value_type(),
			Self::Function(e) => e.value_type(),
			Self::Comparison(e) => e.value_type(),
			Self::Junction(e) => e.value_type(),
			Self::Not(_) => Some(ValueType::Bool),
			Self::NullTest(e) => e.value_type(),
			Self::SearchedCase(e) => e.value_type(),
			Self::SimpleCase(e) => e.value_type(),
		}
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		match self {
			Self::Literal(e) => e.register_parameters(registry),
			Self::Parameter(e) => e.register_parameters(registry),
			Self::Path(e) => e.register_parameters(registry),
			Self::Function(e) => e.register_parameters(registry),
			Self::Comparison(e) => e.register_parameters(registry),
			Self::Junction(e) => e.register_parameters(registry),
			Self::Not(e) => e.register_parameters(registry),
			Self::NullTest(e) => e.register_parameters(registry),
			Self::SearchedCase(e) => e.register_parameters(registry),
			Self::SimpleCase(e) => e.register_parameters(registry),
		}
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		match self {
			Self::Literal(e) => e.render(context),
			Self::Parameter(e) => e.render(context),
			Self::Path(e) => e.render(context),
			Self::Function(e) => e.render(context),
			Self::Comparison(e) => e.render(context),
			Self::Junction(e) => e.render(context),
			Self::Not(e) => format!("not {}", e.render(context)),
			Self::NullTest(e) => e.render(context),
			Self::SearchedCase(e) => e.render(context),
			Self::SimpleCase(e) => e.render(context),
		}
	}

	fn render_projection(&self, context: &mut RenderingContext) -> String {
		match self {
			Self::Literal(e) => e.render_projection(context),
			Self::SearchedCase(e) => e.render_projection(context),
			Self::SimpleCase(e) => e.render_projection(context),
			other => other.render(context),
		}
	}
}

/// Result of a CASE branch as supplied by the caller.
///
/// Plain values are kept apart from expressions because the case node
/// decides how to type them: a null value takes the case's current type.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseResult {
	/// A plain value, wrapped into a literal by the case node
	Value(Value),
	/// An expression, used as is
	Expression(Expression),
}

impl CaseResult {
	/// Turn this result into an expression node.
	///
	/// `fallback` types a null value that carries no runtime type.
	pub(crate) fn into_expression(self, fallback: Option<ValueType>) -> Expression {
		match self {
			Self::Value(value) => {
				let literal = match value.runtime_type() {
					Some(_) => LiteralExpr::new(value),
					None => LiteralExpr::typed(fallback, value),
				};
				Expression::Literal(literal)
			}
			Self::Expression(expression) => expression,
		}
	}
}

/// Conversion into a [`CaseResult`].
pub trait IntoCaseResult {
	fn into_case_result(self) -> CaseResult;
}

impl IntoCaseResult for CaseResult {
	fn into_case_result(self) -> CaseResult {
		self
	}
}

macro_rules! impl_expression_node {
	($($ty:ty => $variant:ident($wrap:expr)),* $(,)?) => {
		$(
			impl From<$ty> for Expression {
				fn from(node: $ty) -> Self {
					Self::$variant($wrap(node))
				}
			}

			impl IntoCaseResult for $ty {
				fn into_case_result(self) -> CaseResult {
					CaseResult::Expression(self.into())
				}
			}
		)*
	};
}

impl_expression_node!(
	LiteralExpr => Literal(std::convert::identity),
	ParameterExpr => Parameter(std::convert::identity),
	PathExpr => Path(std::convert::identity),
	FunctionExpr => Function(std::convert::identity),
	Comparison => Comparison(Box::new),
	Junction => Junction(std::convert::identity),
	NullTest => NullTest(Box::new),
	SearchedCase => SearchedCase(Box::new),
	SimpleCase => SimpleCase(Box::new),
);

impl IntoCaseResult for Expression {
	fn into_case_result(self) -> CaseResult {
		CaseResult::Expression(self)
	}
}

macro_rules! impl_value_conversions {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Expression {
				fn from(value: $ty) -> Self {
					Self::Literal(LiteralExpr::new(value))
				}
			}

			impl IntoCaseResult for $ty {
				fn into_case_result(self) -> CaseResult {
					CaseResult::Value(self.into_value())
				}
			}
		)*
	};
}

impl_value_conversions!(
	Value,
	bool,
	i8,
	i16,
	i32,
	i64,
	u8,
	u16,
	u32,
	u64,
	f32,
	f64,
	char,
	String,
	&str,
	Vec<u8>,
	Option<bool>,
	Option<i8>,
	Option<i16>,
	Option<i32>,
	Option<i64>,
	Option<u8>,
	Option<u16>,
	Option<u32>,
	Option<u64>,
	Option<f32>,
	Option<f64>,
	Option<char>,
	Option<String>,
	Option<&str>,
	Option<Vec<u8>>,
);

#[cfg(feature = "with-chrono")]
impl_value_conversions!(
	chrono::NaiveDate,
	chrono::NaiveTime,
	chrono::NaiveDateTime,
	chrono::DateTime<chrono::Utc>,
	Option<chrono::NaiveDate>,
	Option<chrono::NaiveTime>,
	Option<chrono::NaiveDateTime>,
	Option<chrono::DateTime<chrono::Utc>>,
);

#[cfg(feature = "with-uuid")]
impl_value_conversions!(uuid::Uuid, Option<uuid::Uuid>);

#[cfg(feature = "with-json")]
impl_value_conversions!(serde_json::Value, Option<serde_json::Value>);
