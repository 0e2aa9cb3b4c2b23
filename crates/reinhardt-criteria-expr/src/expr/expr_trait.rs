//! Fluent predicate construction.

use super::expression::Expression;
use super::function::FunctionExpr;
use super::literal::LiteralExpr;
use super::parameter::ParameterExpr;
use super::path::PathExpr;
use super::predicate::{Comparison, ComparisonOperator, Junction, JunctionType, NullTest};
use super::searched_case::SearchedCase;
use super::simple_case::SimpleCase;

/// Operations that build predicates out of expressions.
///
/// Right-hand operands accept other nodes as well as plain values, which
/// become literals.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{ExprTrait, PathExpr};
///
/// let adult = PathExpr::new("p", "age").gte(18i32);
/// let named = PathExpr::new("p", "name").like("A%");
/// let filter = adult.and(named).and(PathExpr::new("p", "deleted").is_null());
/// ```
pub trait ExprTrait: Into<Expression> + Sized {
	fn compare<R>(self, operator: ComparisonOperator, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		Comparison::new(self, operator, right).into()
	}

	// Builder method, not PartialEq::eq
	#[allow(clippy::should_implement_trait)]
	fn eq<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::Equal, right)
	}

	// Builder method, not PartialEq::ne
	#[allow(clippy::should_implement_trait)]
	fn ne<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::NotEqual, right)
	}

	fn lt<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::LessThan, right)
	}

	fn lte<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::LessThanOrEqual, right)
	}

	fn gt<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::GreaterThan, right)
	}

	fn gte<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::GreaterThanOrEqual, right)
	}

	fn like<R>(self, pattern: R) -> Expression
	where
		R: Into<Expression>,
	{
		self.compare(ComparisonOperator::Like, pattern)
	}

	/// Conjunction; chained calls extend the same `and` list.
	fn and<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		join(self.into(), JunctionType::And, right.into())
	}

	/// Disjunction; chained calls extend the same `or` list.
	fn or<R>(self, right: R) -> Expression
	where
		R: Into<Expression>,
	{
		join(self.into(), JunctionType::Or, right.into())
	}

	// Builder method, not std::ops::Not
	#[allow(clippy::should_implement_trait)]
	fn not(self) -> Expression {
		Expression::Not(Box::new(self.into()))
	}

	fn is_null(self) -> Expression {
		NullTest::is_null(self).into()
	}

	fn is_not_null(self) -> Expression {
		NullTest::is_not_null(self).into()
	}
}

fn join(left: Expression, junction_type: JunctionType, right: Expression) -> Expression {
	match left {
		Expression::Junction(mut junction) if junction.junction_type() == junction_type => {
			junction.push(right);
			Expression::Junction(junction)
		}
		left => Junction::new(junction_type).add(left).add(right).into(),
	}
}

impl ExprTrait for Expression {}
impl ExprTrait for LiteralExpr {}
impl ExprTrait for ParameterExpr {}
impl ExprTrait for PathExpr {}
impl ExprTrait for FunctionExpr {}
impl ExprTrait for Junction {}
impl ExprTrait for SearchedCase {}
impl ExprTrait for SimpleCase {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_comparison_shape() {
		let expr = PathExpr::new("p", "age").gte(18i32);
		match expr {
			Expression::Comparison(comparison) => {
				assert_eq!(comparison.operator(), ComparisonOperator::GreaterThanOrEqual);
				assert!(matches!(comparison.right(), Expression::Literal(_)));
			}
			other => panic!("expected a comparison, got {other:?}"),
		}
	}

	#[rstest]
	fn test_and_chain_is_flattened() {
		let expr = PathExpr::new("p", "a")
			.is_null()
			.and(PathExpr::new("p", "b").is_null())
			.and(PathExpr::new("p", "c").is_null());
		match expr {
			Expression::Junction(junction) => assert_eq!(junction.len(), 3),
			other => panic!("expected a junction, got {other:?}"),
		}
	}

	#[rstest]
	fn test_or_inside_and_is_nested() {
		let expr = PathExpr::new("p", "a")
			.is_null()
			.or(PathExpr::new("p", "b").is_null())
			.and(PathExpr::new("p", "c").is_null());
		match expr {
			Expression::Junction(junction) => {
				assert_eq!(junction.junction_type(), JunctionType::And);
				assert_eq!(junction.len(), 2);
			}
			other => panic!("expected a junction, got {other:?}"),
		}
	}

	#[rstest]
	fn test_not_wraps() {
		let expr = PathExpr::new("p", "active").eq(true).not();
		assert!(matches!(expr, Expression::Not(_)));
	}
}
