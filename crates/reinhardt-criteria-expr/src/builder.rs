//! Entry point that ties settings, queries and expression factories together.

use std::sync::Arc;

use reinhardt_criteria_conf::{CriteriaSettings, SettingsBuilder};

use crate::compile::{CompiledQuery, CriteriaQueryCompiler};
use crate::error::Result;
use crate::expr::{
	Expression, FunctionExpr, Junction, LiteralExpr, ParameterExpr, Renderable, SearchedCase,
	SimpleCase,
};
use crate::query::CriteriaQuery;
use crate::types::ValueType;
use crate::value::IntoValue;

/// Factory for queries and expression nodes sharing one set of settings.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::prelude::*;
///
/// let cb = CriteriaBuilder::new();
/// let mut query = cb.create_query();
/// let person = query.from("Person");
/// let label = cb
///     .select_case()
///     .when(person.get("age").lt(18i32), "minor")
///     .otherwise("adult");
/// query.select(label);
///
/// let compiled = cb.compile(&query).unwrap();
/// assert_eq!(
///     compiled.text(),
///     "select case when generatedAlias0.age < :param0 then :param1 else :param2 end \
///      from Person as generatedAlias0"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriteriaBuilder {
	settings: Arc<CriteriaSettings>,
}

impl CriteriaBuilder {
	/// Create a builder with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(settings: CriteriaSettings) -> Self {
		Self {
			settings: Arc::new(settings),
		}
	}

	/// Create a builder from layered configuration sources.
	pub fn from_settings_builder(builder: SettingsBuilder) -> Result<Self> {
		let settings = builder.build()?;
		tracing::debug!(?settings, "loaded criteria settings");
		Ok(Self::with_settings(settings))
	}

	pub fn settings(&self) -> &CriteriaSettings {
		&self.settings
	}

	pub fn create_query(&self) -> CriteriaQuery {
		CriteriaQuery::with_settings(&self.settings)
	}

	pub fn compiler(&self) -> CriteriaQueryCompiler {
		CriteriaQueryCompiler::new(Arc::clone(&self.settings))
	}

	pub fn compile(&self, query: &CriteriaQuery) -> Result<CompiledQuery> {
		self.compiler().compile(query)
	}

	pub fn literal<V>(&self, value: V) -> LiteralExpr
	where
		V: IntoValue,
	{
		LiteralExpr::new(value)
	}

	/// Typed null literal.
	pub fn null_literal(&self, value_type: ValueType) -> LiteralExpr {
		LiteralExpr::typed(value_type, value_type.null_value())
	}

	/// Unnamed parameter; its name is generated at compile time.
	pub fn parameter(&self, value_type: ValueType) -> ParameterExpr {
		ParameterExpr::unnamed(value_type)
	}

	pub fn named_parameter(&self, name: impl Into<String>, value_type: ValueType) -> ParameterExpr {
		ParameterExpr::named(name, value_type)
	}

	pub fn select_case(&self) -> SearchedCase {
		SearchedCase::new()
	}

	pub fn select_case_typed(&self, value_type: ValueType) -> SearchedCase {
		SearchedCase::typed(value_type)
	}

	pub fn simple_case<E>(&self, operand: E) -> SimpleCase
	where
		E: Into<Expression>,
	{
		SimpleCase::new(operand)
	}

	/// Empty `and` junction; renders as `1=1` until a predicate is added.
	pub fn conjunction(&self) -> Junction {
		Junction::all()
	}

	/// Empty `or` junction; renders as `0=1` until a predicate is added.
	pub fn disjunction(&self) -> Junction {
		Junction::any()
	}

	pub fn upper<E>(&self, expression: E) -> FunctionExpr
	where
		E: Into<Expression>,
	{
		FunctionExpr::new("upper", ValueType::String).arg(expression)
	}

	pub fn lower<E>(&self, expression: E) -> FunctionExpr
	where
		E: Into<Expression>,
	{
		FunctionExpr::new("lower", ValueType::String).arg(expression)
	}

	pub fn length<E>(&self, expression: E) -> FunctionExpr
	where
		E: Into<Expression>,
	{
		FunctionExpr::new("length", ValueType::Int).arg(expression)
	}

	/// `abs(e)`, typed like its argument.
	pub fn abs<E>(&self, expression: E) -> FunctionExpr
	where
		E: Into<Expression>,
	{
		let expression = expression.into();
		FunctionExpr::new("abs", expression.value_type()).arg(expression)
	}

	pub fn concat<L, R>(&self, left: L, right: R) -> FunctionExpr
	where
		L: Into<Expression>,
		R: Into<Expression>,
	{
		FunctionExpr::new("concat", ValueType::String)
			.arg(left)
			.arg(right)
	}

	/// `coalesce(e1, e2, ...)`, typed like its first argument of known type.
	pub fn coalesce<I, E>(&self, expressions: I) -> FunctionExpr
	where
		I: IntoIterator<Item = E>,
		E: Into<Expression>,
	{
		let arguments: Vec<Expression> = expressions.into_iter().map(Into::into).collect();
		let return_type = arguments.iter().find_map(|argument| argument.value_type());
		FunctionExpr::new("coalesce", return_type).args(arguments)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::{ExprTrait, PathExpr};
	use crate::value::Value;
	use rstest::rstest;

	#[rstest]
	fn test_create_query_uses_alias_prefix() {
		let cb = CriteriaBuilder::with_settings(CriteriaSettings {
			alias_prefix: "e".to_string(),
			..Default::default()
		});
		let mut query = cb.create_query();
		assert_eq!(query.from("Person").alias(), "e0");
	}

	#[rstest]
	fn test_null_literal_is_typed() {
		let literal = CriteriaBuilder::new().null_literal(ValueType::Int);
		assert_eq!(literal.value(), &Value::Int(None));
		assert_eq!(literal.value_type(), Some(ValueType::Int));
	}

	#[rstest]
	fn test_function_types() {
		let cb = CriteriaBuilder::new();
		let path = PathExpr::new("p", "score").with_type(ValueType::Double);

		assert_eq!(cb.abs(path.clone()).value_type(), Some(ValueType::Double));
		assert_eq!(cb.length(path.clone()).value_type(), Some(ValueType::Int));
		assert_eq!(
			cb.coalesce([Expression::from(PathExpr::new("p", "x")), path.into()])
				.value_type(),
			Some(ValueType::Double)
		);
	}

	#[rstest]
	fn test_compile_uses_settings() {
		let cb = CriteriaBuilder::with_settings(CriteriaSettings {
			parameter_prefix: "p".to_string(),
			placeholder_marker: '@',
			..Default::default()
		});
		let mut query = cb.create_query();
		let person = query.from("Person");
		query.select(cb.upper(person.get("name")));
		query.where_(person.get("name").eq("x"));

		let compiled = cb.compile(&query).unwrap();
		assert_eq!(
			compiled.text(),
			"select upper(generatedAlias0.name) from Person as generatedAlias0 where generatedAlias0.name = @p0"
		);
	}
}
