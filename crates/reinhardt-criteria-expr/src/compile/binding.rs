//! Parameter bindings and the prepared query they are applied to.

use std::collections::HashMap;

use crate::error::{CriteriaError, Result};
use crate::expr::{ParameterExpr, ParameterKey};
use crate::types::ValueType;
use crate::value::{IntoValue, Value};

/// Target of parameter bindings.
///
/// Implemented by [`PreparedQuery`]; a database driver integration would
/// implement it on its own statement type.
pub trait TypedQuery {
	/// Set the value of the parameter called `name`.
	fn set_parameter(&mut self, name: &str, value: Value) -> Result<()>;
}

/// A literal value bound to a generated parameter name.
///
/// Produced when a literal node is rendered and applied exactly once when
/// the compiled query is prepared.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitParameterBinding {
	name: String,
	value: Value,
	value_type: Option<ValueType>,
}

impl ImplicitParameterBinding {
	pub fn new(name: impl Into<String>, value: Value, value_type: Option<ValueType>) -> Self {
		Self {
			name: name.into(),
			value,
			value_type,
		}
	}

	/// Generated parameter name, without the placeholder marker
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Type of the literal that produced this binding
	pub fn value_type(&self) -> Option<ValueType> {
		self.value_type
	}

	/// Set this binding's value on `query`.
	pub fn bind(&self, query: &mut dyn TypedQuery) -> Result<()> {
		query.set_parameter(&self.name, self.value.clone())
	}
}

/// An explicit parameter together with the name it was rendered under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitParameterInfo {
	name: String,
	parameter: ParameterExpr,
}

impl ExplicitParameterInfo {
	pub fn new(name: impl Into<String>, parameter: ParameterExpr) -> Self {
		Self {
			name: name.into(),
			parameter,
		}
	}

	/// Name used in the rendered text (`?N` for positional parameters)
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn parameter(&self) -> &ParameterExpr {
		&self.parameter
	}

	pub fn value_type(&self) -> ValueType {
		self.parameter.value_type()
	}
}

#[derive(Debug, Clone)]
struct DeclaredParameter {
	name: String,
	/// Present for explicit parameters only
	explicit: Option<(ParameterKey, ValueType)>,
}

/// Named parameter values for one compiled query.
///
/// Obtained from [`CompiledQuery::prepare`], which applies every implicit
/// binding. Explicit parameters are then bound by the caller with
/// [`PreparedQuery::bind`] or [`TypedQuery::set_parameter`], and
/// [`PreparedQuery::ensure_complete`] checks that nothing is missing.
///
/// [`CompiledQuery::prepare`]: crate::compile::CompiledQuery::prepare
#[derive(Debug, Clone)]
pub struct PreparedQuery {
	text: String,
	declared: Vec<DeclaredParameter>,
	values: HashMap<String, Value>,
}

impl PreparedQuery {
	pub(crate) fn declare(
		text: impl Into<String>,
		implicit: &[ImplicitParameterBinding],
		explicit: &[ExplicitParameterInfo],
	) -> Self {
		let declared = implicit
			.iter()
			.map(|binding| DeclaredParameter {
				name: binding.name().to_string(),
				explicit: None,
			})
			.chain(explicit.iter().map(|info| DeclaredParameter {
				name: info.name().to_string(),
				explicit: Some((info.parameter().key().clone(), info.value_type())),
			}))
			.collect();

		Self {
			text: text.into(),
			declared,
			values: HashMap::new(),
		}
	}

	/// Query text with named placeholders
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Bind a value to an explicit parameter of the compiled query.
	///
	/// Works for unnamed parameters too, whose name was generated while
	/// rendering.
	pub fn bind<V>(&mut self, parameter: &ParameterExpr, value: V) -> Result<()>
	where
		V: IntoValue,
	{
		let name = self
			.declared
			.iter()
			.find(|declared| matches!(&declared.explicit, Some((key, _)) if key == parameter.key()))
			.map(|declared| declared.name.clone())
			.ok_or_else(|| CriteriaError::UnknownParameter(parameter.key().to_string()))?;

		self.set_parameter(&name, value.into_value())
	}

	/// Value bound to `name`, if any.
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	pub fn is_bound(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Declared parameter names with their bound values, in declaration order.
	pub fn bound_values(&self) -> Vec<(&str, &Value)> {
		self.declared
			.iter()
			.filter_map(|declared| {
				self.values
					.get(&declared.name)
					.map(|value| (declared.name.as_str(), value))
			})
			.collect()
	}

	/// Fail with the first declared parameter that has no value.
	pub fn ensure_complete(&self) -> Result<()> {
		match self
			.declared
			.iter()
			.find(|declared| !self.values.contains_key(&declared.name))
		{
			Some(missing) => Err(CriteriaError::UnboundParameter(missing.name.clone())),
			None => Ok(()),
		}
	}
}

impl TypedQuery for PreparedQuery {
	fn set_parameter(&mut self, name: &str, value: Value) -> Result<()> {
		let declared = self
			.declared
			.iter()
			.find(|declared| declared.name == name)
			.ok_or_else(|| CriteriaError::UnknownParameter(name.to_string()))?;

		if let Some((_, expected)) = &declared.explicit {
			if let Some(actual) = value.runtime_type()
				&& actual != *expected
			{
				return Err(CriteriaError::TypeMismatch {
					name: name.to_string(),
					expected: *expected,
					actual,
				});
			}
			if self.values.contains_key(name) {
				tracing::warn!(parameter = %name, "rebinding explicit parameter");
			}
		}

		self.values.insert(name.to_string(), value);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn prepared() -> (PreparedQuery, ParameterExpr) {
		let age = ParameterExpr::named("age", ValueType::Int);
		let implicit = vec![ImplicitParameterBinding::new(
			"param0",
			Value::String(Some(Box::new("A".to_string()))),
			Some(ValueType::String),
		)];
		let explicit = vec![ExplicitParameterInfo::new("age", age.clone())];
		(
			PreparedQuery::declare("x = :param0 and y = :age", &implicit, &explicit),
			age,
		)
	}

	#[rstest]
	fn test_implicit_binding_sets_value() {
		let (mut query, _) = prepared();
		let binding =
			ImplicitParameterBinding::new("param0", Value::Int(Some(1)), Some(ValueType::Int));
		binding.bind(&mut query).unwrap();
		assert_eq!(query.value("param0"), Some(&Value::Int(Some(1))));
	}

	#[rstest]
	fn test_unknown_name_is_rejected() {
		let (mut query, _) = prepared();
		let result = query.set_parameter("nope", Value::Int(Some(1)));
		assert!(matches!(result, Err(CriteriaError::UnknownParameter(name)) if name == "nope"));
	}

	#[rstest]
	fn test_type_mismatch_is_rejected() {
		let (mut query, age) = prepared();
		let result = query.bind(&age, "forty");
		assert!(matches!(
			result,
			Err(CriteriaError::TypeMismatch {
				expected: ValueType::Int,
				actual: ValueType::String,
				..
			})
		));
	}

	#[rstest]
	fn test_null_binds_to_any_explicit_type() {
		let (mut query, age) = prepared();
		query.bind(&age, Option::<String>::None).unwrap();
		assert!(query.is_bound("age"));
	}

	#[rstest]
	fn test_ensure_complete_reports_first_missing() {
		let (mut query, age) = prepared();
		assert!(matches!(
			query.ensure_complete(),
			Err(CriteriaError::UnboundParameter(name)) if name == "param0"
		));

		query
			.set_parameter("param0", Value::String(Some(Box::new("A".to_string()))))
			.unwrap();
		assert!(matches!(
			query.ensure_complete(),
			Err(CriteriaError::UnboundParameter(name)) if name == "age"
		));

		query.bind(&age, 30i32).unwrap();
		assert!(query.ensure_complete().is_ok());
		assert_eq!(query.bound_values().len(), 2);
		assert_eq!(query.bound_values()[1], ("age", &Value::Int(Some(30))));
	}

	#[rstest]
	fn test_bind_unknown_parameter() {
		let (mut query, _) = prepared();
		let other = ParameterExpr::named("other", ValueType::Int);
		assert!(matches!(
			query.bind(&other, 1i32),
			Err(CriteriaError::UnknownParameter(_))
		));
	}
}
