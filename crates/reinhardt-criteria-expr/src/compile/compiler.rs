//! Criteria query compiler.

use std::sync::Arc;

use reinhardt_criteria_conf::CriteriaSettings;

use super::binding::{ExplicitParameterInfo, ImplicitParameterBinding, PreparedQuery, TypedQuery};
use super::registry::ParameterRegistry;
use super::rendering_context::RenderingContext;
use crate::error::Result;
use crate::expr::Renderable;
use crate::logging::{ReprParamsConfig, repr_bindings};
use crate::query::CriteriaQuery;

/// Compiles criteria queries and expressions into query text.
///
/// Compilation is a registration walk that collects explicit parameters,
/// followed by a render pass in which literal nodes emit placeholders and
/// register their implicit bindings.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::prelude::*;
///
/// let mut query = CriteriaQuery::new();
/// let person = query.from("Person");
/// query.select(person.get("name")).where_(person.get("age").gte(18i32));
///
/// let compiled = CriteriaQueryCompiler::default().compile(&query).unwrap();
/// assert_eq!(
///     compiled.text(),
///     "select generatedAlias0.name from Person as generatedAlias0 where generatedAlias0.age >= :param0"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriteriaQueryCompiler {
	settings: Arc<CriteriaSettings>,
}

impl CriteriaQueryCompiler {
	pub fn new(settings: Arc<CriteriaSettings>) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &CriteriaSettings {
		&self.settings
	}

	/// Compile a full criteria query.
	pub fn compile(&self, query: &CriteriaQuery) -> Result<CompiledQuery> {
		let mut registry = ParameterRegistry::new();
		query.register_parameters(&mut registry);

		let mut context = self.context_for(&registry);
		let text = query.render(&mut context)?;

		Ok(self.finish(text, context, registry))
	}

	/// Compile a standalone expression, e.g. to embed it in hand-written text.
	pub fn compile_expression<E>(&self, expression: &E) -> CompiledQuery
	where
		E: Renderable + ?Sized,
	{
		let mut registry = ParameterRegistry::new();
		expression.register_parameters(&mut registry);

		let mut context = self.context_for(&registry);
		let text = expression.render(&mut context);

		self.finish(text, context, registry)
	}

	fn context_for(&self, registry: &ParameterRegistry) -> RenderingContext {
		let mut context = RenderingContext::new(Arc::clone(&self.settings));
		for name in registry.parameters().iter().filter_map(|p| p.name()) {
			context.reserve_name(name);
		}
		context
	}

	fn finish(
		&self,
		text: String,
		context: RenderingContext,
		registry: ParameterRegistry,
	) -> CompiledQuery {
		let (implicit_bindings, explicit_parameters) = context.into_parts();
		let compiled = CompiledQuery {
			text,
			implicit_bindings,
			explicit_parameters,
			registry,
			placeholder_marker: self.settings.placeholder_marker,
		};

		if self.settings.log_bindings {
			let config = ReprParamsConfig {
				max_chars: self.settings.repr_max_chars,
			};
			tracing::debug!(
				query = %compiled.text,
				bindings = %repr_bindings(&compiled.implicit_bindings, &config),
				explicit_parameters = compiled.explicit_parameters.len(),
				"compiled criteria query"
			);
		}

		compiled
	}
}

/// Output of the compiler: query text and everything needed to bind it.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
	text: String,
	implicit_bindings: Vec<ImplicitParameterBinding>,
	explicit_parameters: Vec<ExplicitParameterInfo>,
	registry: ParameterRegistry,
	placeholder_marker: char,
}

impl CompiledQuery {
	/// Rendered query text
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Literal bindings, in the order their placeholders appear
	pub fn implicit_bindings(&self) -> &[ImplicitParameterBinding] {
		&self.implicit_bindings
	}

	/// Explicit parameters with their rendered names
	pub fn explicit_parameters(&self) -> &[ExplicitParameterInfo] {
		&self.explicit_parameters
	}

	/// Explicit parameters found by the registration walk
	pub fn parameter_registry(&self) -> &ParameterRegistry {
		&self.registry
	}

	/// All parameter names: implicit ones first, then explicit ones.
	pub fn parameter_names(&self) -> Vec<&str> {
		self.implicit_bindings
			.iter()
			.map(ImplicitParameterBinding::name)
			.chain(self.explicit_parameters.iter().map(ExplicitParameterInfo::name))
			.collect()
	}

	/// Apply every implicit binding to `query`.
	pub fn apply_implicit_bindings(&self, query: &mut dyn TypedQuery) -> Result<()> {
		for binding in &self.implicit_bindings {
			binding.bind(query)?;
		}
		Ok(())
	}

	/// Create a [`PreparedQuery`] with every implicit binding applied.
	pub fn prepare(&self) -> Result<PreparedQuery> {
		let mut prepared = PreparedQuery::declare(
			self.text.clone(),
			&self.implicit_bindings,
			&self.explicit_parameters,
		);
		self.apply_implicit_bindings(&mut prepared)?;
		Ok(prepared)
	}

	/// Query text with implicit bindings inlined as literals.
	///
	/// For logs and debugging only. Explicit parameters keep their
	/// placeholders.
	pub fn inline_text(&self) -> String {
		let mut out = String::with_capacity(self.text.len());
		let mut rest = self.text.as_str();

		while let Some(pos) = rest.find(self.placeholder_marker) {
			out.push_str(&rest[..pos]);
			let after = &rest[pos + self.placeholder_marker.len_utf8()..];
			let name_len = after
				.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
				.unwrap_or(after.len());
			let name = &after[..name_len];

			match self.implicit_bindings.iter().find(|b| b.name() == name) {
				Some(binding) if !name.is_empty() => {
					out.push_str(&binding.value().to_query_literal())
				}
				_ => {
					out.push(self.placeholder_marker);
					out.push_str(name);
				}
			}
			rest = &after[name_len..];
		}
		out.push_str(rest);
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::CriteriaError;
	use crate::expr::{ExprTrait, LiteralExpr, ParameterExpr};
	use crate::types::ValueType;
	use crate::value::Value;
	use rstest::rstest;

	#[rstest]
	fn test_compile_expression_collects_bindings() {
		let expr = LiteralExpr::new(5i32).eq(LiteralExpr::new(6i32));
		let compiled = CriteriaQueryCompiler::default().compile_expression(&expr);

		assert_eq!(compiled.text(), ":param0 = :param1");
		assert_eq!(compiled.parameter_names(), vec!["param0", "param1"]);
		assert!(compiled.parameter_registry().is_empty());
	}

	#[rstest]
	fn test_generated_names_avoid_explicit_names() {
		let explicit = ParameterExpr::named("param0", ValueType::Int);
		let expr = LiteralExpr::new(1i32).eq(explicit);
		let compiled = CriteriaQueryCompiler::default().compile_expression(&expr);

		assert_eq!(compiled.text(), ":param1 = :param0");
	}

	#[rstest]
	fn test_inline_text() {
		let expr = LiteralExpr::new("it's")
			.eq(ParameterExpr::named("name", ValueType::String))
			.or(LiteralExpr::new(10i64).gt(LiteralExpr::new(1i64)));
		let compiled = CriteriaQueryCompiler::default().compile_expression(&expr);

		assert_eq!(
			compiled.text(),
			"(:param0 = :name or :param1 > :param2)"
		);
		assert_eq!(compiled.inline_text(), "('it''s' = :name or 10 > 1)");
	}

	#[rstest]
	fn test_prepare_applies_each_implicit_binding() {
		let expr = LiteralExpr::new(true).eq(ParameterExpr::named("flag", ValueType::Bool));
		let compiled = CriteriaQueryCompiler::default().compile_expression(&expr);

		let prepared = compiled.prepare().unwrap();
		assert_eq!(prepared.value("param0"), Some(&Value::Bool(Some(true))));
		assert!(matches!(
			prepared.ensure_complete(),
			Err(CriteriaError::UnboundParameter(name)) if name == "flag"
		));
	}
}
