//! Per-compilation rendering state.

use std::collections::HashSet;
use std::sync::Arc;

use reinhardt_criteria_conf::CriteriaSettings;

use super::binding::{ExplicitParameterInfo, ImplicitParameterBinding};
use crate::expr::{ParameterExpr, ParameterKey};

/// State shared by every node while one query is rendered.
///
/// The context hands out parameter names that are unique within the query,
/// collects the implicit bindings that literal nodes register, and records
/// the name each explicit parameter was rendered under. It is consumed by
/// [`RenderingContext::into_parts`] once rendering is done, so one context
/// can never serve two queries.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use reinhardt_criteria_conf::CriteriaSettings;
/// use reinhardt_criteria_expr::RenderingContext;
///
/// let mut context = RenderingContext::new(Arc::new(CriteriaSettings::default()));
/// assert_eq!(context.generate_parameter_name(), "param0");
/// assert_eq!(context.generate_parameter_name(), "param1");
/// assert_eq!(context.placeholder("param1"), ":param1");
/// ```
#[derive(Debug)]
pub struct RenderingContext {
	settings: Arc<CriteriaSettings>,
	/// Wider than `parameter_start` so that counting up never overflows
	next_parameter: u128,
	/// Names already in use: generated ones and user-chosen explicit names
	used_names: HashSet<String>,
	implicit_bindings: Vec<ImplicitParameterBinding>,
	explicit_parameters: Vec<ExplicitParameterInfo>,
}

impl RenderingContext {
	/// Create a context for one compilation.
	pub fn new(settings: Arc<CriteriaSettings>) -> Self {
		let next_parameter = settings.parameter_start as u128;
		Self {
			settings,
			next_parameter,
			used_names: HashSet::new(),
			implicit_bindings: Vec::new(),
			explicit_parameters: Vec::new(),
		}
	}

	/// Settings this context renders with.
	pub fn settings(&self) -> &CriteriaSettings {
		&self.settings
	}

	/// Mark `name` as taken so that generated names never collide with it.
	pub fn reserve_name(&mut self, name: impl Into<String>) {
		self.used_names.insert(name.into());
	}

	/// Generate a fresh parameter name.
	pub fn generate_parameter_name(&mut self) -> String {
		loop {
			let name = format!("{}{}", self.settings.parameter_prefix, self.next_parameter);
			self.next_parameter += 1;
			if self.used_names.insert(name.clone()) {
				tracing::trace!(parameter = %name, "generated parameter name");
				return name;
			}
		}
	}

	/// Format the placeholder token for a named parameter.
	pub fn placeholder(&self, name: &str) -> String {
		self.settings.placeholder(name)
	}

	/// Record a literal value to be bound once the query is prepared.
	pub fn register_implicit_binding(&mut self, binding: ImplicitParameterBinding) {
		tracing::trace!(
			parameter = %binding.name(),
			value = ?binding.value(),
			"registered implicit parameter binding"
		);
		self.implicit_bindings.push(binding);
	}

	/// Record an explicit parameter and return the name it renders under.
	///
	/// Rendering the same parameter twice yields the same name, including
	/// for unnamed parameters whose name is generated on first use.
	pub fn register_explicit_parameter(&mut self, parameter: &ParameterExpr) -> String {
		if let Some(info) = self
			.explicit_parameters
			.iter()
			.find(|info| info.parameter().key() == parameter.key())
		{
			return info.name().to_string();
		}

		let name = match parameter.key() {
			ParameterKey::Named(name) => {
				self.used_names.insert(name.clone());
				name.clone()
			}
			ParameterKey::Positional(_) => {
				let name = parameter.key().to_string();
				self.used_names.insert(name.clone());
				name
			}
			ParameterKey::Anonymous(_) => self.generate_parameter_name(),
		};
		self.explicit_parameters
			.push(ExplicitParameterInfo::new(name.clone(), parameter.clone()));
		name
	}

	/// Implicit bindings registered so far, in render order.
	pub fn implicit_bindings(&self) -> &[ImplicitParameterBinding] {
		&self.implicit_bindings
	}

	/// Explicit parameters rendered so far, in render order.
	pub fn explicit_parameters(&self) -> &[ExplicitParameterInfo] {
		&self.explicit_parameters
	}

	/// Consume the context, yielding its implicit bindings and explicit parameters.
	pub fn into_parts(self) -> (Vec<ImplicitParameterBinding>, Vec<ExplicitParameterInfo>) {
		(self.implicit_bindings, self.explicit_parameters)
	}
}
