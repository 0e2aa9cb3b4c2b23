//! Registry of explicit parameters found in an expression tree.

use crate::expr::ParameterExpr;

/// Explicit parameters discovered by the registration walk.
///
/// Each node forwards [`Renderable::register_parameters`] to its children;
/// only [`ParameterExpr`] adds itself. A parameter that appears several
/// times in the tree is recorded once, at its first position.
///
/// [`Renderable::register_parameters`]: crate::expr::Renderable::register_parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterRegistry {
	parameters: Vec<ParameterExpr>,
}

impl ParameterRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Record `parameter` unless it is already present.
	pub fn register(&mut self, parameter: &ParameterExpr) {
		if !self.contains(parameter) {
			self.parameters.push(parameter.clone());
		}
	}

	/// Whether `parameter` has been recorded.
	pub fn contains(&self, parameter: &ParameterExpr) -> bool {
		self.parameters.iter().any(|p| p.key() == parameter.key())
	}

	/// Recorded parameters, in discovery order.
	pub fn parameters(&self) -> &[ParameterExpr] {
		&self.parameters
	}

	pub fn len(&self) -> usize {
		self.parameters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parameters.is_empty()
	}
}
