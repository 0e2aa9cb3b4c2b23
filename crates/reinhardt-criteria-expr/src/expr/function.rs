//! Function call expression node.

use super::expression::{Expression, Renderable};
use crate::compile::{ParameterRegistry, RenderingContext};
use crate::types::ValueType;

/// A function call such as `upper(p.name)`.
///
/// The function name is emitted as is; callers are responsible for using a
/// name the query language understands.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::{FunctionExpr, PathExpr, ValueType};
///
/// let upper = FunctionExpr::new("upper", ValueType::String).arg(PathExpr::new("p", "name"));
/// assert_eq!(upper.arguments().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
	name: String,
	arguments: Vec<Expression>,
	return_type: Option<ValueType>,
}

impl FunctionExpr {
	pub fn new<T>(name: impl Into<String>, return_type: T) -> Self
	where
		T: Into<Option<ValueType>>,
	{
		Self {
			name: name.into(),
			arguments: Vec::new(),
			return_type: return_type.into(),
		}
	}

	/// Append an argument.
	#[must_use]
	pub fn arg<E>(mut self, argument: E) -> Self
	where
		E: Into<Expression>,
	{
		self.arguments.push(argument.into());
		self
	}

	/// Append several arguments.
	#[must_use]
	pub fn args<I, E>(mut self, arguments: I) -> Self
	where
		I: IntoIterator<Item = E>,
		E: Into<Expression>,
	{
		self.arguments.extend(arguments.into_iter().map(Into::into));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn arguments(&self) -> &[Expression] {
		&self.arguments
	}
}

impl Renderable for FunctionExpr {
	fn value_type(&self) -> Option<ValueType> {
		self.return_type
	}

	fn register_parameters(&self, registry: &mut ParameterRegistry) {
		for argument in &self.arguments {
			argument.register_parameters(registry);
		}
	}

	fn render(&self, context: &mut RenderingContext) -> String {
		let arguments: Vec<String> = self
			.arguments
			.iter()
			.map(|argument| argument.render(context))
			.collect();
		format!("{}({})", self.name, arguments.join(", "))
	}
}
