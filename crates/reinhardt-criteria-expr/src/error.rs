//! Errors raised while compiling criteria queries and binding their parameters.

use crate::types::ValueType;
use reinhardt_criteria_conf::SettingsError;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, CriteriaError>;

/// Error raised by the compiler or by a prepared query.
///
/// Expression nodes never fail on their own; inconsistencies such as CASE
/// branches of different types are left to the database.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
	/// The query has no `from` root.
	#[error("criteria query has no root; call `from` before compiling")]
	MissingRoot,

	/// The query has no selection and more than one root to default to.
	#[error("criteria query has {0} roots and no selection")]
	AmbiguousSelection(usize),

	/// A value was bound to a name the compiled query does not declare.
	#[error("unknown query parameter `{0}`")]
	UnknownParameter(String),

	/// A value of the wrong type was bound to an explicit parameter.
	#[error("parameter `{name}` expects {expected}, got {actual}")]
	TypeMismatch {
		name: String,
		expected: ValueType,
		actual: ValueType,
	},

	/// An explicit parameter was never bound.
	#[error("no value bound for parameter `{0}`")]
	UnboundParameter(String),

	/// Settings could not be loaded.
	#[error(transparent)]
	Settings(#[from] SettingsError),
}
