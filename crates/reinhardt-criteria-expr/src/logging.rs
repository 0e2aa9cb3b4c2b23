//! Compact representation of parameter bindings for log events.

use crate::compile::ImplicitParameterBinding;

/// Configuration for [`repr_bindings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReprParamsConfig {
	/// Longest representation emitted before the middle is cut out
	pub max_chars: usize,
}

impl Default for ReprParamsConfig {
	fn default() -> Self {
		Self { max_chars: 300 }
	}
}

/// Represent bindings as `{name: literal, ...}`, truncated in the middle.
///
/// # Examples
///
/// ```
/// use reinhardt_criteria_expr::logging::{repr_bindings, ReprParamsConfig};
/// use reinhardt_criteria_expr::{ImplicitParameterBinding, Value, ValueType};
///
/// let bindings = vec![
///     ImplicitParameterBinding::new("param0", Value::from("A"), Some(ValueType::String)),
///     ImplicitParameterBinding::new("param1", Value::from(5i32), Some(ValueType::Int)),
/// ];
/// let output = repr_bindings(&bindings, &ReprParamsConfig::default());
/// assert_eq!(output, "{param0: 'A', param1: 5}");
/// ```
pub fn repr_bindings(bindings: &[ImplicitParameterBinding], config: &ReprParamsConfig) -> String {
	let entries: Vec<String> = bindings
		.iter()
		.map(|binding| format!("{}: {}", binding.name(), binding.value().to_query_literal()))
		.collect();
	truncate_middle(&format!("{{{}}}", entries.join(", ")), config.max_chars)
}

/// Truncate a single representation if it is longer than `max_chars`.
pub fn truncate_param(repr: &str, max_chars: usize) -> String {
	truncate_middle(repr, max_chars)
}

fn truncate_middle(repr: &str, max_chars: usize) -> String {
	let char_count = repr.chars().count();
	if char_count <= max_chars {
		return repr.to_string();
	}

	let half_chars = max_chars / 2;
	let truncated_chars = char_count - max_chars;
	let start_end = byte_index_at_char(repr, half_chars);
	let tail_start = byte_index_at_char(repr, char_count - half_chars);

	format!(
		"{}  ... ({} characters truncated) ...  {}",
		&repr[..start_end],
		truncated_chars,
		&repr[tail_start..]
	)
}

// Byte index of the n-th character, so slicing never splits a UTF-8 sequence.
// Returns `s.len()` if `n` >= number of characters in `s`.
fn byte_index_at_char(s: &str, n: usize) -> usize {
	s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
