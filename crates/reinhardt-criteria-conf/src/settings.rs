//! Compiler settings.

use serde::{Deserialize, Serialize};

/// Largest accepted `parameter_start`.
pub const MAX_PARAMETER_START: usize = u32::MAX as usize;

/// Settings that control how criteria queries are rendered.
///
/// Every field has a default, so a partial configuration file only needs to
/// name the keys it overrides.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_conf::CriteriaSettings;
///
/// let settings = CriteriaSettings::default();
/// assert_eq!(settings.placeholder("param0"), ":param0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaSettings {
	/// Prefix of generated parameter names (`param` -> `param0`, `param1`, ...)
	pub parameter_prefix: String,
	/// First counter value used for generated parameter names
	pub parameter_start: usize,
	/// Character that introduces a named parameter in rendered text
	pub placeholder_marker: char,
	/// Prefix of generated root aliases (`generatedAlias0`, ...)
	pub alias_prefix: String,
	/// Emit a debug event with the bindings of every compiled query
	pub log_bindings: bool,
	/// Maximum number of characters of the binding representation in logs
	pub repr_max_chars: usize,
}

impl Default for CriteriaSettings {
	fn default() -> Self {
		Self {
			parameter_prefix: "param".to_string(),
			parameter_start: 0,
			placeholder_marker: ':',
			alias_prefix: "generatedAlias".to_string(),
			log_bindings: true,
			repr_max_chars: 300,
		}
	}
}

impl CriteriaSettings {
	/// Format a placeholder token for `name`.
	pub fn placeholder(&self, name: &str) -> String {
		let mut token = String::with_capacity(name.len() + 1);
		token.push(self.placeholder_marker);
		token.push_str(name);
		token
	}

	/// Check the invariants the renderer relies on.
	///
	/// Prefixes must be non-empty identifiers so that a generated name can be
	/// scanned back out of rendered text, and the marker must not be a
	/// character that can appear inside a name.
	pub fn validate(&self) -> Result<(), String> {
		validate_identifier("parameter_prefix", &self.parameter_prefix)?;
		validate_identifier("alias_prefix", &self.alias_prefix)?;

		if self.placeholder_marker.is_alphanumeric()
			|| self.placeholder_marker == '_'
			|| self.placeholder_marker.is_whitespace()
		{
			return Err(format!(
				"placeholder_marker '{}' must be a punctuation character",
				self.placeholder_marker
			));
		}

		if self.parameter_start > MAX_PARAMETER_START {
			return Err(format!(
				"parameter_start {} exceeds the maximum of {}",
				self.parameter_start, MAX_PARAMETER_START
			));
		}

		if self.repr_max_chars == 0 {
			return Err("repr_max_chars must be greater than zero".to_string());
		}

		Ok(())
	}
}

fn validate_identifier(key: &str, value: &str) -> Result<(), String> {
	let mut chars = value.chars();
	match chars.next() {
		None => Err(format!("{} must not be empty", key)),
		Some(first) if !(first.is_ascii_alphabetic() || first == '_') => Err(format!(
			"{} '{}' must start with a letter or underscore",
			key, value
		)),
		Some(_) if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) => Err(format!(
			"{} '{}' may only contain ASCII letters, digits and underscores",
			key, value
		)),
		Some(_) => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_settings_are_valid() {
		let settings = CriteriaSettings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.parameter_prefix, "param");
		assert_eq!(settings.alias_prefix, "generatedAlias");
		assert_eq!(settings.parameter_start, 0);
	}

	#[rstest]
	#[case::empty("")]
	#[case::leading_digit("1param")]
	#[case::dash("my-param")]
	#[case::space("my param")]
	fn test_invalid_parameter_prefix(#[case] prefix: &str) {
		let settings = CriteriaSettings {
			parameter_prefix: prefix.to_string(),
			..Default::default()
		};
		assert!(settings.validate().is_err());
	}

	#[rstest]
	#[case::letter('p')]
	#[case::digit('1')]
	#[case::underscore('_')]
	#[case::space(' ')]
	fn test_invalid_marker(#[case] marker: char) {
		let settings = CriteriaSettings {
			placeholder_marker: marker,
			..Default::default()
		};
		let err = settings.validate().unwrap_err();
		assert!(err.contains("placeholder_marker"));
	}

	#[rstest]
	#[case::at_limit(MAX_PARAMETER_START, true)]
	#[case::above_limit(MAX_PARAMETER_START + 1, false)]
	#[case::usize_max(usize::MAX, false)]
	fn test_parameter_start_is_bounded(#[case] start: usize, #[case] valid: bool) {
		let settings = CriteriaSettings {
			parameter_start: start,
			..Default::default()
		};
		assert_eq!(settings.validate().is_ok(), valid);
	}

	#[rstest]
	fn test_placeholder_uses_marker() {
		let settings = CriteriaSettings {
			placeholder_marker: '@',
			..Default::default()
		};
		assert_eq!(settings.placeholder("param3"), "@param3");
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings: CriteriaSettings = toml::from_str("parameter_prefix = \"arg\"").unwrap();
		assert_eq!(settings.parameter_prefix, "arg");
		assert_eq!(settings.alias_prefix, "generatedAlias");
		assert!(settings.log_bindings);
	}
}
