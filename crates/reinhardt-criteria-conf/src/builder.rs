//! Settings builder that merges configuration sources.

use crate::settings::CriteriaSettings;
use crate::sources::{ConfigSource, SourceError};
use indexmap::IndexMap;
use serde_json::Value;

/// Error raised while assembling [`CriteriaSettings`]
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("{description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Merges configuration sources into [`CriteriaSettings`].
///
/// Sources are applied from lowest to highest priority, so a key defined by
/// a higher-priority source replaces the same key from a lower one. Sources
/// with equal priority are applied in the order they were added.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_conf::{DefaultSource, SettingsBuilder};
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("log_bindings", Value::Bool(false)))
///     .build()
///     .unwrap();
/// assert!(!settings.log_bindings);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create a builder with no sources
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a configuration source
	pub fn add_source<S>(mut self, source: S) -> Self
	where
		S: ConfigSource + 'static,
	{
		self.sources.push(Box::new(source));
		self
	}

	/// Load, merge, deserialize and validate the settings
	pub fn build(mut self) -> Result<CriteriaSettings, SettingsError> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let values = source.load().map_err(|source_err| SettingsError::Source {
				description: source.description(),
				source: source_err,
			})?;
			tracing::trace!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merged.extend(values);
		}

		let mut object: serde_json::Map<String, Value> = merged.into_iter().collect();
		restore_text_fields(&mut object)?;
		let settings: CriteriaSettings = serde_json::from_value(Value::Object(object))?;
		settings.validate().map_err(SettingsError::Invalid)?;

		Ok(settings)
	}
}

/// Turn numbers and booleans back into text where the field is textual.
///
/// Untyped sources such as the environment guess scalar types, so
/// `CRITERIA_PARAMETER_PREFIX=true` arrives as a boolean.
fn restore_text_fields(object: &mut serde_json::Map<String, Value>) -> Result<(), SettingsError> {
	let Value::Object(defaults) = serde_json::to_value(CriteriaSettings::default())? else {
		return Ok(());
	};

	for (key, value) in object.iter_mut() {
		if matches!(defaults.get(key), Some(Value::String(_)))
			&& matches!(value, Value::Number(_) | Value::Bool(_))
		{
			*value = Value::String(value.to_string());
		}
	}
	Ok(())
}
