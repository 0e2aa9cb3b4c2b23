//! Configuration sources for layered settings
//!
//! Each source yields a flat map of keys to JSON values. Sources are merged in
//! priority order (environment variables > TOML files > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Required configuration file not found: {0}")]
	NotFound(PathBuf),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Parse error: {0}")]
	Parse(String),
}

/// Environment variable configuration source
///
/// Only variables starting with the prefix are read. The prefix is stripped
/// and the remaining key is lowercased, so `CRITERIA_PARAMETER_PREFIX`
/// becomes `parameter_prefix`. Numbers and booleans are guessed from the
/// text; [`SettingsBuilder`](crate::SettingsBuilder) turns them back into
/// text for textual fields.
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Prefix used by [`EnvSource::default`]
	pub const DEFAULT_PREFIX: &'static str = "CRITERIA_";

	/// Create a source reading variables that start with `prefix`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_criteria_conf::EnvSource;
	///
	/// let source = EnvSource::new("MYAPP_CRITERIA_");
	/// ```
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	fn parse_value(raw: String) -> Value {
		if let Ok(num) = raw.parse::<i64>() {
			Value::Number(num.into())
		} else if let Ok(b) = raw.parse::<bool>() {
			Value::Bool(b)
		} else {
			Value::String(raw)
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PREFIX)
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		for (key, value) in std::env::vars() {
			let Some(stripped) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			if stripped.is_empty() {
				continue;
			}
			config.insert(stripped.to_lowercase(), Self::parse_value(value));
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// TOML file configuration source
///
/// An optional source (see [`TomlFileSource::new`]) yields nothing when the
/// file does not exist. A required source (see [`TomlFileSource::required`])
/// reports the missing file. Read and parse failures are reported in both
/// cases.
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create an optional TOML file source
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_criteria_conf::TomlFileSource;
	///
	/// let source = TomlFileSource::new("criteria.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Create a TOML file source that fails when the file is missing
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// Path of the file backing this source
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::NotFound(self.path.clone()));
			}
			tracing::debug!(path = %self.path.display(), "optional settings file not found");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
			path: self.path.clone(),
			source,
		})?;
		let table: toml::Table = toml::from_str(&content)?;

		match serde_json::to_value(&table)? {
			Value::Object(map) => Ok(map.into_iter().collect()),
			other => Err(SourceError::Parse(format!(
				"expected a table at the root of {}, found {}",
				self.path.display(),
				other
			))),
		}
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default values source
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_criteria_conf::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("log_bindings", Value::Bool(false));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::env;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	#[serial(criteria_env)]
	fn test_env_source_strips_prefix() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("CRITERIA_TEST_PARAMETER_PREFIX", "arg");
			env::set_var("CRITERIA_TEST_PARAMETER_START", "5");
			env::set_var("CRITERIA_TEST_LOG_BINDINGS", "false");
		}

		let config = EnvSource::new("CRITERIA_TEST_").load().unwrap();

		assert_eq!(
			config.get("parameter_prefix"),
			Some(&Value::String("arg".to_string()))
		);
		assert_eq!(config.get("parameter_start"), Some(&Value::Number(5.into())));
		assert_eq!(config.get("log_bindings"), Some(&Value::Bool(false)));

		// SAFETY: see above
		unsafe {
			env::remove_var("CRITERIA_TEST_PARAMETER_PREFIX");
			env::remove_var("CRITERIA_TEST_PARAMETER_START");
			env::remove_var("CRITERIA_TEST_LOG_BINDINGS");
		}
	}

	#[rstest]
	fn test_toml_source_reads_table() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("criteria.toml");
		let mut file = fs::File::create(&path).unwrap();
		writeln!(file, "parameter_prefix = \"p\"\nrepr_max_chars = 80").unwrap();

		let config = TomlFileSource::new(&path).load().unwrap();

		assert_eq!(config.get("parameter_prefix"), Some(&Value::String("p".to_string())));
		assert_eq!(config.get("repr_max_chars"), Some(&Value::Number(80.into())));
	}

	#[rstest]
	fn test_optional_toml_source_missing_file() {
		let temp_dir = TempDir::new().unwrap();
		let config = TomlFileSource::new(temp_dir.path().join("absent.toml"))
			.load()
			.unwrap();
		assert!(config.is_empty());
	}

	#[rstest]
	fn test_required_toml_source_missing_file() {
		let temp_dir = TempDir::new().unwrap();
		let result = TomlFileSource::required(temp_dir.path().join("absent.toml")).load();
		assert!(matches!(result, Err(SourceError::NotFound(_))));
	}

	#[rstest]
	fn test_toml_source_reports_parse_error() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("broken.toml");
		fs::write(&path, "parameter_prefix = ").unwrap();

		let result = TomlFileSource::new(&path).load();
		assert!(matches!(result, Err(SourceError::Toml(_))));
	}

	#[rstest]
	fn test_priorities() {
		assert!(EnvSource::default().priority() > TomlFileSource::new("x.toml").priority());
		assert!(TomlFileSource::new("x.toml").priority() > DefaultSource::new().priority());
	}
}
