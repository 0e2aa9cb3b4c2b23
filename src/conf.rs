//! Settings module.
//!
//! Re-exports the layered configuration sources and provides
//! [`load_settings`], the standard layering used by applications.

use std::path::Path;

pub use reinhardt_criteria_conf::*;

/// Load settings from defaults, an optional TOML file and the environment.
///
/// Priorities follow the sources: `CRITERIA_*` environment variables override
/// the file, which overrides the defaults. A file passed here must exist.
pub fn load_settings(path: Option<&Path>) -> Result<CriteriaSettings, SettingsError> {
	let mut builder = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(EnvSource::default());

	if let Some(path) = path {
		tracing::debug!(path = %path.display(), "loading criteria settings file");
		builder = builder.add_source(TomlFileSource::required(path));
	}

	builder.build()
}
