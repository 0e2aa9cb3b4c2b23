//! Integration tests for layered settings loading.

use pretty_assertions::assert_eq;
use reinhardt_criteria_conf::{
	CriteriaSettings, DefaultSource, EnvSource, SettingsBuilder, TomlFileSource,
};
use rstest::{fixture, rstest};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
	TempDir::new().expect("Failed to create temp dir")
}

#[rstest]
#[serial(criteria_env)]
fn test_env_overrides_file_overrides_defaults(config_dir: TempDir) {
	let path = config_dir.path().join("criteria.toml");
	std::fs::write(
		&path,
		"parameter_prefix = \"file_param\"\nalias_prefix = \"fileAlias\"\n",
	)
	.unwrap();

	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("CRITERIA_IT_PARAMETER_PREFIX", "env_param");
	}

	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::new().with_value("repr_max_chars", 64.into()))
		.add_source(EnvSource::new("CRITERIA_IT_"))
		.add_source(TomlFileSource::required(&path))
		.build()
		.unwrap();

	// SAFETY: see above
	unsafe {
		env::remove_var("CRITERIA_IT_PARAMETER_PREFIX");
	}

	assert_eq!(
		settings,
		CriteriaSettings {
			parameter_prefix: "env_param".to_string(),
			alias_prefix: "fileAlias".to_string(),
			repr_max_chars: 64,
			..CriteriaSettings::default()
		}
	);
}

#[rstest]
#[serial(criteria_env)]
fn test_env_marker_is_parsed_as_char() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("CRITERIA_IT2_PLACEHOLDER_MARKER", "@");
	}

	let settings = SettingsBuilder::new()
		.add_source(EnvSource::new("CRITERIA_IT2_"))
		.build();

	// SAFETY: see above
	unsafe {
		env::remove_var("CRITERIA_IT2_PLACEHOLDER_MARKER");
	}

	assert_eq!(settings.unwrap().placeholder_marker, '@');
}

#[rstest]
#[serial(criteria_env)]
fn test_env_scalars_reach_text_fields() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("CRITERIA_IT3_PARAMETER_PREFIX", "true");
		env::set_var("CRITERIA_IT3_PARAMETER_START", "5");
	}

	let settings = SettingsBuilder::new()
		.add_source(EnvSource::new("CRITERIA_IT3_"))
		.build();

	// SAFETY: see above
	unsafe {
		env::remove_var("CRITERIA_IT3_PARAMETER_PREFIX");
		env::remove_var("CRITERIA_IT3_PARAMETER_START");
	}

	let settings = settings.unwrap();
	assert_eq!(settings.parameter_prefix, "true");
	assert_eq!(settings.parameter_start, 5);
}
