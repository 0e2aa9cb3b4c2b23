//! Integration tests for the facade crate.

use reinhardt_criteria::prelude::*;
use reinhardt_criteria::{SettingsError, load_settings};
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
fn test_loaded_settings_drive_rendering(config_dir: TempDir) {
	let path = config_dir.path().join("criteria.toml");
	std::fs::write(&path, "parameter_prefix = \"p\"\nalias_prefix = \"e\"\n").unwrap();

	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("CRITERIA_PLACEHOLDER_MARKER", "@");
	}
	let settings = load_settings(Some(path.as_path()));
	// SAFETY: see above
	unsafe {
		env::remove_var("CRITERIA_PLACEHOLDER_MARKER");
	}

	let cb = CriteriaBuilder::with_settings(settings.unwrap());
	let mut query = cb.create_query();
	let person = query.from("Person");
	query.where_(person.get("name").eq("x"));

	assert_eq!(
		cb.compile(&query).unwrap().text(),
		"select e0 from Person as e0 where e0.name = @p0"
	);
}

#[rstest]
#[serial(criteria_env)]
fn test_missing_settings_file_is_an_error(config_dir: TempDir) {
	let path = config_dir.path().join("absent.toml");
	let result = load_settings(Some(path.as_path()));
	assert!(matches!(result, Err(SettingsError::Source { .. })));
}

#[rstest]
#[serial(criteria_env)]
fn test_defaults_without_file() {
	let settings = load_settings(None).unwrap();
	assert_eq!(settings, CriteriaSettings::default());
}

#[rstest]
fn test_feature_gated_values_bind() {
	let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
	let id = uuid::Uuid::nil();
	let payload = serde_json::json!({"k": 1});

	let case = SearchedCase::new()
		.when(PathExpr::new("e", "created").lt(date), id)
		.otherwise(payload.clone());
	assert_eq!(case.value_type(), Some(ValueType::Uuid));

	let compiled = CriteriaQueryCompiler::default().compile_expression(&case);
	let prepared = compiled.prepare().unwrap();

	assert_eq!(prepared.value("param0"), Some(&Value::from(date)));
	assert_eq!(prepared.value("param1"), Some(&Value::from(id)));
	assert_eq!(prepared.value("param2"), Some(&Value::from(payload)));
}
