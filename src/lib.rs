//! # Reinhardt Criteria
//!
//! A criteria query API for the Reinhardt ORM.
//!
//! Queries are built as in-memory expression trees and compiled into
//! query-language text. Literal values never appear in the text: each one
//! renders a generated placeholder and is bound to the prepared query
//! automatically, while explicit parameters are bound by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_criteria::prelude::*;
//!
//! let cb = CriteriaBuilder::new();
//! let mut query = cb.create_query();
//! let person = query.from("Person");
//! query.select(
//!     cb.select_case()
//!         .when(person.get("age").lt(18i32), "minor")
//!         .otherwise("adult"),
//! );
//!
//! let compiled = cb.compile(&query).unwrap();
//! let prepared = compiled.prepare().unwrap();
//! assert_eq!(prepared.value("param1"), Some(&Value::from("minor")));
//! ```
//!
//! ## Configuration
//!
//! [`load_settings`] layers an optional TOML file and `CRITERIA_*`
//! environment variables over the defaults:
//!
//! ```rust,no_run
//! use reinhardt_criteria::{CriteriaBuilder, load_settings};
//!
//! let settings = load_settings(Some("criteria.toml".as_ref())).unwrap();
//! let cb = CriteriaBuilder::with_settings(settings);
//! ```
//!
//! ## Feature Flags
//!
//! - `with-chrono` - Date and time values (via `chrono`)
//! - `with-uuid` - UUID values (via `uuid`)
//! - `with-json` - JSON values (via `serde_json`)
//! - `full` (default) - All of the above

pub mod conf;
pub mod expr;

pub use conf::load_settings;

// Re-export settings from dedicated crate
pub use reinhardt_criteria_conf::{CriteriaSettings, SettingsBuilder, SettingsError};

// Re-export the query API
pub use reinhardt_criteria_expr::prelude::*;

/// Prelude module for convenient imports.
pub mod prelude {
	pub use reinhardt_criteria_conf::CriteriaSettings;
	pub use reinhardt_criteria_expr::prelude::*;
}
