//! # reinhardt-criteria-conf
//!
//! Settings for the criteria query compiler.
//!
//! Settings are assembled from layered sources, merged in priority order
//! (environment variables > TOML files > defaults), and deserialized into
//! [`CriteriaSettings`].
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_criteria_conf::{CriteriaSettings, DefaultSource, SettingsBuilder};
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(DefaultSource::new().with_value("parameter_prefix", "p".into()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.parameter_prefix, "p");
//! assert_eq!(settings.placeholder_marker, ':');
//! assert_eq!(CriteriaSettings::default().parameter_prefix, "param");
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: The [`CriteriaSettings`] type and its validation
//! - [`sources`]: Configuration sources ([`EnvSource`], [`TomlFileSource`], [`DefaultSource`])
//! - [`builder`]: [`SettingsBuilder`], which merges sources

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::{CriteriaSettings, MAX_PARAMETER_START};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
