//! # reinhardt-criteria-expr
//!
//! Criteria query expression trees and their compiler.
//!
//! User code builds expression trees (literals, explicit parameters,
//! attribute paths, predicates, function calls and CASE expressions) and
//! criteria queries over them. The compiler renders a query into
//! query-language text with lowercase keywords.
//!
//! Literal values are never inlined. Each literal renders a generated
//! placeholder such as `:param0` and leaves behind an
//! [`ImplicitParameterBinding`], which [`CompiledQuery::prepare`] applies to
//! the resulting [`PreparedQuery`]. Explicit parameters are bound by the
//! caller afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_criteria_expr::prelude::*;
//!
//! let cb = CriteriaBuilder::new();
//! let mut query = cb.create_query();
//! let person = query.from("Person");
//! let min_age = cb.named_parameter("min_age", ValueType::Int);
//!
//! query
//!     .select(cb.select_case().when(person.get("vip").eq(true), "A").otherwise("B"))
//!     .where_(person.get("age").gte(min_age.clone()));
//!
//! let compiled = cb.compile(&query).unwrap();
//! assert_eq!(
//!     compiled.text(),
//!     "select case when generatedAlias0.vip = :param0 then :param1 else :param2 end \
//!      from Person as generatedAlias0 where generatedAlias0.age >= :min_age"
//! );
//!
//! let mut prepared = compiled.prepare().unwrap();
//! prepared.bind(&min_age, 18i32).unwrap();
//! prepared.ensure_complete().unwrap();
//! assert_eq!(prepared.value("param1"), Some(&Value::from("A")));
//! ```
//!
//! ## Architecture
//!
//! - [`value`] and [`types`]: values and their type tags
//! - [`expr`]: expression nodes and the [`Renderable`] contract
//! - [`query`]: [`CriteriaQuery`] with roots, selection, restriction and ordering
//! - [`compile`]: rendering context, parameter registry, compiler and bindings
//! - [`builder`]: [`CriteriaBuilder`], the factory tying settings and nodes together
//! - [`logging`]: truncated binding representations for log events
//!
//! ## Feature Flags
//!
//! - `with-chrono`: date and time values
//! - `with-uuid`: UUID values
//! - `with-json`: JSON values
//! - `full`: all of the above

pub mod builder;
pub mod compile;
pub mod error;
pub mod expr;
pub mod logging;
pub mod query;
pub mod types;
pub mod value;

/// Prelude module for convenient imports.
///
/// ```rust
/// use reinhardt_criteria_expr::prelude::*;
/// ```
pub mod prelude {
	pub use crate::builder::CriteriaBuilder;
	pub use crate::compile::{
		CompiledQuery, CriteriaQueryCompiler, ExplicitParameterInfo, ImplicitParameterBinding,
		ParameterRegistry, PreparedQuery, RenderingContext, TypedQuery,
	};
	pub use crate::error::CriteriaError;
	pub use crate::expr::{
		CaseResult, Comparison, ComparisonOperator, ExprTrait, Expression, FunctionExpr,
		IntoCaseResult, Junction, JunctionType, LiteralExpr, NullTest, ParameterExpr,
		ParameterKey, PathExpr, Renderable, SearchedCase, SimpleCase, WhenClause,
	};
	pub use crate::query::{CriteriaQuery, Order, Root, SortOrder};
	pub use crate::types::ValueType;
	pub use crate::value::{IntoValue, Value};
}

// Re-export commonly used types at crate root
pub use prelude::*;
