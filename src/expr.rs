//! Expression and query module.
//!
//! This module provides the criteria expression nodes, queries and their
//! compiler.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_criteria::expr::{ExprTrait, PathExpr, SearchedCase};
//!
//! let case = SearchedCase::new()
//!     .when(PathExpr::new("p", "score").gte(90i32), "A")
//!     .otherwise("B");
//! ```

pub use reinhardt_criteria_expr::*;
