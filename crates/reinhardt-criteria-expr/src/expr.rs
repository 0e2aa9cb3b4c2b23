//! Expression nodes for criteria queries.
//!
//! - [`Expression`]: the tree, and [`Renderable`]: the contract every node implements
//! - [`LiteralExpr`]: constant values, bound through generated parameters
//! - [`ParameterExpr`]: parameters declared by the caller
//! - [`SearchedCase`] and [`SimpleCase`]: CASE expressions
//! - [`Comparison`], [`Junction`] and [`NullTest`]: predicates
//! - [`ExprTrait`]: fluent predicate construction

mod expr_trait;
mod expression;
mod function;
mod literal;
mod parameter;
mod path;
mod predicate;
mod searched_case;
mod simple_case;

pub use expr_trait::ExprTrait;
pub use expression::{CaseResult, Expression, IntoCaseResult, Renderable};
pub use function::FunctionExpr;
pub use literal::LiteralExpr;
pub use parameter::{ParameterExpr, ParameterKey};
pub use path::PathExpr;
pub use predicate::{Comparison, ComparisonOperator, Junction, JunctionType, NullTest};
pub use searched_case::{SearchedCase, WhenClause};
pub use simple_case::SimpleCase;
