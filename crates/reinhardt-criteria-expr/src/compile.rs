//! Compilation of expression trees into query text.
//!
//! - [`RenderingContext`]: parameter names and bindings for one compilation
//! - [`ParameterRegistry`]: explicit parameters found by the registration walk
//! - [`CriteriaQueryCompiler`] and [`CompiledQuery`]: the compiler and its output
//! - [`PreparedQuery`] and [`TypedQuery`]: applying bindings to a statement

mod binding;
mod compiler;
mod registry;
mod rendering_context;

pub use binding::{ExplicitParameterInfo, ImplicitParameterBinding, PreparedQuery, TypedQuery};
pub use compiler::{CompiledQuery, CriteriaQueryCompiler};
pub use registry::ParameterRegistry;
pub use rendering_context::RenderingContext;
