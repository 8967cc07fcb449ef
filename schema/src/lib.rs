//! Emend Schema Model
//!
//! The in-memory schema object the rewrite engine consumes and produces.
//!
//! Responsibilities:
//! - Type references with the non-null wrapper
//! - Field descriptors (the unit the engine rewrites)
//! - Composite, input-object, enum, and scalar type definitions
//! - Directive syntax nodes attached to descriptors
//! - The Schema type map with lookup, registration, and field replacement
//! - A builder for programmatic schema construction
//!
//! Parsing schema text is out of scope; schemas are built with
//! [`SchemaBuilder`] or assembled directly from type definitions.

mod ast;
mod builder;
mod field;
mod schema;
mod types;

pub use ast::*;
pub use builder::*;
pub use field::*;
pub use schema::*;
pub use types::*;
