//! Emend Transform
//!
//! Rewrite a typed schema according to a declarative rule-set.
//!
//! Responsibilities:
//! - The two-phase apply: schema extension first, then per-field rewrite
//! - Strategy dispatch over classified replacers
//! - Literal-value encoding for directive arguments
//! - The transform-pipeline seam the host composes stages on
//!
//! # Module Structure
//!
//! - `engine` - The RewriteEngine coordinating both phases
//! - `replacers/` - Individual strategy implementations
//! - `encoder` - Runtime value to literal-node classification
//! - `pipeline` - The SchemaTransform trait and stage composition
//! - `error` - The ValidationError/ResolutionError taxonomy

mod encoder;
mod engine;
mod error;
mod pipeline;
mod replacers;

pub use encoder::encode_value;
pub use engine::RewriteEngine;
pub use error::{ResolutionError, TransformError, TransformResult, ValidationError};
pub use pipeline::{SchemaTransform, TransformPipeline};
