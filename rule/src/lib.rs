//! Emend Rules
//!
//! The rule configuration model and matcher.
//!
//! Responsibilities:
//! - Deserialize JSON-shaped rule configurations
//! - Classify each replacer config into a closed tagged union, once,
//!   at load time
//! - Resolve which rules apply to a given (type, field, kind) triple,
//!   honoring wildcards and type-level fallback rules

mod config;
mod error;
mod replacer;
mod rule;

pub use config::{DirectiveConfig, ReplacerConfig, RuleConfig};
pub use error::{RuleError, RuleResult};
pub use replacer::{BoolOrString, ReplacerSpec};
pub use rule::{Rule, RuleSet};

/// The field pattern matching every field of a type.
pub const WILDCARD: &str = "*";
