//! Rule error types.

use thiserror::Error;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while loading a rule-set.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid rule configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rule for type {type_name} has an empty field pattern")]
    EmptyFieldPattern { type_name: String },
}

impl RuleError {
    pub fn empty_field_pattern(type_name: impl Into<String>) -> Self {
        Self::EmptyFieldPattern {
            type_name: type_name.into(),
        }
    }
}
