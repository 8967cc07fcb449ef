//! Transform error taxonomy.
//!
//! Both families are configuration-authoring errors and abort the whole
//! transform: the caller never receives a partially rewritten schema.

use emend_core::FieldKind;
use emend_schema::SchemaError;
use thiserror::Error;

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// A rule applied a replacer that is illegal for the field's kind, or
/// carried a malformed payload.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Description must be a string or false")]
    InvalidDescription,

    #[error("Nullable can only be set for composite and input fields, got {kind}")]
    IllegalNullable { kind: FieldKind },

    #[error("Default values can only be set for input fields and arguments, got {kind}")]
    IllegalDefault { kind: FieldKind },

    #[error("Type substitution cannot be applied to {kind}")]
    IllegalType { kind: FieldKind },
}

impl ValidationError {
    pub fn illegal_nullable(kind: FieldKind) -> Self {
        Self::IllegalNullable { kind }
    }

    pub fn illegal_default(kind: FieldKind) -> Self {
        Self::IllegalDefault { kind }
    }

    pub fn illegal_type(kind: FieldKind) -> Self {
        Self::IllegalType { kind }
    }
}

/// A type replacer referenced a name absent from both the schema and the
/// scalar catalogue. Raised only when a field actually uses the name.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Type not found: {name}")]
    TypeNotFound { name: String },
}

impl ResolutionError {
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }
}

/// Any error a transform can abort with.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
