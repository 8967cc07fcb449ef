//! Well-known keys and messages shared across emend components.
//!
//! These constants keep the transform strategies and the tests that observe
//! them in agreement.

/// Deprecation reason applied when a rule enables deprecation without text.
pub const DEFAULT_DEPRECATION_REASON: &str = "Deprecated";

/// Extension-metadata key mirroring a rewritten description.
pub const EXT_DESCRIPTION: &str = "description";

/// Extension-metadata key recording the most recently requested nullability.
pub const EXT_NULLABLE: &str = "nullable";
