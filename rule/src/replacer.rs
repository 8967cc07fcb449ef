//! The closed replacer union.

use crate::{DirectiveConfig, ReplacerConfig};
use emend_core::Value;
use indexmap::IndexMap;
use serde::Deserialize;

/// A payload that may be authored as a boolean toggle or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoolOrString {
    /// Boolean form.
    Bool(bool),
    /// String form.
    Text(String),
}

impl BoolOrString {
    /// Returns true for `false` and for the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            BoolOrString::Bool(b) => !b,
            BoolOrString::Text(s) => s.is_empty(),
        }
    }
}

impl From<bool> for BoolOrString {
    fn from(b: bool) -> Self {
        BoolOrString::Bool(b)
    }
}

impl From<&str> for BoolOrString {
    fn from(s: &str) -> Self {
        BoolOrString::Text(s.to_string())
    }
}

/// One mutation a rule requests, classified from configuration exactly once.
///
/// Dispatching over this union replaces the key-presence probing the raw
/// config shape would otherwise force on every field visit.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacerSpec {
    /// No-op.
    Base,
    /// Rewrite or clear the description.
    Description(BoolOrString),
    /// Substitute the field's base type by name.
    Type(String),
    /// Rewrite or clear the deprecation reason.
    Deprecated(BoolOrString),
    /// Rewrite nullability.
    Nullable(bool),
    /// Set the default value verbatim.
    Default(Value),
    /// Shallow-merge extension metadata.
    Extensions(IndexMap<String, Value>),
    /// Attach a directive annotation.
    Directive {
        /// Directive name, without the leading `@`.
        name: String,
        /// Arguments in declaration order.
        args: IndexMap<String, Value>,
    },
}

impl ReplacerSpec {
    /// Classify a raw config object into exactly one variant.
    ///
    /// Precedence when several keys are present:
    /// description, type, deprecated, nullable, default, extensions,
    /// directive, then the no-op base case.
    pub fn classify(config: ReplacerConfig) -> Self {
        if let Some(description) = config.description {
            return ReplacerSpec::Description(description);
        }
        if let Some(type_name) = config.type_name {
            return ReplacerSpec::Type(type_name);
        }
        if let Some(deprecated) = config.deprecated {
            return ReplacerSpec::Deprecated(deprecated);
        }
        if let Some(nullable) = config.nullable {
            return ReplacerSpec::Nullable(nullable);
        }
        if let Some(default) = config.default {
            return ReplacerSpec::Default(default);
        }
        if let Some(extensions) = config.extensions {
            return ReplacerSpec::Extensions(extensions);
        }
        if let Some(DirectiveConfig { name, args }) = config.directive {
            return ReplacerSpec::Directive { name, args };
        }
        ReplacerSpec::Base
    }
}
