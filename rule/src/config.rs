//! Raw rule configuration shapes.
//!
//! These structs mirror the JSON a rule-set is authored in. They exist only
//! at the load boundary; classification into [`ReplacerSpec`] happens once
//! and the raw shapes are discarded.
//!
//! [`ReplacerSpec`]: crate::ReplacerSpec

use emend_core::Value;
use indexmap::IndexMap;
use serde::Deserialize;

/// One rule as authored in configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// The type the rule targets, or `"*"` for every type.
    pub type_name: String,
    /// Field patterns: exact names, `"*"`, or `"*.argName"`. When absent,
    /// the rule is a type-level fallback matched by return type only.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    /// Replacer configs, applied in order.
    #[serde(default)]
    pub replacers: Vec<ReplacerConfig>,
}

/// One replacer as authored in configuration.
///
/// Exactly one of the optional keys is honored, chosen by the fixed
/// precedence order documented on [`ReplacerSpec::classify`].
///
/// [`ReplacerSpec::classify`]: crate::ReplacerSpec::classify
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacerConfig {
    /// New description text, or `false` to clear it.
    #[serde(default)]
    pub description: Option<crate::BoolOrString>,
    /// Name of the type to substitute.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Deprecation: `true` for the stock reason, a string for a custom
    /// reason, `false` to clear.
    #[serde(default)]
    pub deprecated: Option<crate::BoolOrString>,
    /// Requested nullability.
    #[serde(default)]
    pub nullable: Option<bool>,
    /// New default value, taken verbatim.
    #[serde(default)]
    pub default: Option<Value>,
    /// Extension metadata to shallow-merge into the descriptor.
    #[serde(default)]
    pub extensions: Option<IndexMap<String, Value>>,
    /// Directive annotation to attach.
    #[serde(default)]
    pub directive: Option<DirectiveConfig>,
}

/// A directive annotation as authored in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectiveConfig {
    /// Directive name, without the leading `@`.
    pub name: String,
    /// Arguments in declaration order.
    #[serde(default)]
    pub args: IndexMap<String, Value>,
}
