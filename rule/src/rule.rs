//! Rules and the rule-set matcher.

use crate::{ReplacerSpec, RuleConfig, RuleError, RuleResult, WILDCARD};
use emend_core::FieldKind;

/// A single rewrite rule: a type target, optional field patterns, and an
/// ordered replacer chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The type this rule targets, or `"*"` for every type.
    pub type_name: String,
    /// Field patterns. When absent, the rule is a type-level fallback that
    /// applies to every field whose return type matches `type_name`.
    pub fields: Option<Vec<String>>,
    /// Replacers, applied in declaration order.
    pub replacers: Vec<ReplacerSpec>,
}

impl Rule {
    /// Create a type-level fallback rule with no field restriction.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: None,
            replacers: Vec::new(),
        }
    }

    /// Restrict the rule to the given field patterns.
    pub fn fields<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Append a replacer.
    pub fn replacer(mut self, spec: ReplacerSpec) -> Self {
        self.replacers.push(spec);
        self
    }

    /// Returns true if this rule names the given field of the given type.
    ///
    /// A pattern matches on the exact field name, on `"*"`, or - for
    /// arguments, which are visited as `"field.arg"` - on `"*.arg"`.
    fn matches_field(&self, type_name: &str, field_name: &str, kind: FieldKind) -> bool {
        if self.type_name != type_name && self.type_name != WILDCARD {
            return false;
        }
        let Some(patterns) = &self.fields else {
            return false;
        };
        patterns.iter().any(|pattern| {
            if pattern == field_name || pattern == WILDCARD {
                return true;
            }
            if kind == FieldKind::Argument {
                if let Some(wildcard_arg) = pattern.strip_prefix("*.") {
                    let arg_name = field_name.rsplit('.').next().unwrap_or(field_name);
                    return wildcard_arg == arg_name;
                }
            }
            false
        })
    }

    /// Returns true if this rule is a type-level fallback for the given
    /// return type.
    fn matches_return_type(&self, return_type: Option<&str>) -> bool {
        self.fields.is_none() && return_type == Some(self.type_name.as_str())
    }
}

/// An ordered, immutable collection of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule-set from already-classified rules.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Build a rule-set from raw configuration, classifying every replacer.
    pub fn from_configs(configs: Vec<RuleConfig>) -> RuleResult<Self> {
        let mut rules = Vec::with_capacity(configs.len());
        for config in configs {
            if let Some(patterns) = &config.fields {
                if patterns.iter().any(String::is_empty) {
                    return Err(RuleError::empty_field_pattern(config.type_name));
                }
            }
            rules.push(Rule {
                type_name: config.type_name,
                fields: config.fields,
                replacers: config
                    .replacers
                    .into_iter()
                    .map(ReplacerSpec::classify)
                    .collect(),
            });
        }
        Ok(Self { rules })
    }

    /// Parse a JSON array of rule configs and build a rule-set from it.
    pub fn from_json(json: &str) -> RuleResult<Self> {
        let configs: Vec<RuleConfig> = serde_json::from_str(json)?;
        Self::from_configs(configs)
    }

    /// The rules, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the rule-set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the rules that apply to one field descriptor.
    ///
    /// Field-specific matches come first, then type-level fallbacks matched
    /// on the field's return type; within each group, declaration order is
    /// preserved. A field can legitimately collect several rules - they are
    /// all folded over the descriptor, left to right.
    pub fn matches(
        &self,
        type_name: &str,
        field_name: &str,
        kind: FieldKind,
        return_type: Option<&str>,
    ) -> Vec<&Rule> {
        let mut matched: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.matches_field(type_name, field_name, kind))
            .collect();
        matched.extend(
            self.rules
                .iter()
                .filter(|rule| rule.matches_return_type(return_type)),
        );
        matched
    }
}
