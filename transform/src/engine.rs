//! The rewrite engine - coordinates the two-phase apply.
//!
//! Phase 1 walks the rule-set and resolves every type-substitution target,
//! registering catalogue scalars into the schema as needed. Phase 2 visits
//! every composite field, input field, enum value, and field argument, in
//! that order, folding the replacer chains of all matching rules over each
//! descriptor.
//!
//! `apply` is all-or-nothing: the first error aborts the transform and no
//! schema is returned, so a partially rewritten one never escapes.

use crate::error::TransformResult;
use crate::replacers;
use crate::SchemaTransform;
use emend_core::FieldKind;
use emend_rule::{ReplacerSpec, RuleError, RuleSet};
use emend_schema::{FieldDef, Schema, TypeDef, TypeRef};
use std::collections::HashSet;
use tracing::{debug, trace};

/// The rewrite engine.
///
/// Holds an immutable rule-set; one engine can be applied to any number of
/// schemas sequentially.
pub struct RewriteEngine {
    rules: RuleSet,
}

impl RewriteEngine {
    /// Create an engine over a rule-set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create an engine from a JSON rule-set.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::from_json(json)?))
    }

    /// The rule-set this engine applies.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rewrite a schema. Synchronous and all-or-nothing.
    pub fn apply(&self, schema: Schema) -> TransformResult<Schema> {
        let (schema, resolved) = self.extend_schema(schema)?;
        self.rewrite_fields(schema, &resolved)
    }

    /// Phase 1: resolve type-substitution targets, registering catalogue
    /// scalars into the schema. Names that resolve nowhere are recorded by
    /// omission; phase 2 reports them if a field actually uses one.
    fn extend_schema(&self, mut schema: Schema) -> TransformResult<(Schema, HashSet<String>)> {
        let mut resolved = HashSet::new();
        for rule in self.rules.iter() {
            for spec in &rule.replacers {
                let ReplacerSpec::Type(target) = spec else {
                    continue;
                };
                if resolved.contains(target) {
                    continue;
                }
                let (extended, ok) = replacers::extend_schema(target, schema)?;
                schema = extended;
                if ok {
                    resolved.insert(target.clone());
                } else {
                    debug!(target_type = %target, "type-substitution target did not resolve");
                }
            }
        }
        Ok((schema, resolved))
    }

    /// Phase 2: visit composite fields, input fields, enum values, and
    /// field arguments, in that fixed order.
    fn rewrite_fields(
        &self,
        mut schema: Schema,
        resolved: &HashSet<String>,
    ) -> TransformResult<Schema> {
        debug!(rules = self.rules.len(), types = schema.type_count(), "rewriting schema");

        for type_name in schema.object_type_names() {
            let Some(object) = schema.get_type(&type_name).and_then(TypeDef::as_object) else {
                continue;
            };
            let mut fields = object.fields.clone();
            for (field_name, field) in fields.iter_mut() {
                *field = self.rewrite_one(
                    &type_name,
                    field_name,
                    FieldKind::Composite,
                    field.clone(),
                    resolved,
                )?;
            }
            schema.replace_fields(&type_name, fields)?;
        }

        for type_name in schema.input_object_type_names() {
            let Some(input) = schema.get_type(&type_name).and_then(TypeDef::as_input_object)
            else {
                continue;
            };
            let mut fields = input.fields.clone();
            for (field_name, field) in fields.iter_mut() {
                *field = self.rewrite_one(
                    &type_name,
                    field_name,
                    FieldKind::Input,
                    field.clone(),
                    resolved,
                )?;
            }
            schema.replace_fields(&type_name, fields)?;
        }

        for type_name in schema.enum_type_names() {
            let Some(enum_type) = schema.get_type(&type_name).and_then(TypeDef::as_enum) else {
                continue;
            };
            let mut values = enum_type.values.clone();
            for (value_name, value) in values.iter_mut() {
                *value = self.rewrite_one(
                    &type_name,
                    value_name,
                    FieldKind::Enum,
                    value.clone(),
                    resolved,
                )?;
            }
            schema.replace_fields(&type_name, values)?;
        }

        // Arguments are visited through their owning composite field and
        // matched under the qualified "field.arg" name.
        for type_name in schema.object_type_names() {
            let Some(object) = schema.get_type(&type_name).and_then(TypeDef::as_object) else {
                continue;
            };
            let mut fields = object.fields.clone();
            for (field_name, field) in fields.iter_mut() {
                if field.arguments.is_empty() {
                    continue;
                }
                let mut arguments = field.arguments.clone();
                for (arg_name, arg) in arguments.iter_mut() {
                    let qualified = format!("{}.{}", field_name, arg_name);
                    *arg = self.rewrite_one(
                        &type_name,
                        &qualified,
                        FieldKind::Argument,
                        arg.clone(),
                        resolved,
                    )?;
                }
                field.arguments = arguments;
            }
            schema.replace_fields(&type_name, fields)?;
        }

        Ok(schema)
    }

    /// Fold the replacer chains of every matching rule over one descriptor.
    fn rewrite_one(
        &self,
        type_name: &str,
        field_name: &str,
        kind: FieldKind,
        mut field: FieldDef,
        resolved: &HashSet<String>,
    ) -> TransformResult<FieldDef> {
        let return_type = field
            .ty
            .as_ref()
            .and_then(TypeRef::base_name)
            .map(str::to_string);
        let matched = self
            .rules
            .matches(type_name, field_name, kind, return_type.as_deref());
        if matched.is_empty() {
            return Ok(field);
        }

        trace!(%kind, type_name, field_name, rules = matched.len(), "applying matched rules");
        for rule in matched {
            for spec in &rule.replacers {
                field = replacers::modify_field(spec, field, kind, resolved)?;
            }
        }
        Ok(field)
    }
}

impl SchemaTransform for RewriteEngine {
    fn transform_schema(&self, schema: Schema) -> TransformResult<Schema> {
        self.apply(schema)
    }
}
