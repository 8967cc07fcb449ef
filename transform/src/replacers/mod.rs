//! Replacer strategy implementations.
//!
//! Each mutation strategy lives in its own module and is dispatched from
//! [`modify_field`] by matching on the classified replacer union. Only the
//! type replacer participates in the schema-extension phase; its
//! `extend_schema` is re-exported for the engine.

mod base;
mod default;
mod deprecated;
mod description;
mod directive;
mod extensions;
mod nullable;
mod retype;

pub(crate) use retype::extend_schema;

use crate::TransformResult;
use emend_core::FieldKind;
use emend_rule::ReplacerSpec;
use emend_schema::FieldDef;
use std::collections::HashSet;

/// Apply one replacer to one field descriptor.
///
/// `resolved` holds the type names the schema-extension phase resolved;
/// only the type replacer consults it.
pub(crate) fn modify_field(
    spec: &ReplacerSpec,
    field: FieldDef,
    kind: FieldKind,
    resolved: &HashSet<String>,
) -> TransformResult<FieldDef> {
    match spec {
        ReplacerSpec::Base => Ok(base::apply(field)),
        ReplacerSpec::Description(payload) => description::apply(field, payload),
        ReplacerSpec::Deprecated(payload) => Ok(deprecated::apply(field, payload)),
        ReplacerSpec::Nullable(requested) => nullable::apply(field, kind, *requested),
        ReplacerSpec::Default(value) => default::apply(field, kind, value),
        ReplacerSpec::Extensions(entries) => Ok(extensions::apply(field, entries)),
        ReplacerSpec::Directive { name, args } => Ok(directive::apply(field, name, args)),
        ReplacerSpec::Type(target) => retype::apply(field, kind, target, resolved),
    }
}
