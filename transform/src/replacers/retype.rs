//! Type-substitution replacer.
//!
//! The only strategy with a schema-extension step: the target type must be
//! resolvable by name before any field can reference it. Resolution misses
//! are not reported here - a name nothing references is harmless, so the
//! failure surfaces from `apply` instead.

use crate::{ResolutionError, TransformResult, ValidationError};
use emend_core::FieldKind;
use emend_schema::{FieldDef, Schema, TypeDef, TypeRef};
use std::collections::HashSet;

/// Resolve the target name against the schema, then the scalar catalogue.
///
/// A catalogue hit is registered into the schema so fields can reference
/// it. Returns whether the name resolved.
pub(crate) fn extend_schema(target: &str, mut schema: Schema) -> TransformResult<(Schema, bool)> {
    if schema.contains_type(target) {
        return Ok((schema, true));
    }
    match emend_scalars::find(target) {
        Some(scalar) => {
            schema.add_type(TypeDef::Scalar(scalar))?;
            Ok((schema, true))
        }
        None => Ok((schema, false)),
    }
}

/// Replace the field's base type, preserving a non-null wrapper.
pub(crate) fn apply(
    mut field: FieldDef,
    kind: FieldKind,
    target: &str,
    resolved: &HashSet<String>,
) -> TransformResult<FieldDef> {
    if !kind.supports_type_substitution() {
        return Err(ValidationError::illegal_type(kind).into());
    }
    if !resolved.contains(target) {
        return Err(ResolutionError::type_not_found(target).into());
    }

    if let Some(ty) = field.ty.take() {
        let replacement = TypeRef::named(target);
        field.ty = Some(if ty.is_non_null() {
            TypeRef::non_null(replacement)
        } else {
            replacement
        });
    }
    Ok(field)
}
