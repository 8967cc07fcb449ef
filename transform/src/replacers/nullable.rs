//! Nullability replacer.

use crate::{TransformResult, ValidationError};
use emend_core::{FieldKind, Value, EXT_NULLABLE};
use emend_schema::{FieldDef, TypeRef};

/// Rewrite the non-null wrapper state of a composite or input field.
///
/// Requesting the state already in effect leaves the type untouched, but
/// the requested flag is still recorded in extension metadata, so repeated
/// application stays observable.
pub(crate) fn apply(
    mut field: FieldDef,
    kind: FieldKind,
    requested: bool,
) -> TransformResult<FieldDef> {
    if !kind.supports_nullable() {
        return Err(ValidationError::illegal_nullable(kind).into());
    }

    if let Some(ty) = field.ty.take() {
        field.ty = Some(match (requested, ty.is_non_null()) {
            (true, true) => ty.unwrap_non_null(),
            (false, false) => TypeRef::non_null(ty),
            _ => ty,
        });
    }

    field
        .extensions
        .insert(EXT_NULLABLE.to_string(), Value::Bool(requested));
    Ok(field)
}
