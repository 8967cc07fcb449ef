//! Default-value replacer.

use crate::{TransformResult, ValidationError};
use emend_core::{FieldKind, Value};
use emend_schema::FieldDef;

/// Set the default value of an input field or argument.
///
/// The value is taken verbatim; there is no coercion against the field's
/// declared type.
pub(crate) fn apply(
    mut field: FieldDef,
    kind: FieldKind,
    value: &Value,
) -> TransformResult<FieldDef> {
    if !kind.supports_default() {
        return Err(ValidationError::illegal_default(kind).into());
    }
    field.default_value = Some(value.clone());
    Ok(field)
}
