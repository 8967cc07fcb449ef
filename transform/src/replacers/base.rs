//! Base replacer - the explicit no-op.

use emend_schema::FieldDef;

/// Return the descriptor unchanged.
pub(crate) fn apply(field: FieldDef) -> FieldDef {
    field
}
