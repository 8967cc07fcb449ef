//! Extension-metadata replacer.

use emend_core::Value;
use emend_schema::FieldDef;
use indexmap::IndexMap;

/// Shallow-merge entries into the descriptor's extension metadata.
///
/// Later keys overwrite earlier ones; an empty payload is a no-op.
pub(crate) fn apply(mut field: FieldDef, entries: &IndexMap<String, Value>) -> FieldDef {
    if entries.is_empty() {
        return field;
    }
    for (key, value) in entries {
        field.extensions.insert(key.clone(), value.clone());
    }
    field
}
