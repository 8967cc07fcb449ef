//! Deprecation replacer.

use emend_core::DEFAULT_DEPRECATION_REASON;
use emend_rule::BoolOrString;
use emend_schema::FieldDef;

/// Rewrite or clear the deprecation reason.
///
/// Falsy payloads clear the reason, `true` applies the stock reason, and a
/// string is taken verbatim.
pub(crate) fn apply(mut field: FieldDef, payload: &BoolOrString) -> FieldDef {
    field.deprecation_reason = match payload {
        p if p.is_falsy() => None,
        BoolOrString::Bool(_) => Some(DEFAULT_DEPRECATION_REASON.to_string()),
        BoolOrString::Text(text) => Some(text.clone()),
    };
    field
}
