//! Runtime value to literal-node classification.
//!
//! Directive arguments are authored as plain values but embedded as typed
//! literal nodes. Classification order is part of the engine's contract:
//! booleans first, then falsy values and the literal string `"null"`, then
//! anything that coerces to a number, then containers as canonical JSON,
//! then the string fallback. The numeric step deliberately captures
//! numeric-looking strings, so `"2"` encodes as an Int literal, not a
//! String one.

use emend_core::Value;
use emend_schema::ConstValue;

/// Encode a runtime value as a literal node.
pub fn encode_value(value: &Value) -> ConstValue {
    // Booleans first, so `false` is not swallowed by the falsy rule.
    if let Value::Bool(b) = value {
        return ConstValue::Boolean(*b);
    }

    if is_falsy(value) {
        return ConstValue::Null;
    }

    if let Some(node) = encode_numeric(value) {
        return node;
    }

    match value {
        Value::List(_) | Value::Object(_) => ConstValue::String(value.to_json()),
        Value::String(s) => ConstValue::String(s.clone()),
        // Non-finite floats fall through the numeric step.
        other => ConstValue::String(other.to_string()),
    }
}

/// Null, zero, the empty string, and the literal string `"null"`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Int(i) => *i == 0,
        Value::Float(f) => *f == 0.0 || f.is_nan(),
        Value::String(s) => s.is_empty() || s == "null",
        _ => false,
    }
}

/// Encode values that coerce to a number.
///
/// A float with no fractional remainder becomes an Int node. Strings keep
/// their source text as the node text, so `"2.0"` yields an Int node whose
/// text is `"2.0"`.
fn encode_numeric(value: &Value) -> Option<ConstValue> {
    match value {
        Value::Int(i) => Some(ConstValue::Int(i.to_string())),
        Value::Float(f) if f.is_finite() => {
            if f.fract() == 0.0 {
                Some(ConstValue::Int(f.to_string()))
            } else {
                Some(ConstValue::Float(f.to_string()))
            }
        }
        Value::String(s) => match s.parse::<f64>() {
            Ok(parsed) if !parsed.is_nan() => {
                if parsed.fract() == 0.0 {
                    Some(ConstValue::Int(s.clone()))
                } else {
                    Some(ConstValue::Float(s.clone()))
                }
            }
            _ => None,
        },
        _ => None,
    }
}
