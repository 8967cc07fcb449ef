//! Description replacer.

use crate::{TransformResult, ValidationError};
use emend_core::{Value, EXT_DESCRIPTION};
use emend_rule::BoolOrString;
use emend_schema::FieldDef;

/// Rewrite or clear the description.
///
/// A falsy payload clears the description. A non-empty string sets it and
/// mirrors the text into extension metadata under the well-known key.
/// A boolean `true` carries no text and is a contract violation.
pub(crate) fn apply(mut field: FieldDef, payload: &BoolOrString) -> TransformResult<FieldDef> {
    if payload.is_falsy() {
        field.description = None;
        return Ok(field);
    }

    match payload {
        BoolOrString::Bool(_) => Err(ValidationError::InvalidDescription.into()),
        BoolOrString::Text(text) => {
            field.description = Some(text.clone());
            field
                .extensions
                .insert(EXT_DESCRIPTION.to_string(), Value::String(text.clone()));
            Ok(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;
    use emend_schema::TypeRef;

    fn field() -> FieldDef {
        FieldDef::new(TypeRef::named("String")).description("old text")
    }

    #[test]
    fn test_clear_description() {
        let rewritten = apply(field(), &BoolOrString::Bool(false)).unwrap();
        assert_eq!(rewritten.description, None);
        assert!(rewritten.extensions.is_empty());
    }

    #[test]
    fn test_set_description_mirrors_into_extensions() {
        let rewritten = apply(field(), &BoolOrString::from("new text")).unwrap();
        assert_eq!(rewritten.description.as_deref(), Some("new text"));
        assert_eq!(
            rewritten.extensions.get(EXT_DESCRIPTION),
            Some(&Value::String("new text".into()))
        );
    }

    #[test]
    fn test_boolean_enable_is_rejected() {
        let err = apply(field(), &BoolOrString::Bool(true)).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Validation(ValidationError::InvalidDescription)
        ));
        assert!(err.to_string().contains("string or false"));
    }
}
