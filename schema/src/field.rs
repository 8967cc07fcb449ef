//! Field descriptors.

use crate::{FieldSyntax, TypeRef};
use emend_core::{Extensions, Value};
use indexmap::IndexMap;

/// The descriptor of a single field, input field, enum value, or argument.
///
/// This is the unit the rewrite engine operates on. Strategies never mutate
/// a descriptor in place; each returns a new descriptor built from the
/// previous one plus the requested change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDef {
    /// The value type. Absent for enum values, which carry none.
    pub ty: Option<TypeRef>,
    /// Optional description text.
    pub description: Option<String>,
    /// Deprecation reason; None means not deprecated.
    pub deprecation_reason: Option<String>,
    /// Default value. Only meaningful for input fields and arguments.
    pub default_value: Option<Value>,
    /// Extension metadata, in insertion order.
    pub extensions: Extensions,
    /// Syntax node holding attached directives. Created lazily.
    pub syntax: Option<FieldSyntax>,
    /// Arguments by name. Only composite fields carry arguments.
    pub arguments: IndexMap<String, FieldDef>,
}

impl FieldDef {
    /// Create a field descriptor with the given type.
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Create a descriptor for an enum value, which has no type.
    pub fn enum_value() -> Self {
        Self::default()
    }

    /// Set the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Mark as deprecated with the given reason.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Add an extension metadata entry.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Add an argument.
    pub fn argument(mut self, name: impl Into<String>, arg: FieldDef) -> Self {
        self.arguments.insert(name.into(), arg);
        self
    }

    /// The directives attached to this descriptor, if any.
    pub fn directives(&self) -> &[crate::DirectiveNode] {
        self.syntax
            .as_ref()
            .map(|s| s.directives.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emend_core::Value;

    #[test]
    fn test_field_construction() {
        let field = FieldDef::new(TypeRef::named("String"))
            .description("Track title")
            .extension("owner", "catalog-team");

        assert_eq!(field.ty, Some(TypeRef::named("String")));
        assert_eq!(field.description.as_deref(), Some("Track title"));
        assert_eq!(
            field.extensions.get("owner"),
            Some(&Value::String("catalog-team".into()))
        );
        assert!(field.directives().is_empty());
    }

    #[test]
    fn test_enum_value_has_no_type() {
        let value = FieldDef::enum_value().deprecated("use LOSSLESS");
        assert!(value.ty.is_none());
        assert_eq!(value.deprecation_reason.as_deref(), Some("use LOSSLESS"));
    }

    #[test]
    fn test_arguments() {
        let field = FieldDef::new(TypeRef::named("Track"))
            .argument("limit", FieldDef::new(TypeRef::named("Int")).default_value(10i64));

        let limit = &field.arguments["limit"];
        assert_eq!(limit.default_value, Some(Value::Int(10)));
    }
}
