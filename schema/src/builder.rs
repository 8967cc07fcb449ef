//! SchemaBuilder for constructing schemas programmatically.

use crate::{
    EnumType, FieldDef, InputObjectType, ObjectType, ScalarType, Schema, SchemaError,
    SchemaResult, TypeDef,
};
use indexmap::IndexMap;

/// Builder for assembling a [`Schema`] type by type.
///
/// Each type is opened with a sub-builder and committed with `done()`, which
/// is where duplicate names are rejected.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: IndexMap<String, TypeDef>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a composite object type.
    pub fn object(&mut self, name: impl Into<String>) -> ObjectTypeBuilder<'_> {
        ObjectTypeBuilder {
            builder: self,
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    /// Start an input object type.
    pub fn input_object(&mut self, name: impl Into<String>) -> InputObjectTypeBuilder<'_> {
        InputObjectTypeBuilder {
            builder: self,
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    /// Start an enum type.
    pub fn enum_type(&mut self, name: impl Into<String>) -> EnumTypeBuilder<'_> {
        EnumTypeBuilder {
            builder: self,
            name: name.into(),
            description: None,
            values: IndexMap::new(),
        }
    }

    /// Start a scalar type.
    pub fn scalar(&mut self, name: impl Into<String>) -> ScalarTypeBuilder<'_> {
        ScalarTypeBuilder {
            builder: self,
            scalar: ScalarType::new(name),
        }
    }

    /// Finish building the schema. Names were deduplicated at each done().
    pub fn build(self) -> Schema {
        Schema::from_types(self.types)
    }

    fn commit(&mut self, def: TypeDef) -> SchemaResult<()> {
        if self.types.contains_key(def.name()) {
            return Err(SchemaError::DuplicateTypeName(def.name().to_string()));
        }
        self.types.insert(def.name().to_string(), def);
        Ok(())
    }
}

/// Builder for a composite object type.
pub struct ObjectTypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    name: String,
    description: Option<String>,
    fields: IndexMap<String, FieldDef>,
}

impl<'a> ObjectTypeBuilder<'a> {
    /// Set the type description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.insert(name.into(), def);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> SchemaResult<()> {
        self.builder.commit(TypeDef::Object(ObjectType {
            name: self.name,
            description: self.description,
            fields: self.fields,
        }))
    }
}

/// Builder for an input object type.
pub struct InputObjectTypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    name: String,
    description: Option<String>,
    fields: IndexMap<String, FieldDef>,
}

impl<'a> InputObjectTypeBuilder<'a> {
    /// Set the type description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add an input field.
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.insert(name.into(), def);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> SchemaResult<()> {
        self.builder.commit(TypeDef::InputObject(InputObjectType {
            name: self.name,
            description: self.description,
            fields: self.fields,
        }))
    }
}

/// Builder for an enum type.
pub struct EnumTypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    name: String,
    description: Option<String>,
    values: IndexMap<String, FieldDef>,
}

impl<'a> EnumTypeBuilder<'a> {
    /// Set the type description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add a plain value.
    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.insert(name.into(), FieldDef::enum_value());
        self
    }

    /// Add a value with a customized descriptor.
    pub fn value_def(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.values.insert(name.into(), def);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> SchemaResult<()> {
        self.builder.commit(TypeDef::Enum(EnumType {
            name: self.name,
            description: self.description,
            values: self.values,
        }))
    }
}

/// Builder for a scalar type.
pub struct ScalarTypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    scalar: ScalarType,
}

impl<'a> ScalarTypeBuilder<'a> {
    /// Set the scalar description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.scalar.description = Some(text.into());
        self
    }

    /// Set the specification URL.
    pub fn specified_by(mut self, url: impl Into<String>) -> Self {
        self.scalar.specified_by_url = Some(url.into());
        self
    }

    /// Finish building this scalar.
    pub fn done(self) -> SchemaResult<()> {
        self.builder.commit(TypeDef::Scalar(self.scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    #[test]
    fn test_build_small_schema() {
        let mut builder = SchemaBuilder::new();
        builder
            .object("Track")
            .description("A single audio track")
            .field("id", FieldDef::new(TypeRef::non_null(TypeRef::named("ID"))))
            .field("title", FieldDef::new(TypeRef::named("String")))
            .done()
            .unwrap();
        builder
            .enum_type("Genre")
            .value("ROCK")
            .value("JAZZ")
            .done()
            .unwrap();
        builder.scalar("Slug").description("URL-safe name").done().unwrap();

        let schema = builder.build();
        assert_eq!(schema.type_count(), 3);

        let track = schema.get_type("Track").and_then(TypeDef::as_object).unwrap();
        assert_eq!(track.fields.len(), 2);
        assert!(track.fields["id"].ty.as_ref().unwrap().is_non_null());

        let genre = schema.get_type("Genre").and_then(TypeDef::as_enum).unwrap();
        assert_eq!(genre.values.keys().collect::<Vec<_>>(), vec!["ROCK", "JAZZ"]);
    }

    #[test]
    fn test_duplicate_rejected_at_done() {
        let mut builder = SchemaBuilder::new();
        builder.object("Track").done().unwrap();
        let err = builder.object("Track").done().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateTypeName(_)));
    }
}
