//! The Schema - type lookup and field-map replacement.

use crate::{FieldDef, TypeDef};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur while manipulating a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Type does not carry fields: {0}")]
    NoFields(String),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// An in-memory schema: an ordered registry of type definitions.
///
/// Types iterate in registration order, and rewrites preserve that order,
/// so two applications of the same rules to copies of one schema produce
/// structurally identical results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    /// Type definitions by name, in registration order.
    types: IndexMap<String, TypeDef>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a schema from an already-deduplicated type map.
    pub(crate) fn from_types(types: IndexMap<String, TypeDef>) -> Self {
        Self { types }
    }

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Returns true if a type with this name is registered.
    pub fn contains_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Register a new type definition.
    pub fn add_type(&mut self, def: TypeDef) -> SchemaResult<()> {
        if self.types.contains_key(def.name()) {
            return Err(SchemaError::DuplicateTypeName(def.name().to_string()));
        }
        self.types.insert(def.name().to_string(), def);
        Ok(())
    }

    /// All type definitions, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// The number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Names of all composite object types, in registration order.
    pub fn object_type_names(&self) -> Vec<String> {
        self.types
            .values()
            .filter_map(|def| def.as_object().map(|t| t.name.clone()))
            .collect()
    }

    /// Names of all input object types, in registration order.
    pub fn input_object_type_names(&self) -> Vec<String> {
        self.types
            .values()
            .filter_map(|def| def.as_input_object().map(|t| t.name.clone()))
            .collect()
    }

    /// Names of all enum types, in registration order.
    pub fn enum_type_names(&self) -> Vec<String> {
        self.types
            .values()
            .filter_map(|def| def.as_enum().map(|t| t.name.clone()))
            .collect()
    }

    /// Replace the field map (or value map, for enums) of a named type.
    pub fn replace_fields(
        &mut self,
        type_name: &str,
        fields: IndexMap<String, FieldDef>,
    ) -> SchemaResult<()> {
        match self.types.get_mut(type_name) {
            Some(TypeDef::Object(t)) => {
                t.fields = fields;
                Ok(())
            }
            Some(TypeDef::InputObject(t)) => {
                t.fields = fields;
                Ok(())
            }
            Some(TypeDef::Enum(t)) => {
                t.values = fields;
                Ok(())
            }
            Some(TypeDef::Scalar(_)) => Err(SchemaError::NoFields(type_name.to_string())),
            None => Err(SchemaError::UnknownType(type_name.to_string())),
        }
    }
}
