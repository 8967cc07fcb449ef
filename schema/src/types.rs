//! Type references and type definitions.

use crate::FieldDef;
use indexmap::IndexMap;
use std::fmt;

/// A reference to a type, possibly wrapped in non-null or list markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type.
    Named(String),
    /// A type that may not be null.
    NonNull(Box<TypeRef>),
    /// A list of the inner type.
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap a type reference in a non-null marker.
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Wrap a type reference in a list marker.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Returns true if the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Remove one non-null layer, if present.
    pub fn unwrap_non_null(self) -> TypeRef {
        match self {
            TypeRef::NonNull(inner) => *inner,
            other => other,
        }
    }

    /// The named type under at most one non-null layer.
    ///
    /// Returns None for list types: rule matching unwraps exactly one
    /// non-null wrapper and goes no deeper.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            TypeRef::NonNull(inner) => match inner.as_ref() {
                TypeRef::Named(name) => Some(name),
                _ => None,
            },
            TypeRef::List(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
        }
    }
}

/// A composite object type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Fields by name, in declaration order.
    pub fields: IndexMap<String, FieldDef>,
}

/// An input object type.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Input fields by name, in declaration order.
    pub fields: IndexMap<String, FieldDef>,
}

/// An enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Values by name, in declaration order.
    pub values: IndexMap<String, FieldDef>,
}

/// A named scalar type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// URL of the specification this scalar conforms to, if any.
    pub specified_by_url: Option<String>,
}

impl ScalarType {
    /// Create a scalar type with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
        }
    }
}

/// A type definition registered in a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    /// Composite object type.
    Object(ObjectType),
    /// Input object type.
    InputObject(InputObjectType),
    /// Enum type.
    Enum(EnumType),
    /// Scalar type.
    Scalar(ScalarType),
}

impl TypeDef {
    /// The name of the defined type.
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Object(t) => &t.name,
            TypeDef::InputObject(t) => &t.name,
            TypeDef::Enum(t) => &t.name,
            TypeDef::Scalar(t) => &t.name,
        }
    }

    /// Get as an object type, if it is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            TypeDef::Object(t) => Some(t),
            _ => None,
        }
    }

    /// Get as an input object type, if it is one.
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            TypeDef::InputObject(t) => Some(t),
            _ => None,
        }
    }

    /// Get as an enum type, if it is one.
    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            TypeDef::Enum(t) => Some(t),
            _ => None,
        }
    }

    /// Get as a scalar type, if it is one.
    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            TypeDef::Scalar(t) => Some(t),
            _ => None,
        }
    }
}
