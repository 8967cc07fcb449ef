//! Field-kind enumeration.
//!
//! Every descriptor the engine rewrites belongs to one of four kinds, and a
//! kind determines which mutation strategies are legal for it.

use std::fmt;

/// The kind of schema element a field descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A field on a composite (object) type.
    Composite,
    /// A field on an input object type.
    Input,
    /// A value of an enum type.
    Enum,
    /// An argument of a composite field.
    Argument,
}

impl FieldKind {
    /// Nullability can only be rewritten on composite and input fields.
    pub fn supports_nullable(self) -> bool {
        matches!(self, FieldKind::Composite | FieldKind::Input)
    }

    /// Default values only exist on input fields and arguments.
    pub fn supports_default(self) -> bool {
        matches!(self, FieldKind::Input | FieldKind::Argument)
    }

    /// Type substitution applies everywhere a descriptor carries a type,
    /// which excludes enum values.
    pub fn supports_type_substitution(self) -> bool {
        matches!(
            self,
            FieldKind::Composite | FieldKind::Input | FieldKind::Argument
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Composite => "field",
            FieldKind::Input => "input field",
            FieldKind::Enum => "enum value",
            FieldKind::Argument => "argument",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_capabilities() {
        assert!(FieldKind::Composite.supports_nullable());
        assert!(FieldKind::Input.supports_nullable());
        assert!(!FieldKind::Enum.supports_nullable());
        assert!(!FieldKind::Argument.supports_nullable());

        assert!(FieldKind::Input.supports_default());
        assert!(FieldKind::Argument.supports_default());
        assert!(!FieldKind::Composite.supports_default());

        assert!(FieldKind::Argument.supports_type_substitution());
        assert!(!FieldKind::Enum.supports_type_substitution());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Enum.to_string(), "enum value");
        assert_eq!(FieldKind::Input.to_string(), "input field");
    }
}
