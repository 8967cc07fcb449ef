//! Emend Scalar Catalogue
//!
//! A fixed catalogue of well-known named scalar types. When a rewrite rule
//! substitutes a field's type and the target schema does not already define
//! a type of that name, the engine looks the name up here and, on a hit,
//! registers the scalar into the schema before any field references it.
//!
//! The catalogue is a const table; entries are materialized into
//! [`ScalarType`] values on lookup.

mod catalogue;

use catalogue::WELL_KNOWN;
use emend_schema::ScalarType;

/// Look up a well-known scalar by name.
pub fn find(name: &str) -> Option<ScalarType> {
    WELL_KNOWN
        .iter()
        .find(|(candidate, _, _)| *candidate == name)
        .map(|(name, description, url)| ScalarType {
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            specified_by_url: url.map(str::to_string),
        })
}

/// Returns true if the catalogue contains a scalar with this name.
pub fn is_well_known(name: &str) -> bool {
    WELL_KNOWN.iter().any(|(candidate, _, _)| *candidate == name)
}

/// Names of all catalogued scalars, in catalogue order.
pub fn names() -> impl Iterator<Item = &'static str> {
    WELL_KNOWN.iter().map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_scalar() {
        let uuid = find("UUID").unwrap();
        assert_eq!(uuid.name, "UUID");
        assert!(uuid.description.is_some());
        assert!(uuid.specified_by_url.is_some());

        let hsl = find("HSL").unwrap();
        assert_eq!(hsl.name, "HSL");
    }

    #[test]
    fn test_find_unknown_scalar() {
        assert!(find("NotAScalar").is_none());
        assert!(!is_well_known("NotAScalar"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_well_known("DateTime"));
        assert!(!is_well_known("datetime"));
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in names() {
            assert!(seen.insert(name), "duplicate catalogue entry: {}", name);
        }
        assert!(seen.len() > 60);
    }
}
