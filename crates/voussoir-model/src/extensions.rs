//! The vendor extension convention.
//!
//! Any field whose name starts with `x-` is extension data everywhere in the
//! format, at every nesting level. Named collections (paths, definitions,
//! named responses, ...) share their namespace with extensions, so iterating
//! one must go through [`data_entries`] and extension capture must use
//! [`is_extension_name`] — the same two predicates everywhere, never ad hoc
//! per-field string checks.

use serde_json::{Map, Value};

/// Reserved prefix marking a field as a vendor extension.
pub const EXTENSION_PREFIX: &str = "x-";

/// Returns true if `name` is an extension key.
pub fn is_extension_name(name: &str) -> bool {
    name.starts_with(EXTENSION_PREFIX)
}

/// Iterate the data entries of a named-collection object, skipping any
/// entry that belongs to the extension namespace.
pub fn data_entries(obj: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
    obj.iter().filter(|(name, _)| !is_extension_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_names() {
        assert!(is_extension_name("x-vendor"));
        assert!(is_extension_name("x-"));
        assert!(!is_extension_name("vendor-x"));
        assert!(!is_extension_name(""));
    }

    #[test]
    fn data_entries_skip_extensions() {
        let obj: Map<String, Value> = serde_json::from_str(
            r#"{"/pets": {}, "x-vendor": 42, "/stores": {}}"#,
        )
        .unwrap();
        let names: Vec<&str> = data_entries(&obj).map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["/pets", "/stores"]);
    }
}
