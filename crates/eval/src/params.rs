//! Custom-operator definition-string parameter parsing.
//!
//! A definition string is a flat key/value block: pairs joined by `|||`,
//! key and value separated by `=`, a literal `=` inside a value escaped
//! as the `&equals;` entity.

use std::collections::BTreeMap;

/// Parse a definition string into its parameter map.
///
/// Parsing is permissive: a pair with no `=` yields an empty-string
/// value, only the text between the first and second `=` is taken as the
/// value, and empty or blank input yields an empty map.
pub fn parameters_from_definition(definition: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    let definition = definition.trim();
    if definition.is_empty() {
        return params;
    }

    for pair in definition.split("|||") {
        let mut parts = pair.split('=');
        let key = parts.next().unwrap_or("").to_string();
        let value = parts
            .next()
            .map(|v| v.replace("&equals;", "="))
            .unwrap_or_default();
        params.insert(key, value);
    }

    params
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
