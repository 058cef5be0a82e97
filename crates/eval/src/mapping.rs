//! Response mapping: candidate response → numeric score contribution.

use rust_decimal::Decimal;

use rubric_core::{BaseType, EvalError, MapEntry, Value, VariableDeclaration};

/// Map a declaration's current response value through its declared mapping.
///
/// Single cardinality scans entries in declared order and the first key
/// match wins. Multiple/ordered cardinality eliminates null and duplicate
/// elements, then accumulates the mapped value of every entry×element key
/// match into an exact Decimal sum. Both paths run the result through the
/// mapping's bound clamping.
///
/// The declared default value is the result for a null response and for a
/// single-cardinality response matching no key. A container response that
/// matches no key still returns the clamped zero sum, not the default.
///
/// A declaration without a mapping violates the caller contract and is
/// reported as `EvalError::MissingMapping`.
pub fn map_response(declaration: &VariableDeclaration) -> Result<Decimal, EvalError> {
    let mapping = declaration
        .mapping
        .as_ref()
        .ok_or_else(|| EvalError::MissingMapping {
            identifier: declaration.identifier.clone(),
        })?;

    match &declaration.value {
        Value::Null => Ok(mapping.default_value),

        Value::Single(base_type, scalar) => {
            let source = canonical_key(*base_type, scalar);
            for entry in &mapping.entries {
                if key_matches(entry, &source) {
                    return Ok(mapping.apply_constraints(entry.mapped_value));
                }
            }
            Ok(mapping.default_value)
        }

        Value::Container {
            base_type, values, ..
        } => {
            let distinct = distinct_keys(*base_type, values);
            let mut sum = Decimal::ZERO;
            for entry in &mapping.entries {
                for key in &distinct {
                    if key_matches(entry, key) {
                        sum += entry.mapped_value;
                    }
                }
            }
            Ok(mapping.apply_constraints(sum))
        }

        Value::Record(_) => Ok(mapping.default_value),
    }
}

/// Text form used for key comparison: numerics are canonicalized through
/// normalized Decimal text so `2`, `2.0`, and `2.00` under a float base
/// type agree.
fn canonical_key(base_type: BaseType, scalar: &rubric_core::Scalar) -> String {
    if base_type.is_numeric() {
        if let Some(d) = scalar.as_decimal() {
            return d.normalize().to_string();
        }
    }
    scalar.to_string()
}

/// Distinct non-null element keys, first occurrence order. Duplicate
/// values count once.
fn distinct_keys(base_type: BaseType, values: &[Option<rubric_core::Scalar>]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for scalar in values.iter().flatten() {
        let key = canonical_key(base_type, scalar);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn key_matches(entry: &MapEntry, source: &str) -> bool {
    if entry.case_sensitive {
        entry.map_key == source
    } else {
        entry.map_key.to_lowercase() == source.to_lowercase()
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
