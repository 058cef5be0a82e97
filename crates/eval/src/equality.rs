//! Equality for single, multiple, and ordered cardinality.
//!
//! Numeric base types compare by exact Decimal value, everything else
//! structurally. Container comparison canonicalizes order for multiple
//! cardinality by sorting both sides on the scalar's text rendering --
//! deliberately not type-aware (see the regression tests pinning the
//! behavior for structured scalar types).

use rubric_core::{BaseType, Scalar};

/// Compare two scalars under the declared base type.
///
/// Numeric base types compare as Decimal with exact-value equality (no
/// epsilon), so differently written representations of the same number are
/// equal. Every other base type compares componentwise, which for text
/// types is text equality.
pub fn single_equal(base_type: BaseType, first: &Scalar, second: &Scalar) -> bool {
    if base_type.is_numeric() {
        return match (first.as_decimal(), second.as_decimal()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
    }
    first == second
}

/// Compare two multiple-cardinality containers, ignoring order.
///
/// Both sides are cloned and stably sorted by the scalar's canonical text
/// rendering before the elementwise typed compare. Null elements sort as
/// the literal text "null".
pub fn multiple_equal(
    base_type: BaseType,
    first: &[Option<Scalar>],
    second: &[Option<Scalar>],
) -> bool {
    if first.len() != second.len() {
        return false;
    }

    let mut a: Vec<&Option<Scalar>> = first.iter().collect();
    let mut b: Vec<&Option<Scalar>> = second.iter().collect();
    a.sort_by_key(|v| sort_key(v));
    b.sort_by_key(|v| sort_key(v));

    a.iter()
        .zip(b.iter())
        .all(|(x, y)| element_equal(base_type, x, y))
}

/// Compare two ordered-cardinality containers, element by element in
/// original order.
pub fn ordered_equal(
    base_type: BaseType,
    first: &[Option<Scalar>],
    second: &[Option<Scalar>],
) -> bool {
    if first.len() != second.len() {
        return false;
    }

    first
        .iter()
        .zip(second.iter())
        .all(|(x, y)| element_equal(base_type, x, y))
}

fn element_equal(base_type: BaseType, first: &Option<Scalar>, second: &Option<Scalar>) -> bool {
    match (first, second) {
        (Some(a), Some(b)) => single_equal(base_type, a, b),
        (None, None) => true,
        _ => false,
    }
}

fn sort_key(value: &Option<Scalar>) -> String {
    match value {
        Some(scalar) => scalar.to_string(),
        None => "null".to_string(),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
