//! Variable declarations and their scoring sections.
//!
//! Declarations are constructed once per item session from already-parsed
//! assessment content and are read-only during evaluation, except for
//! `value`, which the surrounding rule interpreter mutates between steps.

use rust_decimal::Decimal;

use crate::value::{BaseType, Cardinality, RecordField, Value};

// ──────────────────────────────────────────────
// Response mapping
// ──────────────────────────────────────────────

/// One key→weight entry of a response mapping. Entries are matched in
/// declared order; for single cardinality the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub map_key: String,
    pub mapped_value: Decimal,
    pub case_sensitive: bool,
}

/// A scoring rule converting a discrete response value into a numeric
/// contribution via keyed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub entries: Vec<MapEntry>,
    pub default_value: Decimal,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
}

impl Mapping {
    /// Clamp a mapped result into the declared bounds.
    pub fn apply_constraints(&self, value: Decimal) -> Decimal {
        if let Some(lower) = self.lower_bound {
            if value < lower {
                return lower;
            }
        }
        if let Some(upper) = self.upper_bound {
            if value > upper {
                return upper;
            }
        }
        value
    }
}

// ──────────────────────────────────────────────
// Lookup tables
// ──────────────────────────────────────────────

/// Lookup table flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Exact-decimal match against each entry's source value.
    Match,
    /// Each entry governs everything below its threshold, optionally
    /// including the threshold itself.
    Interpolation,
}

/// One entry of a lookup table. `include_boundary` is meaningful for
/// interpolation tables only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub source_value: Decimal,
    pub target_value: Value,
    pub include_boundary: bool,
}

/// A scoring rule converting a numeric value into an arbitrary output via
/// ordered match or interpolation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    pub kind: TableKind,
    pub entries: Vec<LookupEntry>,
    /// Fallback when no entry matches, or when the input value is null.
    /// May itself be Null.
    pub default_value: Value,
}

// ──────────────────────────────────────────────
// Declarations
// ──────────────────────────────────────────────

/// A variable declaration as the engines see it: type axes, current and
/// default values, and the optional response-variable sections.
///
/// `base_type` is absent for record-cardinality variables; the type
/// information lives on the individual record fields instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub identifier: String,
    pub base_type: Option<BaseType>,
    pub cardinality: Cardinality,
    pub value: Value,
    pub default_value: Value,
    pub correct_response: Option<Value>,
    pub mapping: Option<Mapping>,
    pub lookup_table: Option<LookupTable>,
}

impl VariableDeclaration {
    /// The field schema of a record-cardinality declaration: the default
    /// value's field list when present, the correct response's otherwise.
    pub fn record_field_schema(&self) -> Option<&[RecordField]> {
        if let Value::Record(fields) = &self.default_value {
            return Some(fields);
        }
        match self.correct_response.as_ref() {
            Some(Value::Record(fields)) => Some(fields),
            _ => None,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
