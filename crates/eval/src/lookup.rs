//! Lookup tables: numeric value → arbitrary output.

use rust_decimal::Decimal;

use rubric_core::{TableKind, Value, VariableDeclaration};

/// Map a numeric value through a declaration's lookup table.
///
/// A declaration without a lookup table yields Null; a null input value
/// yields the table's default. Match tables scan entries in declared order
/// with exact Decimal equality. Interpolation tables are sorted ascending
/// by source value **in place** -- the sort order is cached on the stored
/// table across calls, which is why the declaration is taken by `&mut` --
/// and the first entry whose threshold lies above the value (or equals it
/// with `include_boundary`) wins.
pub fn map_value_from_lookup_table(
    declaration: &mut VariableDeclaration,
    value: Option<Decimal>,
) -> Value {
    let Some(table) = declaration.lookup_table.as_mut() else {
        return Value::Null;
    };
    let Some(value) = value else {
        return table.default_value.clone();
    };

    match table.kind {
        TableKind::Interpolation => {
            table
                .entries
                .sort_by(|a, b| a.source_value.cmp(&b.source_value));
            for entry in &table.entries {
                if value < entry.source_value
                    || (entry.include_boundary && value == entry.source_value)
                {
                    return entry.target_value.clone();
                }
            }
        }
        TableKind::Match => {
            for entry in &table.entries {
                if value == entry.source_value {
                    return entry.target_value.clone();
                }
            }
        }
    }

    table.default_value.clone()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
