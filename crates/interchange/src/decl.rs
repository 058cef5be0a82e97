//! Deserialization of variable-declaration documents.
//!
//! A declaration document is a JSON object carrying the identifier, the
//! two type axes, optional mapping and lookup-table sections, and values
//! expressed in the PCI encoding. Unlike PCI payloads these documents come
//! from trusted authored content, so failures propagate to the caller
//! instead of degrading.

use std::str::FromStr;

use rust_decimal::Decimal;

use rubric_core::{
    BaseType, Cardinality, LookupEntry, LookupTable, MapEntry, Mapping, RecordField, TableKind,
    Value, VariableDeclaration,
};

use crate::pci;

/// Errors during declaration-document deserialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("declaration missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown base type '{0}'")]
    UnknownBaseType(String),

    #[error("unknown cardinality '{0}'")]
    UnknownCardinality(String),

    #[error("unknown lookup table type '{0}'")]
    UnknownTableType(String),

    #[error("invalid decimal in '{field}': '{text}'")]
    InvalidDecimal { field: &'static str, text: String },

    #[error("invalid value encoding: {0}")]
    Value(#[from] pci::DecodeError),
}

/// Deserialize a declaration document into a `VariableDeclaration`.
///
/// Record-cardinality declarations carry their field schema in a `fields`
/// array; when no explicit default value is given the schema itself
/// becomes the default value as a record of null fields, which is exactly
/// the form the record decoder resolves field types from.
pub fn declaration_from_json(doc: &serde_json::Value) -> Result<VariableDeclaration, DeclError> {
    let identifier = required_str(doc, "identifier")?;

    let cardinality_name = required_str(doc, "cardinality")?;
    let cardinality = Cardinality::from_str(&cardinality_name)
        .map_err(|_| DeclError::UnknownCardinality(cardinality_name))?;

    let base_type = match doc.get("baseType").and_then(|v| v.as_str()) {
        Some(name) => Some(
            BaseType::from_str(name).map_err(|_| DeclError::UnknownBaseType(name.to_string()))?,
        ),
        None => None,
    };

    let mapping = doc.get("mapping").map(parse_mapping).transpose()?;
    let lookup_table = doc.get("lookupTable").map(parse_lookup_table).transpose()?;

    let mut declaration = VariableDeclaration {
        identifier,
        base_type,
        cardinality,
        value: Value::Null,
        default_value: Value::Null,
        correct_response: None,
        mapping,
        lookup_table,
    };

    if cardinality == Cardinality::Record {
        if let Some(fields) = doc.get("fields") {
            declaration.default_value = Value::Record(parse_field_schema(fields)?);
        }
    }
    if let Some(payload) = doc.get("defaultValue") {
        declaration.default_value = pci::try_value_from_pci(payload, &declaration)?;
    }
    if let Some(payload) = doc.get("correctResponse") {
        declaration.correct_response = Some(pci::try_value_from_pci(payload, &declaration)?);
    }
    if let Some(payload) = doc.get("value") {
        declaration.value = pci::try_value_from_pci(payload, &declaration)?;
    }

    Ok(declaration)
}

fn parse_field_schema(fields: &serde_json::Value) -> Result<Vec<RecordField>, DeclError> {
    let entries = fields.as_array().ok_or(DeclError::InvalidField {
        field: "fields",
        expected: "an array of field declarations",
    })?;

    let mut schema = Vec::with_capacity(entries.len());
    for entry in entries {
        let identifier = required_str(entry, "identifier")?;
        let name = required_str(entry, "baseType")?;
        let base_type =
            BaseType::from_str(&name).map_err(|_| DeclError::UnknownBaseType(name))?;
        schema.push(RecordField::new(identifier, base_type, None));
    }
    Ok(schema)
}

fn parse_mapping(section: &serde_json::Value) -> Result<Mapping, DeclError> {
    let entries_json = section
        .get("entries")
        .and_then(|e| e.as_array())
        .ok_or(DeclError::MissingField("mapping.entries"))?;

    let mut entries = Vec::with_capacity(entries_json.len());
    for entry in entries_json {
        entries.push(MapEntry {
            map_key: required_str(entry, "mapKey")?,
            mapped_value: required_decimal(entry, "mappedValue")?,
            case_sensitive: entry
                .get("caseSensitive")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        });
    }

    Ok(Mapping {
        entries,
        default_value: optional_decimal(section, "defaultValue")?.unwrap_or(Decimal::ZERO),
        lower_bound: optional_decimal(section, "lowerBound")?,
        upper_bound: optional_decimal(section, "upperBound")?,
    })
}

fn parse_lookup_table(section: &serde_json::Value) -> Result<LookupTable, DeclError> {
    let kind_name = required_str(section, "tableType")?;
    let kind = match kind_name.as_str() {
        "match" => TableKind::Match,
        "interpolation" => TableKind::Interpolation,
        _ => return Err(DeclError::UnknownTableType(kind_name)),
    };

    let entries_json = section
        .get("entries")
        .and_then(|e| e.as_array())
        .ok_or(DeclError::MissingField("lookupTable.entries"))?;

    let mut entries = Vec::with_capacity(entries_json.len());
    for entry in entries_json {
        let target = entry
            .get("targetValue")
            .ok_or(DeclError::MissingField("lookupTable.targetValue"))?;
        entries.push(LookupEntry {
            source_value: required_decimal(entry, "sourceValue")?,
            target_value: pci::untyped_single_from_pci(target)?,
            include_boundary: entry
                .get("includeBoundary")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        });
    }

    let default_value = match section.get("defaultValue") {
        Some(payload) => pci::untyped_single_from_pci(payload)?,
        None => Value::Null,
    };

    Ok(LookupTable {
        kind,
        entries,
        default_value,
    })
}

// ── Parsing helpers ─────────────────────────────────────────────────

fn required_str(obj: &serde_json::Value, field: &'static str) -> Result<String, DeclError> {
    obj.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or(DeclError::MissingField(field))
}

/// Decimals in declaration documents may be written as strings (exact)
/// or as plain JSON numbers.
fn parse_decimal(v: &serde_json::Value, field: &'static str) -> Result<Decimal, DeclError> {
    let text = match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => {
            return Err(DeclError::InvalidField {
                field,
                expected: "a decimal string or number",
            })
        }
    };
    text.parse::<Decimal>()
        .map_err(|_| DeclError::InvalidDecimal { field, text })
}

fn required_decimal(obj: &serde_json::Value, field: &'static str) -> Result<Decimal, DeclError> {
    let v = obj.get(field).ok_or(DeclError::MissingField(field))?;
    parse_decimal(v, field)
}

fn optional_decimal(
    obj: &serde_json::Value,
    field: &'static str,
) -> Result<Option<Decimal>, DeclError> {
    match obj.get(field) {
        Some(serde_json::Value::Null) | None => Ok(None),
        Some(v) => parse_decimal(v, field).map(Some),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
