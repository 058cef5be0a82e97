//! The PCI value codec.
//!
//! Encoding wraps a scalar under a key equal to its base-type name inside
//! a `base`/`list`/`record` envelope. Decoding is the best-effort external
//! boundary: payloads come from third-party widget code, so every failure
//! is caught here and degrades to Null (an empty record for record
//! decodes) with a diagnostic on stderr. Internally each step returns a
//! typed `Result`; nothing unwinds past this module.

use rust_decimal::Decimal;
use serde_json::json;

use rubric_core::{BaseType, Cardinality, RecordField, Scalar, Value, VariableDeclaration};

/// A decoding failure. Callers of the lossy entry points never see these;
/// they exist so diagnostics can distinguish the failure classes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("payload must be an object, found an array")]
    ArrayPayload,

    #[error("payload key '{key}' is inconsistent with {cardinality} cardinality")]
    CardinalityMismatch {
        key: &'static str,
        cardinality: &'static str,
    },

    #[error("payload carries none of 'base', 'list', 'record'")]
    MissingEnvelope,

    #[error("scalar carries no key; expected base type '{expected}'")]
    MissingBaseTypeKey { expected: &'static str },

    #[error("scalar carries key '{found}'; expected base type '{expected}'")]
    WrongBaseTypeKey {
        expected: &'static str,
        found: String,
    },

    #[error("'{name}' is not a base type")]
    UnknownBaseType { name: String },

    #[error("malformed {base_type} value: {message}")]
    MalformedScalar {
        base_type: &'static str,
        message: &'static str,
    },

    #[error("declaration has no base type")]
    MissingDeclaredBaseType,

    #[error("record payload must be an array")]
    RecordNotAnArray,

    #[error("declaration '{identifier}' has no record field schema")]
    MissingFieldSchema { identifier: String },
}

// ──────────────────────────────────────────────
// Encoding
// ──────────────────────────────────────────────

/// Encode a value into its PCI wire representation.
///
/// Null encodes as `{"base": null}` whatever the owning declaration's
/// cardinality. The wire format does not distinguish multiple from
/// ordered; both encode under `"list"` and the distinction lives only in
/// the accompanying declaration.
pub fn value_to_pci(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => json!({ "base": null }),
        Value::Single(base_type, scalar) => {
            json!({ "base": scalar_to_pci(*base_type, scalar) })
        }
        Value::Container {
            base_type, values, ..
        } => json!({ "list": list_to_pci(*base_type, values) }),
        Value::Record(fields) => json!({ "record": record_to_pci(fields) }),
    }
}

/// `{"<baseType>": <raw>}`. The unsupported base types carry null under
/// their own key -- a capability gap, not an error.
fn scalar_to_pci(base_type: BaseType, scalar: &Scalar) -> serde_json::Value {
    let raw = match base_type {
        BaseType::IntOrIdentifier | BaseType::File => serde_json::Value::Null,
        _ => scalar_to_raw(scalar),
    };
    wrap_under_base_type(base_type, raw)
}

fn list_to_pci(base_type: BaseType, values: &[Option<Scalar>]) -> serde_json::Value {
    let raw = match base_type {
        BaseType::IntOrIdentifier | BaseType::File => serde_json::Value::Null,
        _ => serde_json::Value::Array(
            values
                .iter()
                .map(|v| match v {
                    Some(scalar) => scalar_to_raw(scalar),
                    None => serde_json::Value::Null,
                })
                .collect(),
        ),
    };
    wrap_under_base_type(base_type, raw)
}

fn record_to_pci(fields: &[RecordField]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = fields
        .iter()
        .map(|field| {
            let base = match &field.value {
                Some(scalar) => scalar_to_pci(field.base_type, scalar),
                None => serde_json::Value::Null,
            };
            json!({ "name": field.identifier, "base": base })
        })
        .collect();
    serde_json::Value::Array(entries)
}

fn wrap_under_base_type(base_type: BaseType, raw: serde_json::Value) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert(base_type.as_str().to_string(), raw);
    serde_json::Value::Object(obj)
}

fn scalar_to_raw(scalar: &Scalar) -> serde_json::Value {
    match scalar {
        Scalar::Identifier(s) | Scalar::Str(s) | Scalar::Uri(s) => json!(s),
        Scalar::Integer(i) => json!(i),
        Scalar::Float(d) | Scalar::Duration(d) => decimal_to_number(*d),
        Scalar::Boolean(b) => json!(b),
        Scalar::Point(x, y) => json!([x, y]),
        Scalar::Pair(a, b) | Scalar::DirectedPair(a, b) => json!([a, b]),
    }
}

/// The wire carries numbers, not strings. Decimal renders its shortest
/// exact text and serde_json parses that back into a JSON number.
fn decimal_to_number(d: Decimal) -> serde_json::Value {
    serde_json::from_str::<serde_json::Number>(&d.to_string())
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

// ──────────────────────────────────────────────
// Decoding
// ──────────────────────────────────────────────

/// Decode a PCI payload against a declaration, degrading every failure to
/// Null with a diagnostic on stderr.
pub fn value_from_pci(payload: &serde_json::Value, declaration: &VariableDeclaration) -> Value {
    match try_value_from_pci(payload, declaration) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("pci decode ({}): {}", declaration.identifier, err);
            Value::Null
        }
    }
}

/// Decode a PCI payload against a declaration, reporting failures to the
/// caller instead of degrading.
pub fn try_value_from_pci(
    payload: &serde_json::Value,
    declaration: &VariableDeclaration,
) -> Result<Value, DecodeError> {
    if payload.is_null() {
        return Ok(Value::Null);
    }

    let obj = as_plain_object(payload)?;

    if let Some(base) = obj.get("base") {
        if declaration.cardinality != Cardinality::Single {
            return Err(DecodeError::CardinalityMismatch {
                key: "base",
                cardinality: declaration.cardinality.as_str(),
            });
        }
        if base.is_null() {
            return Ok(Value::Null);
        }
        let base_type = declared_base_type(declaration)?;
        return Ok(match decode_scalar(base, base_type)? {
            Some(scalar) => Value::Single(base_type, scalar),
            None => Value::Null,
        });
    }

    if let Some(list) = obj.get("list") {
        if !matches!(
            declaration.cardinality,
            Cardinality::Multiple | Cardinality::Ordered
        ) {
            return Err(DecodeError::CardinalityMismatch {
                key: "list",
                cardinality: declaration.cardinality.as_str(),
            });
        }
        let base_type = declared_base_type(declaration)?;
        return decode_list(list, base_type, declaration.cardinality);
    }

    if let Some(record) = obj.get("record") {
        if declaration.cardinality != Cardinality::Record {
            return Err(DecodeError::CardinalityMismatch {
                key: "record",
                cardinality: declaration.cardinality.as_str(),
            });
        }
        return Ok(decode_record(record, declaration));
    }

    Err(DecodeError::MissingEnvelope)
}

/// Decode a self-describing single payload (`{"base": {"<baseType>": v}}`)
/// without a declaration; the inner key names the base type. Used for
/// values whose type axes travel with them, such as lookup-table targets.
pub fn untyped_single_from_pci(payload: &serde_json::Value) -> Result<Value, DecodeError> {
    if payload.is_null() {
        return Ok(Value::Null);
    }
    let obj = as_plain_object(payload)?;
    let base = obj.get("base").ok_or(DecodeError::MissingEnvelope)?;
    if base.is_null() {
        return Ok(Value::Null);
    }
    let inner = as_plain_object(base)?;
    let (name, raw) = inner.iter().next().ok_or(DecodeError::MissingBaseTypeKey {
        expected: "<any>",
    })?;
    let base_type: BaseType = name.parse().map_err(|_| DecodeError::UnknownBaseType {
        name: name.clone(),
    })?;
    if raw.is_null() || !base_type_supported(base_type) {
        return Ok(Value::Null);
    }
    Ok(Value::Single(base_type, raw_to_scalar(base_type, raw)?))
}

fn base_type_supported(base_type: BaseType) -> bool {
    !matches!(base_type, BaseType::IntOrIdentifier | BaseType::File)
}

fn declared_base_type(declaration: &VariableDeclaration) -> Result<BaseType, DecodeError> {
    declaration
        .base_type
        .ok_or(DecodeError::MissingDeclaredBaseType)
}

fn as_plain_object(
    payload: &serde_json::Value,
) -> Result<&serde_json::Map<String, serde_json::Value>, DecodeError> {
    if payload.is_array() {
        return Err(DecodeError::ArrayPayload);
    }
    payload.as_object().ok_or(DecodeError::NotAnObject)
}

/// Decode `{"<baseType>": raw}` into a scalar. A null wire value decodes
/// to a null scalar, and the unsupported base types decode to null
/// unconditionally.
fn decode_scalar(
    payload: &serde_json::Value,
    base_type: BaseType,
) -> Result<Option<Scalar>, DecodeError> {
    if payload.is_null() {
        return Ok(None);
    }
    if !base_type_supported(base_type) {
        return Ok(None);
    }

    let raw = unwrap_base_type_key(payload, base_type)?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(raw_to_scalar(base_type, raw)?))
}

/// Extract the value wrapped under the declared base type's name,
/// distinguishing "value under wrong key" from "value absent" for
/// diagnostics.
fn unwrap_base_type_key(
    payload: &serde_json::Value,
    base_type: BaseType,
) -> Result<&serde_json::Value, DecodeError> {
    let obj = as_plain_object(payload)?;
    match obj.get(base_type.as_str()) {
        Some(raw) => Ok(raw),
        None => Err(match obj.keys().next() {
            Some(found) => DecodeError::WrongBaseTypeKey {
                expected: base_type.as_str(),
                found: found.clone(),
            },
            None => DecodeError::MissingBaseTypeKey {
                expected: base_type.as_str(),
            },
        }),
    }
}

fn decode_list(
    payload: &serde_json::Value,
    base_type: BaseType,
    cardinality: Cardinality,
) -> Result<Value, DecodeError> {
    if payload.is_null() {
        return Ok(Value::Null);
    }
    if !base_type_supported(base_type) {
        return Ok(Value::Null);
    }

    let raw = unwrap_base_type_key(payload, base_type)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let elements = raw.as_array().ok_or(DecodeError::MalformedScalar {
        base_type: base_type.as_str(),
        message: "expected an array of values",
    })?;

    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        if element.is_null() {
            values.push(None);
        } else {
            values.push(Some(raw_to_scalar(base_type, element)?));
        }
    }

    Ok(Value::Container {
        base_type,
        cardinality,
        values,
    })
}

/// Record decode owns its local boundary: any failure degrades to an
/// empty field map rather than surfacing past the codec.
fn decode_record(payload: &serde_json::Value, declaration: &VariableDeclaration) -> Value {
    match try_decode_record(payload, declaration) {
        Ok(fields) => Value::Record(fields),
        Err(err) => {
            eprintln!("pci decode ({}): {}", declaration.identifier, err);
            Value::Record(Vec::new())
        }
    }
}

fn try_decode_record(
    payload: &serde_json::Value,
    declaration: &VariableDeclaration,
) -> Result<Vec<RecordField>, DecodeError> {
    let schema = declaration
        .record_field_schema()
        .ok_or_else(|| DecodeError::MissingFieldSchema {
            identifier: declaration.identifier.clone(),
        })?;
    let entries = payload.as_array().ok_or(DecodeError::RecordNotAnArray)?;

    let mut fields = Vec::new();
    for declared in schema {
        for entry in entries {
            let name = entry.get("name").and_then(|n| n.as_str());
            let base = entry.get("base");
            let (Some(name), Some(base)) = (name, base) else {
                continue;
            };
            if name != declared.identifier {
                continue;
            }
            // A malformed field scalar degrades that field to null; the
            // rest of the record still decodes.
            let value = match decode_scalar(base, declared.base_type) {
                Ok(value) => value,
                Err(err) => {
                    eprintln!("pci decode ({}.{}): {}", declaration.identifier, name, err);
                    None
                }
            };
            fields.push(RecordField::new(
                declared.identifier.clone(),
                declared.base_type,
                value,
            ));
            break;
        }
    }

    Ok(fields)
}

fn raw_to_scalar(base_type: BaseType, raw: &serde_json::Value) -> Result<Scalar, DecodeError> {
    let malformed = |message: &'static str| DecodeError::MalformedScalar {
        base_type: base_type.as_str(),
        message,
    };

    match base_type {
        BaseType::Identifier => raw
            .as_str()
            .map(|s| Scalar::Identifier(s.to_string()))
            .ok_or_else(|| malformed("expected a string")),
        BaseType::String => raw
            .as_str()
            .map(|s| Scalar::Str(s.to_string()))
            .ok_or_else(|| malformed("expected a string")),
        BaseType::Uri => raw
            .as_str()
            .map(|s| Scalar::Uri(s.to_string()))
            .ok_or_else(|| malformed("expected a string")),
        BaseType::Integer => raw
            .as_i64()
            .map(Scalar::Integer)
            .ok_or_else(|| malformed("expected an integer")),
        BaseType::Float => number_to_decimal(raw)
            .map(Scalar::Float)
            .ok_or_else(|| malformed("expected a number")),
        BaseType::Duration => number_to_decimal(raw)
            .map(Scalar::Duration)
            .ok_or_else(|| malformed("expected a number")),
        BaseType::Boolean => raw
            .as_bool()
            .map(Scalar::Boolean)
            .ok_or_else(|| malformed("expected a boolean")),
        BaseType::Point => {
            let coords = raw.as_array().ok_or_else(|| malformed("expected [x, y]"))?;
            match coords.as_slice() {
                [x, y] => {
                    let x = x.as_i64().ok_or_else(|| malformed("expected [x, y]"))?;
                    let y = y.as_i64().ok_or_else(|| malformed("expected [x, y]"))?;
                    Ok(Scalar::Point(x, y))
                }
                _ => Err(malformed("expected exactly two coordinates")),
            }
        }
        BaseType::Pair | BaseType::DirectedPair => {
            let members = raw
                .as_array()
                .ok_or_else(|| malformed("expected two identifiers"))?;
            match members.as_slice() {
                [a, b] => {
                    let a = a
                        .as_str()
                        .ok_or_else(|| malformed("expected two identifiers"))?;
                    let b = b
                        .as_str()
                        .ok_or_else(|| malformed("expected two identifiers"))?;
                    Ok(if base_type == BaseType::Pair {
                        Scalar::Pair(a.to_string(), b.to_string())
                    } else {
                        Scalar::DirectedPair(a.to_string(), b.to_string())
                    })
                }
                _ => Err(malformed("expected exactly two identifiers")),
            }
        }
        // Unreachable through decode_scalar, which nulls these out first.
        BaseType::IntOrIdentifier | BaseType::File => Err(malformed("unsupported base type")),
    }
}

/// Exact decimal from a JSON number, through its text rendering -- the
/// shortest round-trip decimal of the wire value, never a binary float.
fn number_to_decimal(raw: &serde_json::Value) -> Option<Decimal> {
    let number = raw.as_number()?;
    number.to_string().parse::<Decimal>().ok()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
