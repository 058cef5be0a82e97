//! The two-axis value model: base type × cardinality.
//!
//! All numeric scalars use `rust_decimal::Decimal` -- never `f64` -- so
//! scoring comparisons are exact. `1`, `1.0`, and `1.00` are the same
//! number and nothing is silently rounded.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

// ──────────────────────────────────────────────
// Type axes
// ──────────────────────────────────────────────

/// Scalar data type of a variable value.
///
/// `IntOrIdentifier` and `File` are recognized names but unsupported by the
/// wire codec: both directions produce null, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseType {
    Identifier,
    String,
    Integer,
    Float,
    Boolean,
    Point,
    Pair,
    DirectedPair,
    Duration,
    Uri,
    IntOrIdentifier,
    File,
}

impl BaseType {
    /// Wire name of this base type, as it appears in PCI payloads and
    /// declaration documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Identifier => "identifier",
            BaseType::String => "string",
            BaseType::Integer => "integer",
            BaseType::Float => "float",
            BaseType::Boolean => "boolean",
            BaseType::Point => "point",
            BaseType::Pair => "pair",
            BaseType::DirectedPair => "directedPair",
            BaseType::Duration => "duration",
            BaseType::Uri => "uri",
            BaseType::IntOrIdentifier => "intOrIdentifier",
            BaseType::File => "file",
        }
    }

    /// Whether values of this base type compare numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(self, BaseType::Integer | BaseType::Float)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseType {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identifier" => Ok(BaseType::Identifier),
            "string" => Ok(BaseType::String),
            "integer" => Ok(BaseType::Integer),
            "float" => Ok(BaseType::Float),
            "boolean" => Ok(BaseType::Boolean),
            "point" => Ok(BaseType::Point),
            "pair" => Ok(BaseType::Pair),
            "directedPair" => Ok(BaseType::DirectedPair),
            "duration" => Ok(BaseType::Duration),
            "uri" => Ok(BaseType::Uri),
            "intOrIdentifier" => Ok(BaseType::IntOrIdentifier),
            "file" => Ok(BaseType::File),
            other => Err(EvalError::UnknownBaseType {
                name: other.to_string(),
            }),
        }
    }
}

/// Container shape of a variable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one scalar, or null.
    Single,
    /// Unordered bag compared ignoring order.
    Multiple,
    /// Sequence compared element by element in order.
    Ordered,
    /// Named-field record; fields are single-cardinality, never nested.
    Record,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Multiple => "multiple",
            Cardinality::Ordered => "ordered",
            Cardinality::Record => "record",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cardinality {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Cardinality::Single),
            "multiple" => Ok(Cardinality::Multiple),
            "ordered" => Ok(Cardinality::Ordered),
            "record" => Ok(Cardinality::Record),
            other => Err(EvalError::UnknownCardinality {
                name: other.to_string(),
            }),
        }
    }
}

// ──────────────────────────────────────────────
// Scalars
// ──────────────────────────────────────────────

/// A typed single value. One variant per supported base type; the
/// unsupported base types (`intOrIdentifier`, `file`) have no variant, so
/// the capability gap is unrepresentable rather than policed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Identifier(String),
    Str(String),
    Integer(i64),
    Float(Decimal),
    Boolean(bool),
    Point(i64, i64),
    Pair(String, String),
    DirectedPair(String, String),
    Duration(Decimal),
    Uri(String),
}

impl Scalar {
    /// The base type this scalar inhabits.
    pub fn base_type(&self) -> BaseType {
        match self {
            Scalar::Identifier(_) => BaseType::Identifier,
            Scalar::Str(_) => BaseType::String,
            Scalar::Integer(_) => BaseType::Integer,
            Scalar::Float(_) => BaseType::Float,
            Scalar::Boolean(_) => BaseType::Boolean,
            Scalar::Point(_, _) => BaseType::Point,
            Scalar::Pair(_, _) => BaseType::Pair,
            Scalar::DirectedPair(_, _) => BaseType::DirectedPair,
            Scalar::Duration(_) => BaseType::Duration,
            Scalar::Uri(_) => BaseType::Uri,
        }
    }

    /// Numeric view of this scalar, for exact-decimal comparison and
    /// arithmetic. Only integers, floats, and durations are numeric.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Scalar::Integer(i) => Some(Decimal::from(*i)),
            Scalar::Float(d) | Scalar::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

/// Canonical text rendering. Used for the default (non-type-aware)
/// container sort and for mapping-key comparison. Decimal rendering is
/// scale-preserving, so `1.0` and `1.00` render differently here even
/// though they compare equal numerically.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Identifier(s) | Scalar::Str(s) | Scalar::Uri(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(d) | Scalar::Duration(d) => write!(f, "{}", d),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Point(x, y) => write!(f, "{} {}", x, y),
            Scalar::Pair(a, b) | Scalar::DirectedPair(a, b) => write!(f, "{} {}", a, b),
        }
    }
}

// ──────────────────────────────────────────────
// Values
// ──────────────────────────────────────────────

/// One field of a record value: identifier, base type, and a
/// single-cardinality value (possibly null).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub identifier: String,
    pub base_type: BaseType,
    pub value: Option<Scalar>,
}

impl RecordField {
    pub fn new(identifier: impl Into<String>, base_type: BaseType, value: Option<Scalar>) -> Self {
        RecordField {
            identifier: identifier.into(),
            base_type,
            value,
        }
    }
}

/// A variable value. Null carries no type information; the owning
/// declaration recovers the axes. Container elements are homogeneous at
/// the declared base type, and may individually be null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Single(BaseType, Scalar),
    Container {
        base_type: BaseType,
        cardinality: Cardinality,
        values: Vec<Option<Scalar>>,
    },
    /// Fields in declaration order. Iteration order is deterministic but
    /// carries no meaning.
    Record(Vec<RecordField>),
}

impl Value {
    pub fn single(base_type: BaseType, scalar: Scalar) -> Self {
        Value::Single(base_type, scalar)
    }

    pub fn multiple(base_type: BaseType, values: Vec<Option<Scalar>>) -> Self {
        Value::Container {
            base_type,
            cardinality: Cardinality::Multiple,
            values,
        }
    }

    pub fn ordered(base_type: BaseType, values: Vec<Option<Scalar>>) -> Self {
        Value::Container {
            base_type,
            cardinality: Cardinality::Ordered,
            values,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Fields of a record value, in declaration order.
    pub fn record_fields(&self) -> Option<&[RecordField]> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a record field by identifier.
    pub fn field(&self, identifier: &str) -> Option<&RecordField> {
        self.record_fields()?
            .iter()
            .find(|f| f.identifier == identifier)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
