//! Evaluation-side error type.

use std::fmt;

/// Errors surfaced by the evaluation engines and axis parsing.
///
/// Decoding errors live in rubric-interchange; a declaration that reaches
/// an engine without the section the engine requires is a construction-time
/// bug upstream, reported here as a typed error rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Response mapping was requested on a declaration without a mapping.
    MissingMapping { identifier: String },
    /// A base-type name not in the closed set.
    UnknownBaseType { name: String },
    /// A cardinality name not in the closed set.
    UnknownCardinality { name: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingMapping { identifier } => {
                write!(f, "declaration '{}' has no response mapping", identifier)
            }
            EvalError::UnknownBaseType { name } => {
                write!(f, "unknown base type: '{}'", name)
            }
            EvalError::UnknownCardinality { name } => {
                write!(f, "unknown cardinality: '{}'", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}
