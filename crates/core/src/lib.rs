//! rubric-core: typed value model for assessment-scoring logic.
//!
//! Every variable value is classified on two axes: a base type (the scalar
//! data type) and a cardinality (the container shape). This crate owns the
//! axis enums, the scalar and container value types, and the read-only
//! declaration types (mappings, lookup tables) the evaluation engines
//! consume. It performs no evaluation itself.

pub mod decl;
pub mod error;
pub mod value;

pub use decl::{
    LookupEntry, LookupTable, MapEntry, Mapping, TableKind, VariableDeclaration,
};
pub use error::EvalError;
pub use value::{BaseType, Cardinality, RecordField, Scalar, Value};
