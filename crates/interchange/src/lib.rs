//! rubric-interchange: the external JSON boundary.
//!
//! Two concerns live here: the PCI value codec (the bit-exact wire
//! contract for exchanging variable values with third-party interaction
//! widgets) and deserialization of variable-declaration documents into
//! `rubric-core` types. The evaluation engines never parse JSON
//! themselves; every JSON boundary crosses through this crate.

pub mod decl;
pub mod pci;

pub use decl::{declaration_from_json, DeclError};
pub use pci::{try_value_from_pci, value_from_pci, value_to_pci, DecodeError};
