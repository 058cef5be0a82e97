//! rubric-eval: the computation engines behind response, template, and
//! outcome processing.
//!
//! Everything here is a pure, synchronous function over in-memory data.
//! The only mutations are the lookup table's in-place sort caching and the
//! in-place shuffles, both explicit in the signatures.

pub mod classify;
pub mod equality;
pub mod lookup;
pub mod mapping;
pub mod numeric;
pub mod params;
pub mod shuffle;

pub use classify::{
    custom_interaction_sub_type, is_expression_node, is_response_rule_node, is_template_rule_node,
};
pub use equality::{multiple_equal, ordered_equal, single_equal};
pub use lookup::map_value_from_lookup_table;
pub use mapping::map_response;
