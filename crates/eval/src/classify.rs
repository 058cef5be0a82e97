//! Static classification of rule-tree node tags.
//!
//! The surrounding interpreter dispatches AST nodes by their stable tag
//! name; these tables tell it which grammar a tag belongs to. The tables
//! are fixed data -- no state, no registration.

/// Tags of the expression grammar.
pub const EXPRESSION_TAGS: &[&str] = &[
    "qti-base-value",
    "qti-variable",
    "qti-correct",
    "qti-default",
    "qti-is-null",
    "qti-null",
    "qti-and",
    "qti-or",
    "qti-not",
    "qti-match",
    "qti-map-response",
    "qti-member",
    "qti-subtract",
    "qti-sum",
    "qti-random",
    "qti-random-float",
    "qti-random-integer",
    "qti-index",
    "qti-integer-divide",
    "qti-integer-modulus",
    "qti-integer-to-float",
    "qti-equal",
    "qti-equal-rounded",
    "qti-field-value",
    "qti-multiple",
    "qti-ordered",
    "qti-map-response-point",
    "qti-product",
    "qti-delete",
    "qti-string-match",
    "qti-pattern-match",
    "qti-substring",
    "qti-round",
    "qti-round-to",
    "qti-truncate",
    "qti-divide",
    "qti-gt",
    "qti-gte",
    "qti-lt",
    "qti-lte",
    "qti-max",
    "qti-min",
    "qti-custom-operator",
    "qti-math-operator",
    "qti-math-constant",
    "qti-repeat",
    "qti-gcd",
    "qti-lcm",
    "qti-stats-operator",
    "qti-power",
    "qti-any-n",
];

/// Tags of the response-rule grammar.
pub const RESPONSE_RULE_TAGS: &[&str] = &[
    "qti-response-processing-fragment",
    "qti-response-condition",
    "qti-set-outcome-value",
    "qti-lookup-outcome-value",
    "qti-get-outcome-value",
    "qti-exit-response",
];

/// Tags of the template-rule grammar.
pub const TEMPLATE_RULE_TAGS: &[&str] = &[
    "qti-set-template-value",
    "qti-exit-template",
    "qti-template-condition",
    "qti-set-default-value",
    "qti-set-correct-response",
    "qti-template-constraint",
];

/// Custom-interaction subtypes the engine recognizes.
const CUSTOM_INTERACTION_SUB_TYPES: &[&str] = &["amp:likert"];

pub fn is_expression_node(tag: &str) -> bool {
    EXPRESSION_TAGS.contains(&tag)
}

pub fn is_response_rule_node(tag: &str) -> bool {
    RESPONSE_RULE_TAGS.contains(&tag)
}

pub fn is_template_rule_node(tag: &str) -> bool {
    TEMPLATE_RULE_TAGS.contains(&tag)
}

/// Extract a custom-interaction subtype from a host element's
/// space-separated class attribute.
///
/// Returns the first recognized subtype token. When no token is
/// recognized the whole attribute comes back unchanged -- the adapter
/// layer keys its "unsupported interaction" placeholder off whatever tag
/// was found. Empty input yields None.
pub fn custom_interaction_sub_type(class_attr: &str) -> Option<&str> {
    if class_attr.is_empty() {
        return None;
    }

    for token in class_attr.split(' ') {
        if CUSTOM_INTERACTION_SUB_TYPES.contains(&token) {
            return Some(token);
        }
    }
    Some(class_attr)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
