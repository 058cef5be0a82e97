//! Numeric helpers over exact decimals: gcd/lcm folds and word counting.

use rust_decimal::Decimal;

/// Greatest common divisor by Euclid's algorithm over exact Decimal
/// remainders.
pub fn gcd(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return a;
    }
    gcd(b, a % b)
}

/// Least common multiple. `lcm(a, b) = a·b / gcd(a, b)`.
pub fn lcm(a: Decimal, b: Decimal) -> Decimal {
    a * b / gcd(a, b)
}

/// Fold gcd over a sequence of operands. Empty input yields zero.
pub fn generalized_gcd(values: &[Decimal]) -> Decimal {
    let mut iter = values.iter().copied();
    let Some(mut acc) = iter.next() else {
        return Decimal::ZERO;
    };
    for v in iter {
        acc = gcd(acc, v);
    }
    acc
}

/// Fold lcm over a sequence of operands. Any zero operand makes the
/// result zero. Empty input yields zero.
pub fn generalized_lcm(values: &[Decimal]) -> Decimal {
    let mut iter = values.iter().copied();
    let Some(mut acc) = iter.next() else {
        return Decimal::ZERO;
    };
    for v in iter {
        if acc.is_zero() || v.is_zero() {
            return Decimal::ZERO;
        }
        acc = lcm(acc, v);
    }
    acc
}

/// Number of words in a string: maximal runs of non-whitespace.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(dec("12"), dec("18")), dec("6"));
        assert_eq!(gcd(dec("18"), dec("12")), dec("6"));
        assert_eq!(gcd(dec("7"), dec("13")), dec("1"));
    }

    #[test]
    fn gcd_with_zero() {
        assert_eq!(gcd(dec("5"), dec("0")), dec("5"));
        assert_eq!(gcd(dec("0"), dec("5")), dec("5"));
    }

    #[test]
    fn lcm_basic() {
        assert_eq!(lcm(dec("4"), dec("6")), dec("12"));
        assert_eq!(lcm(dec("3"), dec("5")), dec("15"));
    }

    #[test]
    fn generalized_gcd_folds() {
        assert_eq!(generalized_gcd(&[dec("12"), dec("18"), dec("30")]), dec("6"));
        assert_eq!(generalized_gcd(&[dec("9")]), dec("9"));
        assert_eq!(generalized_gcd(&[]), Decimal::ZERO);
    }

    #[test]
    fn generalized_lcm_folds() {
        assert_eq!(generalized_lcm(&[dec("2"), dec("3"), dec("4")]), dec("12"));
        assert_eq!(generalized_lcm(&[dec("6")]), dec("6"));
    }

    #[test]
    fn generalized_lcm_zero_short_circuits() {
        assert_eq!(generalized_lcm(&[dec("2"), dec("0"), dec("4")]), Decimal::ZERO);
        assert_eq!(generalized_lcm(&[dec("0")]), Decimal::ZERO);
    }

    #[test]
    fn word_count_runs_of_non_whitespace() {
        assert_eq!(word_count("the quick  brown\tfox"), 4);
        assert_eq!(word_count("  leading and trailing  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
    }
}
