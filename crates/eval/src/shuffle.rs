//! In-place Durstenfeld shuffles for randomized-order operators.
//!
//! Both functions mutate the caller's slice by contract; clone first if
//! the original order matters. Randomness comes from a caller-supplied
//! `Rng` so callers control seeding.

use rand::Rng;

/// Shuffle a slice in place. O(n).
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a slice in place, leaving fixed elements where they are.
///
/// Any swap whose either endpoint is fixed is skipped, so fixed elements
/// keep their positions and also never receive a displaced element.
pub fn shuffle_fixed<T, R, F>(rng: &mut R, items: &mut [T], is_fixed: F)
where
    R: Rng + ?Sized,
    F: Fn(&T) -> bool,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        if is_fixed(&items[i]) || is_fixed(&items[j]) {
            continue;
        }
        items.swap(i, j);
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
