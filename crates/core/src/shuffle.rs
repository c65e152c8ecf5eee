//! Fisher-Yates shuffling used for every display randomization.
//!
//! The random source is always passed in so callers (and tests) control
//! seeding.

use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Permute `items` in place.
///
/// Walks `i` from the last index down to 1, swapping with a uniformly drawn
/// `j` in `[0, i]`.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A random subset of at most `count` items, in random order.
pub fn sample<T: Clone, R: Rng>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = shuffle(items, rng);
    shuffled.truncate(count);
    shuffled
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
