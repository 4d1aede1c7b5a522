//! In-place shuffles and value-returning permutations
//!
//! Two contracts exist side by side because callers rely on both: `shuffle`
//! reorders a slice it owns, `random_permutation` leaves its input untouched
//! and returns a fresh vector.

use rand::Rng;

/// Shuffles a slice in place with a Fisher-Yates pass from the last index
/// down to the first
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns the input's elements in uniformly random order, leaving the input
/// unchanged
///
/// Repeatedly picks a random element of the remaining pool and removes its
/// first matching occurrence, so duplicates survive as a multiset. Quadratic
/// in the input length, which the short parameter lists this serves never
/// notice.
pub fn random_permutation<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut pool = items.to_vec();
    let mut permuted = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        // Elements that are not equal to themselves (NaN) fall back to the
        // picked slot instead of looping forever.
        let position = pool
            .iter()
            .position(|item| *item == pool[index])
            .unwrap_or(index);
        permuted.push(pool.remove(position));
    }
    permuted
}

/// Random permutation of the indices `0..n`
pub fn random_permutation_of_range<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let indices: Vec<usize> = (0..n).collect();
    random_permutation(&indices, rng)
}
