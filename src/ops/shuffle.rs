//! Random permutations.

use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly shuffled copy of `items`, using the thread-local RNG.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// [`shuffle`] driven by a caller-supplied RNG, for reproducible output.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
