//! Uniform Random Selection
//!
//! Helpers take the RNG as a parameter so callers can pass a seeded RNG
//! in tests and `rand::rng()` in production.

use rand::Rng;

/// Pick one element uniformly at random, `None` on an empty slice
pub fn pick_uniform<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let index = rng.random_range(0..items.len());
    items.get(index)
}
