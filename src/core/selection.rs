//! Random and deterministic selection helpers

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `items` into a uniformly random permutation (Fisher-Yates)
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniformly random element, `None` for an empty slice
pub fn random_pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Index picked for a day of the year: `day_of_year % len`
///
/// `None` when `len` is zero.
#[must_use]
pub fn daily_index(len: usize, day_of_year: u32) -> Option<usize> {
    let day = usize::try_from(day_of_year).ok()?;
    day.checked_rem(len)
}

/// Element picked for a day of the year, stable for the whole day
#[must_use]
pub fn daily_pick<T>(items: &[T], day_of_year: u32) -> Option<&T> {
    daily_index(items.len(), day_of_year).and_then(|i| items.get(i))
}
