//! Infinite lazy sequences from a producer function.
//!
//! A generated sequence never terminates on its own; bound it with a
//! `take`, or consume it from a loop that terminates for external reasons.
//! Composing a generator with [`crate::distinct_by`] and a bound is the
//! supported "n distinct values" pattern; the caller is responsible for a
//! reachable bound, since a deduplicated take over a producer with fewer
//! distinct values than the bound never completes.

use std::iter::Take;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Unbounded iterator calling its producer once per pulled element.
///
/// Values are never pre-computed or cached, and the sequence is not
/// restartable: each enumeration of a producer with state observes fresh
/// values.
pub struct Generate<F> {
    producer: F,
}

/// Produces an infinite sequence where each element is the result of one
/// `producer` invocation.
///
/// ```
/// use seqkit::generate;
///
/// let mut n = 0;
/// let squares: Vec<i32> = generate(|| {
///     n += 1;
///     n * n
/// })
/// .take(4)
/// .collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn generate<T, F>(producer: F) -> Generate<F>
where
    F: FnMut() -> T,
{
    Generate { producer }
}

/// Produces exactly `count` elements by invoking `producer` once per
/// element; equivalent to `generate(producer).take(count)`.
pub fn generate_n<T, F>(producer: F, count: usize) -> Take<Generate<F>>
where
    F: FnMut() -> T,
{
    generate(producer).take(count)
}

/// Infinite sequence of uniformly distributed `i32` values.
///
/// Every call constructs its own freshly seeded source, so concurrently
/// created generators never share a stream.
pub fn random_integers() -> Generate<impl FnMut() -> i32> {
    let mut rng = StdRng::from_entropy();
    generate(move || rng.gen())
}

/// The first `count` elements of [`random_integers`].
pub fn random_integers_n(count: usize) -> Take<Generate<impl FnMut() -> i32>> {
    random_integers().take(count)
}

/// Infinite sequence of uniformly distributed `f64` values in `[0, 1)`.
///
/// Seeded independently per call, like [`random_integers`].
pub fn random_floats() -> Generate<impl FnMut() -> f64> {
    let mut rng = StdRng::from_entropy();
    generate(move || rng.gen())
}

/// The first `count` elements of [`random_floats`].
pub fn random_floats_n(count: usize) -> Take<Generate<impl FnMut() -> f64>> {
    random_floats().take(count)
}

impl<T, F> Iterator for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some((self.producer)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
