//! Lazy deduplication by derived key.

use std::collections::HashSet;
use std::hash::Hash;

/// Iterator adapter yielding, for each distinct key, only the first element
/// that produced that key, in input order.
///
/// Created by [`distinct_by`] or [`crate::SequenceExt::distinct_by`]. The
/// seen-key set stores keys, never elements, and lives exactly as long as
/// the adapter. Cloning before consumption restarts the deduplication
/// whenever the underlying iterator is itself restartable.
#[derive(Clone)]
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

/// Deduplicates `sequence` by the key derived with `key`.
///
/// Lazy: nothing is pulled from the input until the result is consumed.
///
/// ```
/// use seqkit::distinct_by;
///
/// let firsts: Vec<i32> = distinct_by([1, 2, 4, 8], |n| n % 2).collect();
/// assert_eq!(firsts, vec![1, 2]);
/// ```
pub fn distinct_by<I, F, K>(sequence: I, key: F) -> DistinctBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    DistinctBy {
        iter: sequence.into_iter(),
        key,
        seen: HashSet::new(),
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every element could share one key, or all could be distinct.
        (0, self.iter.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn keeps_first_element_per_key_in_input_order() {
        let firsts: Vec<i32> = distinct_by(vec![1, 2, 4, 8], |n| n % 2).collect();
        assert_eq!(firsts, vec![1, 2]);
    }

    #[test]
    fn keeps_first_record_per_key() {
        let records = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let firsts: Vec<(&str, i32)> = distinct_by(records, |r| r.0).collect();
        assert_eq!(firsts, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn empty_sequence_yields_empty_sequence() {
        let out: Vec<i32> = distinct_by(Vec::<i32>::new(), |n| *n).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn pulls_from_the_input_only_on_demand() {
        let pulled = Cell::new(0);
        let source = (0..100).map(|n| {
            pulled.set(pulled.get() + 1);
            n
        });

        let mut deduped = distinct_by(source, |n| *n);
        assert_eq!(pulled.get(), 0);

        assert_eq!(deduped.next(), Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn restarts_with_the_input_when_cloned_before_consumption() {
        let deduped = distinct_by(vec![1, 1, 2, 3, 3], |n| *n);
        let first: Vec<i32> = deduped.clone().collect();
        let second: Vec<i32> = deduped.collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn output_keys_are_unique(values in proptest::collection::vec(0i32..100, 0..200)) {
            let out: Vec<i32> = distinct_by(values, |n| n % 7).collect();
            let keys: Vec<i32> = out.iter().map(|n| n % 7).collect();
            let unique: HashSet<i32> = keys.iter().copied().collect();
            prop_assert_eq!(unique.len(), keys.len());
        }

        #[test]
        fn output_is_a_subsequence_of_the_input(
            values in proptest::collection::vec(0i32..50, 0..200),
        ) {
            let out: Vec<i32> = distinct_by(values.clone(), |n| *n).collect();
            let mut remaining = values.iter();
            for item in &out {
                prop_assert!(remaining.any(|v| v == item));
            }
        }
    }
}
