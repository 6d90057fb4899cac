use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use crate::error::{Error, Result};
use crate::key::KeySelector;

/// Split a sequence in two using a parallel sequence of flags.
///
/// Elements whose flag is `true` go to the first bucket, the others to the
/// second. Relative order is kept in both buckets. The flags must be
/// exactly as long as the sequence.
pub fn bifurcate<T: Clone>(seq: &[T], flags: &[bool]) -> Result<(Vec<T>, Vec<T>)> {
    if flags.len() != seq.len() {
        tracing::debug!(
            len = seq.len(),
            flags = flags.len(),
            "bifurcate: flags do not line up with sequence"
        );
        return Err(Error::LengthMismatch {
            len: seq.len(),
            flags: flags.len(),
        });
    }
    let mut pass = Vec::new();
    let mut fail = Vec::new();
    for (item, flag) in seq.iter().zip(flags) {
        if *flag {
            pass.push(item.clone());
        } else {
            fail.push(item.clone());
        }
    }
    Ok((pass, fail))
}

/// Split a sequence in two by a predicate: matches first, the rest second.
pub fn bifurcate_by<T: Clone>(
    seq: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> (Vec<T>, Vec<T>) {
    seq.iter().cloned().partition(|item| predicate(item))
}

/// Group the elements of a sequence by a derived key.
///
/// ```
/// use seqkit::group_by;
///
/// let groups = group_by(&[6.1, 4.2, 6.3], |x: &f64| x.floor() as i64);
/// assert_eq!(groups[&4], vec![4.2]);
/// assert_eq!(groups[&6], vec![6.1, 6.3]);
/// ```
pub fn group_by<T, K, S>(seq: &[T], selector: S) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    S: KeySelector<T, K>,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in seq {
        groups
            .entry(selector.select(item))
            .or_default()
            .push(item.clone());
    }
    groups
}

/// Count the elements of a sequence per derived key.
pub fn count_by<T, K, S>(seq: &[T], selector: S) -> HashMap<K, usize>
where
    K: Eq + Hash,
    S: KeySelector<T, K>,
{
    let mut counts = HashMap::new();
    for item in seq {
        *counts.entry(selector.select(item)).or_insert(0) += 1;
    }
    counts
}

/// Keep the values that occur exactly once.
pub fn filter_non_unique<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|item| seq.iter().filter(|other| other == item).count() == 1)
        .cloned()
        .collect()
}

/// Keep the elements that only match themselves under `equals`.
///
/// An element at index `i` survives when `equals` holds for it against
/// index `i` and fails against every other index.
pub fn filter_non_unique_by<T: Clone>(seq: &[T], mut equals: impl FnMut(&T, &T) -> bool) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|&(i, item)| {
            seq.iter()
                .enumerate()
                .all(|(j, other)| (i == j) == equals(item, other))
        })
        .map(|(_, item)| item.clone())
        .collect()
}
