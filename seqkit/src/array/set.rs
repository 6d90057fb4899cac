// Set-like operations. They all keep the order (and any duplicates) of the
// source sequence and only consult `other` for membership.

use crate::key::KeySelector;

/// Elements of `src` that do not occur in `other`.
pub fn difference<T: PartialEq + Clone>(src: &[T], other: &[T]) -> Vec<T> {
    src.iter()
        .filter(|&item| !other.contains(item))
        .cloned()
        .collect()
}

/// Elements of `src` whose key does not occur among the keys of `other`.
///
/// The key comes from a closure or a [`Field`](crate::Field).
///
/// ```
/// use seqkit::difference_by;
///
/// assert_eq!(difference_by(&[2.1, 1.2], &[2.3, 3.4], |x: &f64| x.floor()), vec![1.2]);
/// ```
pub fn difference_by<T, K, S>(src: &[T], other: &[T], selector: S) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    S: KeySelector<T, K>,
{
    let keys = other
        .iter()
        .map(|item| selector.select(item))
        .collect::<Vec<_>>();
    src.iter()
        .filter(|&item| !keys.contains(&selector.select(item)))
        .cloned()
        .collect()
}

/// Elements of `src` that have no counterpart in `other` under `comparer`.
pub fn difference_with<T, U>(
    src: &[T],
    other: &[U],
    mut comparer: impl FnMut(&T, &U) -> bool,
) -> Vec<T>
where
    T: Clone,
{
    src.iter()
        .filter(|&item| !other.iter().any(|o| comparer(item, o)))
        .cloned()
        .collect()
}

/// Elements of `src` that also occur in `other`.
pub fn intersection<T: PartialEq + Clone>(src: &[T], other: &[T]) -> Vec<T> {
    src.iter()
        .filter(|&item| other.contains(item))
        .cloned()
        .collect()
}

/// Elements of `src` whose key occurs among the keys of `other`.
pub fn intersection_by<T, K, S>(src: &[T], other: &[T], selector: S) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    S: KeySelector<T, K>,
{
    let keys = other
        .iter()
        .map(|item| selector.select(item))
        .collect::<Vec<_>>();
    src.iter()
        .filter(|&item| keys.contains(&selector.select(item)))
        .cloned()
        .collect()
}

/// Elements of `src` with at least one counterpart in `other` under
/// `comparer`.
pub fn intersection_with<T, U>(
    src: &[T],
    other: &[U],
    mut comparer: impl FnMut(&T, &U) -> bool,
) -> Vec<T>
where
    T: Clone,
{
    src.iter()
        .filter(|&item| other.iter().any(|o| comparer(item, o)))
        .cloned()
        .collect()
}
