/// How many elements equal `value`.
pub fn count_occurrences<T: PartialEq>(seq: &[T], value: &T) -> usize {
    seq.iter().filter(|item| *item == value).count()
}

/// Every index at which `value` occurs, in ascending order.
pub fn index_of_all<T: PartialEq>(seq: &[T], value: &T) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|(_, item)| *item == value)
        .map(|(index, _)| index)
        .collect()
}

/// The last element satisfying the predicate.
pub fn find_last<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    seq.iter().rev().find(|&item| predicate(item))
}

/// The index of the last element satisfying the predicate, or `None` when
/// nothing matches.
///
/// The predicate is called with the element, its index and the whole
/// sequence.
///
/// ```
/// use seqkit::find_last_index;
///
/// assert_eq!(find_last_index(&[1, 2, 3, 4], |n, _, _| n % 2 == 1), Some(2));
/// assert_eq!(find_last_index(&[2, 4], |n, _, _| n % 2 == 1), None);
/// ```
pub fn find_last_index<T>(
    seq: &[T],
    mut predicate: impl FnMut(&T, usize, &[T]) -> bool,
) -> Option<usize> {
    (0..seq.len()).rev().find(|&index| predicate(&seq[index], index, seq))
}

/// Call `f` on every element, last element first.
pub fn for_each_right<T>(seq: &[T], f: impl FnMut(&T)) {
    seq.iter().rev().for_each(f)
}
