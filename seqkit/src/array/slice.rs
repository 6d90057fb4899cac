// Slicing and trimming. These borrow from the input rather than copying it.

/// Everything but the first `count` elements.
pub fn drop<T>(seq: &[T], count: usize) -> &[T] {
    &seq[count.min(seq.len())..]
}

/// Everything but the last `count` elements.
pub fn drop_right<T>(seq: &[T], count: usize) -> &[T] {
    &seq[..seq.len().saturating_sub(count)]
}

/// Drop elements from the front until `predicate` holds for the front
/// element, which is kept. Empty if the predicate never holds.
///
/// ```
/// use seqkit::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 3, 4], |n| *n >= 3), &[3, 4]);
/// ```
pub fn drop_while<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
    match seq.iter().position(|item| predicate(item)) {
        Some(start) => &seq[start..],
        None => &[],
    }
}

/// Drop elements from the back until `predicate` holds for the last
/// element, which is kept. Empty if the predicate never holds.
pub fn drop_right_while<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
    match seq.iter().rposition(|item| predicate(item)) {
        Some(end) => &seq[..=end],
        None => &[],
    }
}

/// All but the last element.
pub fn initial<T>(seq: &[T]) -> &[T] {
    drop_right(seq, 1)
}

pub fn head<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The element at index `n`.
///
/// A negative `n` counts from the back: `-1` is the last element and
/// `-len` the first. Indexes outside the sequence in either direction give
/// `None`.
pub fn nth_element<T>(seq: &[T], n: isize) -> Option<&T> {
    if n >= 0 {
        seq.get(n.unsigned_abs())
    } else {
        seq.len()
            .checked_sub(n.unsigned_abs())
            .and_then(|index| seq.get(index))
    }
}
