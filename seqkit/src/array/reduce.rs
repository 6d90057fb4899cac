use std::cmp::Ordering;

use crate::key::Length;

/// The item with the greatest length. On ties the earliest item wins.
///
/// ```
/// use seqkit::longest_item;
///
/// assert_eq!(longest_item(["this", "is", "a", "testcase"]), Some("testcase"));
/// ```
pub fn longest_item<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Option<&'a T>
where
    T: Length + ?Sized + 'a,
{
    items.into_iter().reduce(|longest, item| {
        if item.length() > longest.length() {
            item
        } else {
            longest
        }
    })
}

/// The `n` largest elements, largest first.
pub fn max_n<T: PartialOrd + Clone>(seq: &[T], n: usize) -> Vec<T> {
    sorted_prefix(seq, n, |a, b| compare(b, a))
}

/// The `n` smallest elements, smallest first.
pub fn min_n<T: PartialOrd + Clone>(seq: &[T], n: usize) -> Vec<T> {
    sorted_prefix(seq, n, compare)
}

// incomparable pairs such as NaN are treated as equal
fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

fn sorted_prefix<T: Clone>(seq: &[T], n: usize, order: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort_by(order);
    sorted.truncate(n);
    sorted
}
