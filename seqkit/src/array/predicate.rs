use crate::truthy::Truthy;

/// Whether every element satisfies the predicate. True for an empty sequence.
pub fn all<T>(seq: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().all(predicate)
}

/// Whether every element is truthy.
pub fn all_truthy<T: Truthy>(seq: &[T]) -> bool {
    all(seq, Truthy::is_truthy)
}

/// Whether at least one element satisfies the predicate. False for an empty
/// sequence.
pub fn any<T>(seq: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().any(predicate)
}

pub fn any_truthy<T: Truthy>(seq: &[T]) -> bool {
    any(seq, Truthy::is_truthy)
}

/// Whether no element satisfies the predicate.
pub fn none<T>(seq: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    !any(seq, predicate)
}

pub fn none_truthy<T: Truthy>(seq: &[T]) -> bool {
    !any_truthy(seq)
}

/// Whether every element equals the first one.
pub fn all_equal<T: PartialEq>(seq: &[T]) -> bool {
    match seq.first() {
        Some(first) => seq.iter().all(|item| item == first),
        None => true,
    }
}

/// Keep only the truthy elements.
pub fn compact<T: Truthy + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().filter(|item| item.is_truthy()).cloned().collect()
}

/// The direction a sequence is sorted in.
///
/// Converts into the conventional `1`, `-1` and `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending = 1,
    Descending = -1,
    Unsorted = 0,
}

impl From<SortOrder> for i32 {
    fn from(order: SortOrder) -> Self {
        order as i32
    }
}

/// Determine whether a sequence is sorted, and in which direction.
///
/// Ascending is checked first, so a constant sequence, and any sequence
/// with fewer than two elements, is [`SortOrder::Ascending`].
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> SortOrder {
    if seq.windows(2).all(|pair| pair[1] >= pair[0]) {
        SortOrder::Ascending
    } else if seq.windows(2).all(|pair| pair[1] <= pair[0]) {
        SortOrder::Descending
    } else {
        SortOrder::Unsorted
    }
}

#[cfg(test)]
mod tests {
    use seqkit_value::Value;

    use super::*;

    #[test]
    fn test_all() {
        assert!(all(&[4, 2, 3], |x| *x > 1));
        assert!(all::<i32>(&[], |_| false));
        assert!(!all_truthy(&[1, 0, 2]));
        assert!(all_truthy(&["a", "b"]));
    }

    #[test]
    fn test_any() {
        assert!(any(&[0, 1, 2, 0], |x| *x >= 2));
        assert!(!any::<i32>(&[], |_| true));
        assert!(any_truthy(&[0, 0, 1]));
    }

    #[test]
    fn test_none() {
        assert!(none(&[0, 1, 3, 0], |x| *x == 2));
        assert!(none_truthy(&[0, 0, 0]));
        assert!(!none_truthy(&[0, 1]));
    }

    #[test]
    fn test_all_equal() {
        assert!(!all_equal(&[1, 2, 3, 4, 5, 6]));
        assert!(all_equal(&[1, 1, 1]));
        assert!(all_equal::<i32>(&[]));
    }

    #[test]
    fn test_compact() {
        let values = [
            Value::from(0),
            Value::from(1),
            Value::from(false),
            Value::from(2),
            Value::from(""),
            Value::from(3),
            Value::from("a"),
            Value::from(f64::NAN),
            Value::from("s"),
            Value::from(34),
        ];
        assert_eq!(
            compact(&values),
            vec![
                Value::from(1),
                Value::from(2),
                Value::from(3),
                Value::from("a"),
                Value::from("s"),
                Value::from(34),
            ]
        );
    }

    #[test]
    fn test_is_sorted() {
        assert_eq!(is_sorted(&[0, 1, 2, 2]), SortOrder::Ascending);
        assert_eq!(is_sorted(&[4, 3, 2]), SortOrder::Descending);
        assert_eq!(is_sorted(&[4, 3, 5]), SortOrder::Unsorted);
        assert_eq!(i32::from(is_sorted(&[4, 3, 5])), 0);
        assert_eq!(i32::from(is_sorted(&[4, 3, 2])), -1);
    }

    #[test]
    fn test_is_sorted_ties_report_ascending() {
        assert_eq!(is_sorted(&[7, 7, 7]), SortOrder::Ascending);
        assert_eq!(is_sorted(&[1]), SortOrder::Ascending);
        assert_eq!(is_sorted::<i32>(&[]), SortOrder::Ascending);
    }
}
