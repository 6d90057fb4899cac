/// An arithmetic sequence `start, start + step, ...` up to and including
/// `end`.
///
/// The number of values is `(end - start + 1) / step`, truncated toward
/// zero, and never negative. A `step` of zero gives no values.
///
/// ```
/// use seqkit::initialize_array_with_range;
///
/// assert_eq!(initialize_array_with_range(7, 3, 1), vec![3, 4, 5, 6, 7]);
/// assert_eq!(initialize_array_with_range(9, 0, 2), vec![0, 2, 4, 6, 8]);
/// ```
pub fn initialize_array_with_range(end: i64, start: i64, step: i64) -> Vec<i64> {
    let len = range_len(end, start, step);
    (0..len)
        .map(|index| (index as i128 * step as i128 + start as i128) as i64)
        .collect()
}

/// The values of [`initialize_array_with_range`], largest index first.
pub fn initialize_array_with_range_right(end: i64, start: i64, step: i64) -> Vec<i64> {
    let mut values = initialize_array_with_range(end, start, step);
    values.reverse();
    values
}

/// `0..=end` with a step of one.
pub fn range_to(end: i64) -> Vec<i64> {
    initialize_array_with_range(end, 0, 1)
}

fn range_len(end: i64, start: i64, step: i64) -> usize {
    if step == 0 {
        return 0;
    }
    let len = (end as i128 - start as i128 + 1) / step as i128;
    usize::try_from(len).unwrap_or(0)
}

/// `length` copies of `initial`.
pub fn initialize_array_with_values<T: Clone>(length: usize, initial: T) -> Vec<T> {
    vec![initial; length]
}

/// `height` rows of `width` copies of `initial`.
pub fn initialize_2d_array<T: Clone>(width: usize, height: usize, initial: T) -> Vec<Vec<T>> {
    vec![vec![initial; width]; height]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(range_to(5), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(initialize_array_with_range(7, 3, 1), vec![3, 4, 5, 6, 7]);
        assert_eq!(initialize_array_with_range(9, 0, 2), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_range_degenerate() {
        assert!(initialize_array_with_range(1, 5, 1).is_empty());
        assert!(initialize_array_with_range(5, 0, 0).is_empty());
        assert_eq!(initialize_array_with_range(0, 0, 1), vec![0]);
    }

    #[test]
    fn test_range_negative_step_counts_down() {
        assert_eq!(initialize_array_with_range(0, 5, -1), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_range_right() {
        assert_eq!(
            initialize_array_with_range_right(5, 0, 1),
            vec![5, 4, 3, 2, 1, 0]
        );
        assert_eq!(initialize_array_with_range_right(7, 3, 1), vec![7, 6, 5, 4, 3]);
        assert_eq!(initialize_array_with_range_right(9, 0, 2), vec![8, 6, 4, 2, 0]);
    }

    #[test]
    fn test_initialize_array_with_values() {
        assert_eq!(initialize_array_with_values(5, 2), vec![2, 2, 2, 2, 2]);
        assert!(initialize_array_with_values(0, 'x').is_empty());
    }

    #[test]
    fn test_initialize_2d_array() {
        assert_eq!(initialize_2d_array(2, 2, 0), vec![vec![0, 0], vec![0, 0]]);
        assert_eq!(initialize_2d_array(3, 1, 'a'), vec![vec!['a', 'a', 'a']]);
        assert!(initialize_2d_array(3, 0, 1).is_empty());
    }
}
