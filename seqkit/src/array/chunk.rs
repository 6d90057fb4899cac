use crate::error::{Error, Result};

/// Split a sequence into consecutive chunks of `size` elements.
///
/// The last chunk holds whatever is left and may be shorter.
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        tracing::debug!(len = seq.len(), "chunk: refusing zero chunk size");
        return Err(Error::ZeroChunkSize);
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

/// Every `n`th element, starting with the element at index `n - 1`.
pub fn every_nth<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    seq.iter().skip(n - 1).step_by(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
    }

    #[test]
    fn test_chunk_exact_fit_has_no_trailing_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4]]
        );
        assert_eq!(chunk::<i32>(&[], 3).unwrap(), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(chunk(&[1, 2], 0), Err(Error::ZeroChunkSize));
    }

    #[test]
    fn test_every_nth() {
        assert_eq!(every_nth(&[1, 2, 3, 4, 5, 6], 2), vec![2, 4, 6]);
        assert_eq!(every_nth(&[1, 2, 3, 4, 5, 6, 7], 3), vec![3, 6]);
        assert_eq!(every_nth(&[1, 2, 3], 1), vec![1, 2, 3]);
        assert_eq!(every_nth(&[1, 2, 3], 5), Vec::<i32>::new());
        assert_eq!(every_nth(&[1, 2, 3], 0), Vec::<i32>::new());
    }
}
