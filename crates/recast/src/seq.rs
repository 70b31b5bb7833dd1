//! Small sequence helpers.

/// Pair up elements of two sequences, stopping at the shorter one.
///
/// ```
/// use recast::zip;
///
/// assert_eq!(zip([1, 2, 3], ["a", "b"]), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(
    left: impl IntoIterator<Item = A>,
    right: impl IntoIterator<Item = B>,
) -> Vec<(A, B)> {
    left.into_iter().zip(right).collect()
}

/// Split a sequence into the elements matching `predicate` and the rest.
///
/// Both halves keep the input order.
///
/// ```
/// use recast::partition;
///
/// let (even, odd) = partition(1..=6, |n| n % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T>(
    items: impl IntoIterator<Item = T>,
    predicate: impl FnMut(&T) -> bool,
) -> (Vec<T>, Vec<T>) {
    items.into_iter().partition(predicate)
}
