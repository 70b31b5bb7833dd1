//! Function composition.

/// Compose left to right: the result applies `first`, then `second`.
///
/// ```
/// use recast::compose_l;
///
/// let f = compose_l(|x: i32| x + 1, |x: i32| x * 10);
/// assert_eq!(f(1), 20);
/// ```
pub fn compose_l<A, B, C>(first: impl Fn(A) -> B, second: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| second(first(x))
}

/// Compose right to left: the result applies `inner`, then `outer`.
///
/// ```
/// use recast::compose_r;
///
/// let f = compose_r(|x: i32| x + 1, |x: i32| x * 10);
/// assert_eq!(f(1), 11);
/// ```
pub fn compose_r<A, B, C>(outer: impl Fn(B) -> C, inner: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| outer(inner(x))
}
