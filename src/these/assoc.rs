/*!
Commutativity and associativity witnesses for `These`, and its distribution over pairs
*/
use super::These::{self, *};

impl<L, R> These<L, R> {
    /**
    Swap the sides of this value. This is an involution: swapping twice gives back the original value.

    # Example
    ```rust
    use these::These;
    assert_eq!(These::<i32, char>::This(1).swap(), These::That(1));
    assert_eq!(These::Both(1, 'a').swap(), These::Both('a', 1));
    ```
    */
    #[inline]
    pub fn swap(self) -> These<R, L> {
        match self {
            This(l) => That(l),
            That(r) => This(r),
            Both(l, r) => Both(r, l),
        }
    }
}

impl<L, M, R> These<L, These<M, R>> {
    /// Re-associate a right-nested `These` to the left. Inverse to [`reassoc`](These::reassoc).
    pub fn assoc(self) -> These<These<L, M>, R> {
        match self {
            This(l) => This(This(l)),
            That(This(m)) => This(That(m)),
            That(That(r)) => That(r),
            That(Both(m, r)) => Both(That(m), r),
            Both(l, This(m)) => This(Both(l, m)),
            Both(l, That(r)) => Both(This(l), r),
            Both(l, Both(m, r)) => Both(Both(l, m), r),
        }
    }
}

impl<L, M, R> These<These<L, M>, R> {
    /// Re-associate a left-nested `These` to the right. Inverse to [`assoc`](These::assoc).
    pub fn reassoc(self) -> These<L, These<M, R>> {
        match self {
            This(This(l)) => This(l),
            This(That(m)) => That(This(m)),
            This(Both(l, m)) => Both(l, This(m)),
            That(r) => That(That(r)),
            Both(This(l), r) => Both(l, That(r)),
            Both(That(m), r) => That(Both(m, r)),
            Both(Both(l, m), r) => Both(l, Both(m, r)),
        }
    }
}

/// Distribute a `These` whose left side is a pair over that pair
pub fn distr_these_pair<A, B, C: Clone>(value: These<(A, B), C>) -> (These<A, C>, These<B, C>) {
    match value {
        This((a, b)) => (This(a), This(b)),
        That(c) => (That(c.clone()), That(c)),
        Both((a, b), c) => (Both(a, c.clone()), Both(b, c)),
    }
}

/**
Undo [`distr_these_pair`](distr_these_pair).

The pair is only rebuilt when both components carry a left value; otherwise the right value of the
first component (or, failing that, of the second) is kept.
*/
pub fn undistr_these_pair<A, B, C>(value: (These<A, C>, These<B, C>)) -> These<(A, B), C> {
    match value {
        (This(a), This(b)) => This((a, b)),
        (This(a), Both(b, c)) | (Both(a, c), This(b)) | (Both(a, c), Both(b, _)) => {
            Both((a, b), c)
        }
        (That(c), _) | (Both(_, c), That(_)) | (This(_), That(c)) => That(c),
    }
}

/// Distribute a pair whose first component is a `These` over that `These`
pub fn distr_pair_these<A, B, C: Clone>(value: (These<A, B>, C)) -> These<(A, C), (B, C)> {
    match value {
        (This(a), c) => This((a, c)),
        (That(b), c) => That((b, c)),
        (Both(a, b), c) => Both((a, c.clone()), (b, c)),
    }
}

/// Undo [`distr_pair_these`](distr_pair_these), keeping the shared component of the left side when both are present
pub fn undistr_pair_these<A, B, C>(value: These<(A, C), (B, C)>) -> (These<A, B>, C) {
    match value {
        This((a, c)) => (This(a), c),
        That((b, c)) => (That(b), c),
        Both((a, c), (b, _)) => (Both(a, b), c),
    }
}
