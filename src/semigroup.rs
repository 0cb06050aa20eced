/*!
Semigroups, the combination of `These` values, and the right-biased `These` monad
*/
use crate::these::These::{self, *};
use std::collections::BTreeSet;

/**
A type with an associative binary operation.

Implementations must satisfy `a.combine(b).combine(c) == a.combine(b.combine(c))`.
*/
pub trait Semigroup: Sized {
    /// Combine two values
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: ()) -> Self {}
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: String) -> String {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Vec<T>) -> Vec<T> {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    #[inline]
    fn combine(mut self, mut other: BTreeSet<T>) -> BTreeSet<T> {
        self.append(&mut other);
        self
    }
}

/// `None` is an identity; two present values are combined
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Option<T>) -> Option<T> {
        match (self, other) {
            (Some(l), Some(r)) => Some(l.combine(r)),
            (l, None) => l,
            (None, r) => r,
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: (A, B)) -> (A, B) {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

/**
Combine sides independently: present values on the same side are combined, and a side present in
only one operand is kept as is.

# Example
```rust
use these::{Semigroup, These};
let l: These<String, Vec<i32>> = These::This("a".into());
let r: These<String, Vec<i32>> = These::Both("b".into(), vec![1]);
assert_eq!(l.combine(r), These::Both("ab".into(), vec![1]));
```
*/
impl<L: Semigroup, R: Semigroup> Semigroup for These<L, R> {
    fn combine(self, other: These<L, R>) -> These<L, R> {
        match (self, other) {
            (This(a), This(b)) => This(a.combine(b)),
            (This(a), That(y)) => Both(a, y),
            (This(a), Both(b, y)) => Both(a.combine(b), y),
            (That(x), This(b)) => Both(b, x),
            (That(x), That(y)) => That(x.combine(y)),
            (That(x), Both(b, y)) => Both(b, x.combine(y)),
            (Both(a, x), This(b)) => Both(a.combine(b), x),
            (Both(a, x), That(y)) => Both(a, x.combine(y)),
            (Both(a, x), Both(b, y)) => Both(a.combine(b), x.combine(y)),
        }
    }
}

/// Combine a non-empty sequence of values from left to right. Return `None` if the sequence is empty.
pub fn sconcat<S, I>(values: I) -> Option<S>
where
    S: Semigroup,
    I: IntoIterator<Item = S>,
{
    let mut values = values.into_iter();
    let first = values.next()?;
    Some(values.fold(first, Semigroup::combine))
}

impl<L: Semigroup, R> These<L, R> {
    /// Lift a right value into the `These` monad
    #[inline]
    pub fn pure(value: R) -> These<L, R> {
        That(value)
    }
    /**
    Monadic bind: feed the right value, if any, to `f`, accumulating left values with `combine`.

    A `This` short-circuits, since there is no right value to continue with.

    # Example
    ```rust
    use these::These;
    let logged: These<String, i32> = These::Both("start;".into(), 1);
    let next = logged.and_then(|n| These::Both("step;".to_string(), n + 1));
    assert_eq!(next, These::Both("start;step;".into(), 2));
    ```
    */
    pub fn and_then<D, F>(self, f: F) -> These<L, D>
    where
        F: FnOnce(R) -> These<L, D>,
    {
        match self {
            This(a) => This(a),
            That(x) => f(x),
            Both(a, x) => match f(x) {
                This(b) => This(a.combine(b)),
                That(y) => Both(a, y),
                Both(b, y) => Both(a.combine(b), y),
            },
        }
    }
    /// Apply the function held on the right of this value to the right value of `arg`, accumulating left values
    #[inline]
    pub fn apply<A, D>(self, arg: These<L, A>) -> These<L, D>
    where
        R: FnOnce(A) -> D,
    {
        self.and_then(|f| arg.map_right(f))
    }
}

impl<L: Semigroup, R> These<L, These<L, R>> {
    /// Flatten a nested `These`, accumulating left values
    #[inline]
    pub fn flatten(self) -> These<L, R> {
        self.and_then(|inner| inner)
    }
}
