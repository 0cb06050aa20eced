/*!
Bifunctor mapping, traversals, and right-biased iteration over `These`
*/
use super::These::{self, *};

impl<L, R> These<L, R> {
    /// Map the left value with `f` and the right value with `g`, preserving the shape
    #[inline]
    pub fn bimap<C, D, F, G>(self, f: F, g: G) -> These<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            This(l) => This(f(l)),
            That(r) => That(g(r)),
            Both(l, r) => Both(f(l), g(r)),
        }
    }
    /// Map the left value, if present
    #[inline]
    pub fn map_left<C, F>(self, f: F) -> These<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.bimap(f, |r| r)
    }
    /// Map the right value, if present
    #[inline]
    pub fn map_right<D, G>(self, g: G) -> These<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.bimap(|l| l, g)
    }
    /// Map the right value, treating `These<L, _>` as a functor over its right side.
    ///
    /// Equivalent to [`map_right`](These::map_right).
    #[inline]
    pub fn map<D, G>(self, g: G) -> These<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(g)
    }
    /**
    Map both sides with fallible functions.

    The left function always runs first: on `Both`, `g` is only called if `f` succeeded, and the
    first error is returned.

    # Example
    ```rust
    use these::These;
    let parsed = These::Both("1", "x").bitraverse(|l| l.parse::<i32>(), |r| Ok(r.len()));
    assert_eq!(parsed, Ok(These::Both(1, 1)));
    ```
    */
    #[inline]
    pub fn bitraverse<C, D, E, F, G>(self, f: F, g: G) -> Result<These<C, D>, E>
    where
        F: FnOnce(L) -> Result<C, E>,
        G: FnOnce(R) -> Result<D, E>,
    {
        Ok(match self {
            This(l) => This(f(l)?),
            That(r) => That(g(r)?),
            Both(l, r) => {
                let l = f(l)?;
                Both(l, g(r)?)
            }
        })
    }
    /// Map both sides with partial functions, left first, returning `None` if either yields `None`
    #[inline]
    pub fn bitraverse_option<C, D, F, G>(self, f: F, g: G) -> Option<These<C, D>>
    where
        F: FnOnce(L) -> Option<C>,
        G: FnOnce(R) -> Option<D>,
    {
        Some(match self {
            This(l) => This(f(l)?),
            That(r) => That(g(r)?),
            Both(l, r) => {
                let l = f(l)?;
                Both(l, g(r)?)
            }
        })
    }
    /// Update the left value with a fallible function, passing the value through if it has no left side
    #[inline]
    pub fn traverse_left<C, E, F>(self, f: F) -> Result<These<C, R>, E>
    where
        F: FnOnce(L) -> Result<C, E>,
    {
        self.bitraverse(f, Ok)
    }
    /// Update the right value with a fallible function, passing the value through if it has no right side
    #[inline]
    pub fn traverse_right<D, E, G>(self, g: G) -> Result<These<L, D>, E>
    where
        G: FnOnce(R) -> Result<D, E>,
    {
        self.bitraverse(Ok, g)
    }
    /// Update the left value with a partial function, passing the value through if it has no left side
    #[inline]
    pub fn traverse_left_option<C, F>(self, f: F) -> Option<These<C, R>>
    where
        F: FnOnce(L) -> Option<C>,
    {
        self.bitraverse_option(f, Some)
    }
    /// Update the right value with a partial function, passing the value through if it has no right side
    #[inline]
    pub fn traverse_right_option<D, G>(self, g: G) -> Option<These<L, D>>
    where
        G: FnOnce(R) -> Option<D>,
    {
        self.bitraverse_option(Some, g)
    }
    /// Iterate over the right value, if any
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.as_ref().right().into_iter()
    }
    /// Iterate mutably over the right value, if any
    #[inline]
    pub fn iter_mut(&mut self) -> std::option::IntoIter<&mut R> {
        self.right_mut().into_iter()
    }
    /// Fold over the right value, if any
    #[inline]
    pub fn fold_right<T, F>(self, init: T, f: F) -> T
    where
        F: FnOnce(T, R) -> T,
    {
        match self.right() {
            Some(r) => f(init, r),
            None => init,
        }
    }
}

impl<L, R, E> These<Result<L, E>, Result<R, E>> {
    /// Sequence the results held by this value, left first
    #[inline]
    pub fn transpose(self) -> Result<These<L, R>, E> {
        self.bitraverse(|l| l, |r| r)
    }
}

impl<L, R> These<Option<L>, Option<R>> {
    /// Sequence the options held by this value, returning `None` if any is `None`
    #[inline]
    pub fn transpose(self) -> Option<These<L, R>> {
        self.bitraverse_option(|l| l, |r| r)
    }
}

impl<L, R> IntoIterator for These<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a These<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, L, R> IntoIterator for &'a mut These<L, R> {
    type Item = &'a mut R;
    type IntoIter = std::option::IntoIter<&'a mut R>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;
    use std::cell::RefCell;

    #[test]
    fn bimap_preserves_shape() {
        let len = |s: &str| s.len();
        let neg = |n: i32| -n;
        assert_eq!(These::<&str, i32>::This("ab").bimap(len, neg), This(2));
        assert_eq!(These::<&str, i32>::That(3).bimap(len, neg), That(-3));
        assert_eq!(Both("abc", 3).bimap(len, neg), Both(3, -3));
        assert_eq!(Both("abc", 3).map_left(len), Both(3, 3));
        assert_eq!(Both("abc", 3).map_right(neg), Both("abc", -3));
        assert_eq!(These::<&str, i32>::This("abc").map(neg), This("abc"));
    }

    #[test]
    fn bitraverse_runs_left_effect_first() {
        let log = RefCell::new(Vec::new());
        let result: Result<These<i32, i32>, ()> = Both(1, 2).bitraverse(
            |l| {
                log.borrow_mut().push("left");
                Ok(l)
            },
            |r| {
                log.borrow_mut().push("right");
                Ok(r)
            },
        );
        assert_eq!(result, Ok(Both(1, 2)));
        assert_eq!(*log.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn bitraverse_stops_at_the_first_error() {
        let right_called = RefCell::new(false);
        let result: Result<These<i32, i32>, &str> = Both(1, 2).bitraverse(
            |_| Err("left failed"),
            |r| {
                *right_called.borrow_mut() = true;
                Ok(r)
            },
        );
        assert_eq!(result, Err("left failed"));
        assert!(!*right_called.borrow());
        let result: Result<These<i32, i32>, &str> =
            Both(1, 2).bitraverse(Ok, |_| Err("right failed"));
        assert_eq!(result, Err("right failed"));
    }

    #[test]
    fn focused_traversals_skip_absent_sides() {
        let fail = |_: i32| -> Result<i32, ()> { Err(()) };
        assert_eq!(These::<i32, char>::That('a').traverse_left(fail), Ok(That('a')));
        assert_eq!(These::<char, i32>::This('a').traverse_right(fail), Ok(This('a')));
        assert_eq!(These::<i32, char>::Both(1, 'a').traverse_left(fail), Err(()));
        assert_eq!(
            These::<i32, char>::Both(1, 'a').traverse_left(|l| Ok::<_, ()>(l + 1)),
            Ok(Both(2, 'a'))
        );
        assert_eq!(
            These::<i32, &str>::Both(1, "x").traverse_right_option(|_| None::<()>),
            None
        );
        assert_eq!(
            These::<i32, &str>::This(1).traverse_right_option(|_| None::<()>),
            Some(This(1))
        );
        assert_eq!(
            These::<&str, i32>::This("7").traverse_left_option(|s| s.parse::<u8>().ok()),
            Some(This(7))
        );
    }

    #[test]
    fn transposition_sequences_held_effects() {
        let ok: These<Result<i32, &str>, Result<char, &str>> = Both(Ok(1), Ok('a'));
        assert_eq!(ok.transpose(), Ok(Both(1, 'a')));
        let err: These<Result<i32, &str>, Result<char, &str>> = Both(Err("l"), Err("r"));
        assert_eq!(err.transpose(), Err("l"));
        let none: These<Option<i32>, Option<char>> = Both(Some(1), None);
        assert_eq!(none.transpose(), None);
        let some: These<Option<i32>, Option<char>> = That(Some('a'));
        assert_eq!(some.transpose(), Some(That('a')));
    }

    #[test]
    fn right_biased_iteration() {
        let this: These<i32, char> = This(1);
        let that: These<i32, char> = That('a');
        let both: These<i32, char> = Both(1, 'b');
        assert_eq!(this.into_iter().collect::<Vec<_>>(), vec![]);
        assert_eq!(that.into_iter().collect::<Vec<_>>(), vec!['a']);
        assert_eq!(both.iter().collect::<Vec<_>>(), vec![&'b']);
        assert_eq!(both.fold_right(0, |acc, c| acc + c as u32), 'b' as u32);
        assert_eq!(this.fold_right(7, |acc, c| acc + c as u32), 7);
        let mut both = both;
        for r in &mut both {
            *r = 'z';
        }
        assert_eq!(both, Both(1, 'z'));
        assert_eq!((&both).into_iter().count(), 1);
    }

    #[quickcheck]
    fn bimap_identity(value: These<i32, String>) -> bool {
        value.clone().bimap(|l| l, |r| r) == value
    }

    #[quickcheck]
    fn bimap_composition(value: These<i32, String>) -> bool {
        let f = |l: i32| l.wrapping_mul(3);
        let g = |r: String| r.len();
        let h = |l: i32| l.wrapping_add(1);
        let k = |n: usize| n % 2 == 0;
        value.clone().bimap(|l| h(f(l)), |r| k(g(r))) == value.bimap(f, g).bimap(h, k)
    }

    #[quickcheck]
    fn bimap_is_map_left_then_map_right(value: These<i32, String>) -> bool {
        let f = |l: i32| l.wrapping_sub(5);
        let g = |r: String| r.to_uppercase();
        value.clone().bimap(f, g) == value.map_left(f).map_right(g)
    }

    #[quickcheck]
    fn traversal_identity(value: These<i32, String>) -> bool {
        value.clone().traverse_left(Ok::<_, ()>) == Ok(value.clone())
            && value.clone().traverse_right(Ok::<_, ()>) == Ok(value.clone())
            && value.clone().bitraverse(Ok::<_, ()>, Ok) == Ok(value)
    }

    #[quickcheck]
    fn traversal_composition(value: These<u8, String>) -> bool {
        let f = |l: u8| l.checked_add(10);
        let g = |l: u8| l.checked_mul(2);
        let composed = value.clone().traverse_left_option(|l| f(l).and_then(g));
        let sequenced = value
            .traverse_left_option(f)
            .and_then(|v| v.traverse_left_option(g));
        composed == sequenced
    }
}
