/*!
The `These` type: this value, that value, or both
*/
use either::Either;
use itertools::EitherOrBoth;
use std::hash::{Hash, Hasher};

pub mod assoc;
pub mod map;

pub use assoc::{distr_pair_these, distr_these_pair, undistr_pair_these, undistr_these_pair};

/**
A value of type `L`, a value of type `R`, or one of each.

The three shapes are mutually exclusive and jointly exhaustive: there is no empty `These`. Equality
is pointwise, and values are ordered first by shape (`This < That < Both`) and then by payload.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum These<L, R> {
    /// Only a left value is present
    This(L),
    /// Only a right value is present
    That(R),
    /// Both values are present
    Both(L, R),
}

use These::*;

/// The shape of a `These`, forgetting its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// The shape of `These::This`
    This,
    /// The shape of `These::That`
    That,
    /// The shape of `These::Both`
    Both,
}

impl Shape {
    /// All shapes, in order
    pub const ALL: [Shape; 3] = [Shape::This, Shape::That, Shape::Both];

    /// Get the discriminant of this shape, as used in the binary format and for hashing
    #[inline]
    pub fn discriminant(self) -> u8 {
        match self {
            Shape::This => 0,
            Shape::That => 1,
            Shape::Both => 2,
        }
    }
    /// Get the shape with a given discriminant, if any
    #[inline]
    pub fn from_discriminant(discriminant: u8) -> Option<Shape> {
        match discriminant {
            0 => Some(Shape::This),
            1 => Some(Shape::That),
            2 => Some(Shape::Both),
            _ => None,
        }
    }
    /// Whether this shape carries a left value
    #[inline]
    pub fn has_left(self) -> bool {
        self != Shape::That
    }
    /// Whether this shape carries a right value
    #[inline]
    pub fn has_right(self) -> bool {
        self != Shape::This
    }
}

impl<L, R> These<L, R> {
    /**
    Build a `These` out of two optional values. Return `None` if both are absent.

    # Example
    ```rust
    use these::These;
    assert_eq!(These::from_options(Some(1), Some('a')), Some(These::Both(1, 'a')));
    assert_eq!(These::<i32, char>::from_options(None, None), None);
    ```
    */
    #[inline]
    pub fn from_options(left: Option<L>, right: Option<R>) -> Option<These<L, R>> {
        match (left, right) {
            (Some(l), None) => Some(This(l)),
            (None, Some(r)) => Some(That(r)),
            (Some(l), Some(r)) => Some(Both(l, r)),
            (None, None) => None,
        }
    }
    /// Split this value into its optional left and right parts
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            This(l) => (Some(l), None),
            That(r) => (None, Some(r)),
            Both(l, r) => (Some(l), Some(r)),
        }
    }
    /**
    Case analysis: apply `on_this`, `on_that` or `on_both` depending on the shape of this value.

    # Example
    ```rust
    use these::These;
    let value: These<i32, &str> = These::This(5);
    assert_eq!(value.fold(|n| n + 1, |s| s.len() as i32, |n, s| n + s.len() as i32), 6);
    ```
    */
    #[inline]
    pub fn fold<T, F, G, H>(self, on_this: F, on_that: G, on_both: H) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
        H: FnOnce(L, R) -> T,
    {
        match self {
            This(l) => on_this(l),
            That(r) => on_that(r),
            Both(l, r) => on_both(l, r),
        }
    }
    /**
    Get both values, substituting the given defaults for whichever side is absent.

    # Example
    ```rust
    use these::These;
    assert_eq!(These::<i32, &str>::This(5).with_defaults(0, ""), (5, ""));
    assert_eq!(These::Both(5, "x").with_defaults(0, ""), (5, "x"));
    ```
    */
    #[inline]
    pub fn with_defaults(self, left: L, right: R) -> (L, R) {
        match self {
            This(l) => (l, right),
            That(r) => (left, r),
            Both(l, r) => (l, r),
        }
    }
    /// Get both values, computing defaults for whichever side is absent
    #[inline]
    pub fn with_defaults_with<F, G>(self, left: F, right: G) -> (L, R)
    where
        F: FnOnce() -> L,
        G: FnOnce() -> R,
    {
        match self {
            This(l) => (l, right()),
            That(r) => (left(), r),
            Both(l, r) => (l, r),
        }
    }
    /// Map both sides into a common type, then merge them with `combine` if both are present
    #[inline]
    pub fn merge_with<T, F, G, H>(self, map_left: F, map_right: G, combine: H) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
        H: FnOnce(T, T) -> T,
    {
        match self {
            This(l) => map_left(l),
            That(r) => map_right(r),
            Both(l, r) => combine(map_left(l), map_right(r)),
        }
    }
    /// Get the left value, if present (i.e. for `This` and `Both`)
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            This(l) | Both(l, _) => Some(l),
            That(_) => None,
        }
    }
    /// Get the right value, if present (i.e. for `That` and `Both`)
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            That(r) | Both(_, r) => Some(r),
            This(_) => None,
        }
    }
    /// Get a mutable reference to the left value, if present
    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut L> {
        match self {
            This(l) | Both(l, _) => Some(l),
            That(_) => None,
        }
    }
    /// Get a mutable reference to the right value, if present
    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut R> {
        match self {
            That(r) | Both(_, r) => Some(r),
            This(_) => None,
        }
    }
    /// Get the left value if this is exactly `This`
    #[inline]
    pub fn just_this(self) -> Option<L> {
        match self {
            This(l) => Some(l),
            _ => None,
        }
    }
    /// Get the right value if this is exactly `That`
    #[inline]
    pub fn just_that(self) -> Option<R> {
        match self {
            That(r) => Some(r),
            _ => None,
        }
    }
    /// Get both values if this is exactly `Both`
    #[inline]
    pub fn just_both(self) -> Option<(L, R)> {
        match self {
            Both(l, r) => Some((l, r)),
            _ => None,
        }
    }
    /// Get the shape of this value
    #[inline]
    pub fn shape(&self) -> Shape {
        match self {
            This(_) => Shape::This,
            That(_) => Shape::That,
            Both(_, _) => Shape::Both,
        }
    }
    /// Whether this value is `This`
    #[inline]
    pub fn is_this(&self) -> bool {
        self.shape() == Shape::This
    }
    /// Whether this value is `That`
    #[inline]
    pub fn is_that(&self) -> bool {
        self.shape() == Shape::That
    }
    /// Whether this value is `Both`
    #[inline]
    pub fn is_both(&self) -> bool {
        self.shape() == Shape::Both
    }
    /// Whether this value carries a left value, i.e. is `This` or `Both`
    #[inline]
    pub fn has_left(&self) -> bool {
        self.shape().has_left()
    }
    /// Whether this value carries a right value, i.e. is `That` or `Both`
    #[inline]
    pub fn has_right(&self) -> bool {
        self.shape().has_right()
    }
    /// Borrow the contents of this value
    #[inline]
    pub fn as_ref(&self) -> These<&L, &R> {
        match self {
            This(l) => This(l),
            That(r) => That(r),
            Both(l, r) => Both(l, r),
        }
    }
    /// Mutably borrow the contents of this value
    #[inline]
    pub fn as_mut(&mut self) -> These<&mut L, &mut R> {
        match self {
            This(l) => This(l),
            That(r) => That(r),
            Both(l, r) => Both(l, r),
        }
    }
    /// Convert into an `Either`, returning both values as an error if this is `Both`
    #[inline]
    pub fn try_into_either(self) -> Result<Either<L, R>, (L, R)> {
        match self {
            This(l) => Ok(Either::Left(l)),
            That(r) => Ok(Either::Right(r)),
            Both(l, r) => Err((l, r)),
        }
    }
}

impl<T> These<T, T> {
    /**
    Merge a `These` with both sides of the same type, combining them with `combine` if both are present.

    # Example
    ```rust
    use these::These;
    assert_eq!(These::Both(2, 3).merge(|a, b| a * b), 6);
    assert_eq!(These::This(2).merge(|a: i32, b| a * b), 2);
    ```
    */
    #[inline]
    pub fn merge<F>(self, combine: F) -> T
    where
        F: FnOnce(T, T) -> T,
    {
        match self {
            This(t) | That(t) => t,
            Both(l, r) => combine(l, r),
        }
    }
}

impl<L: Hash, R: Hash> Hash for These<L, R> {
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hasher.write_u8(self.shape().discriminant());
        match self {
            This(l) => l.hash(hasher),
            That(r) => r.hash(hasher),
            Both(l, r) => {
                l.hash(hasher);
                r.hash(hasher);
            }
        }
    }
}

impl<L, R> From<Either<L, R>> for These<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> These<L, R> {
        match either {
            Either::Left(l) => This(l),
            Either::Right(r) => That(r),
        }
    }
}

impl<L, R> From<EitherOrBoth<L, R>> for These<L, R> {
    #[inline]
    fn from(value: EitherOrBoth<L, R>) -> These<L, R> {
        match value {
            EitherOrBoth::Left(l) => This(l),
            EitherOrBoth::Right(r) => That(r),
            EitherOrBoth::Both(l, r) => Both(l, r),
        }
    }
}

impl<L, R> From<These<L, R>> for EitherOrBoth<L, R> {
    #[inline]
    fn from(value: These<L, R>) -> EitherOrBoth<L, R> {
        match value {
            This(l) => EitherOrBoth::Left(l),
            That(r) => EitherOrBoth::Right(r),
            Both(l, r) => EitherOrBoth::Both(l, r),
        }
    }
}

#[cfg(feature = "rand")]
mod rand_impl {
    use super::*;
    use rand::distributions::{Distribution, Standard};
    use rand::Rng;

    /// A distribution over `These`, sampling each payload from its own distribution
    ///
    /// The shape is chosen uniformly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TheseDistribution<DL, DR> {
        /// The distribution of left values
        pub left: DL,
        /// The distribution of right values
        pub right: DR,
    }

    impl<DL, DR> TheseDistribution<DL, DR> {
        /// Create a new distribution from the distributions of each side
        pub fn new(left: DL, right: DR) -> TheseDistribution<DL, DR> {
            TheseDistribution { left, right }
        }
    }

    impl<L, R, DL, DR> Distribution<These<L, R>> for TheseDistribution<DL, DR>
    where
        DL: Distribution<L>,
        DR: Distribution<R>,
    {
        fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> These<L, R> {
            match Shape::ALL[rng.gen_range(0usize, 3)] {
                Shape::This => This(self.left.sample(rng)),
                Shape::That => That(self.right.sample(rng)),
                Shape::Both => {
                    let left = self.left.sample(rng);
                    Both(left, self.right.sample(rng))
                }
            }
        }
    }

    impl<L, R> Distribution<These<L, R>> for Standard
    where
        Standard: Distribution<L> + Distribution<R>,
    {
        fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> These<L, R> {
            TheseDistribution::new(Standard, Standard).sample(rng)
        }
    }

    impl Distribution<Shape> for Standard {
        fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Shape {
            Shape::ALL[rng.gen_range(0usize, 3)]
        }
    }
}

#[cfg(feature = "rand")]
pub use rand_impl::TheseDistribution;

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn case_analysis_dispatches_on_shape() {
        let on_this = |n: i32| n + 1;
        let on_that = |s: &str| s.len() as i32;
        let on_both = |n: i32, s: &str| n * s.len() as i32;
        assert_eq!(These::This(5).fold(on_this, on_that, on_both), 6);
        assert_eq!(These::That("abc").fold(on_this, on_that, on_both), 3);
        assert_eq!(These::Both(2, "abc").fold(on_this, on_that, on_both), 6);
    }

    #[test]
    fn defaults_fill_missing_sides() {
        assert_eq!(These::<i32, &str>::This(5).with_defaults(0, ""), (5, ""));
        assert_eq!(These::<i32, &str>::That("x").with_defaults(0, ""), (0, "x"));
        assert_eq!(These::Both(5, "x").with_defaults(0, ""), (5, "x"));
        assert_eq!(
            These::<i32, String>::This(5).with_defaults_with(|| 0, || "none".to_string()),
            (5, "none".to_string())
        );
    }

    #[test]
    fn merging_same_typed_sides() {
        assert_eq!(These::This(2).merge(|a: i32, b| a + b), 2);
        assert_eq!(These::That(3).merge(|a: i32, b| a + b), 3);
        assert_eq!(These::Both(2, 3).merge(|a, b| a + b), 5);
        let merged = These::Both(2, "abc").merge_with(|n| n, |s| s.len(), |a, b| a * b);
        assert_eq!(merged, 6);
        assert_eq!(These::<usize, &str>::That("ab").merge_with(|n| n, |s| s.len(), |a, b| a * b), 2);
    }

    #[test]
    fn field_selection_and_exact_extraction_differ_on_both() {
        let both: These<i32, char> = Both(1, 'a');
        assert_eq!(both.left(), Some(1));
        assert_eq!(both.right(), Some('a'));
        assert_eq!(both.just_this(), None);
        assert_eq!(both.just_that(), None);
        assert_eq!(both.just_both(), Some((1, 'a')));

        let this: These<i32, char> = This(1);
        assert_eq!(this.left(), Some(1));
        assert_eq!(this.right(), None);
        assert_eq!(this.just_this(), Some(1));
        assert_eq!(this.just_both(), None);

        let that: These<i32, char> = That('a');
        assert_eq!(that.left(), None);
        assert_eq!(that.just_that(), Some('a'));
    }

    #[test]
    fn mutable_focus_updates_in_place() {
        let mut value: These<i32, String> = Both(1, "a".to_string());
        if let Some(l) = value.left_mut() {
            *l += 1;
        }
        if let Some(r) = value.right_mut() {
            r.push('b');
        }
        assert_eq!(value, Both(2, "ab".to_string()));
        let mut this: These<i32, String> = This(1);
        assert_eq!(this.right_mut(), None);
    }

    #[test]
    fn shapes_are_ordered_before_payloads() {
        let values: [These<i32, i32>; 3] = [Both(0, 0), That(0), This(9)];
        let mut sorted = values;
        sorted.sort();
        assert_eq!(sorted, [This(9), That(0), Both(0, 0)]);
        assert!(This::<i32, i32>(1) < This(2));
        assert!(Both(1, 5) < Both(2, 0));
        assert!(Both(1, 0) < Both(1, 5));
    }

    #[test]
    fn discriminants_round_trip() {
        for shape in Shape::ALL.iter() {
            assert_eq!(Shape::from_discriminant(shape.discriminant()), Some(*shape));
        }
        assert_eq!(Shape::from_discriminant(3), None);
        assert_eq!(Shape::from_discriminant(255), None);
    }

    #[test]
    fn option_conversions() {
        assert_eq!(These::from_options(Some(1), None::<char>), Some(This(1)));
        assert_eq!(These::from_options(None::<i32>, Some('a')), Some(That('a')));
        assert_eq!(Both(1, 'a').into_options(), (Some(1), Some('a')));
    }

    #[test]
    fn either_conversions() {
        assert_eq!(These::<i32, char>::from(Either::Left(1)), This(1));
        assert_eq!(These::<i32, char>::from(Either::Right('a')), That('a'));
        assert_eq!(These::<i32, char>::This(1).try_into_either(), Ok(Either::Left(1)));
        assert_eq!(Both(1, 'a').try_into_either(), Err((1, 'a')));
        let zipped: Vec<These<i32, char>> = vec![1, 2]
            .into_iter()
            .zip_longest(vec!['a'])
            .map(These::from)
            .collect();
        assert_eq!(zipped, vec![Both(1, 'a'), This(2)]);
        assert_eq!(EitherOrBoth::from(That::<i32, char>('a')), EitherOrBoth::Right('a'));
    }

    #[test]
    fn hashing_distinguishes_shapes() {
        assert_ne!(hash_of(&This::<u8, u8>(0)), hash_of(&That::<u8, u8>(0)));
        assert_eq!(hash_of(&Both(1, 'a')), hash_of(&Both(1, 'a')));
    }

    #[quickcheck]
    fn exactly_one_classification_holds(value: These<i32, String>) -> bool {
        let flags = [value.is_this(), value.is_that(), value.is_both()];
        flags.iter().filter(|flag| **flag).count() == 1
    }

    #[quickcheck]
    fn equal_values_hash_equally(value: These<i32, String>) -> bool {
        let rebuilt = value.as_ref().bimap(
            |l| *l,
            |r| {
                let mut text = String::with_capacity(r.len() + 64);
                text.extend(r.chars());
                text
            },
        );
        rebuilt == value && hash_of(&rebuilt) == hash_of(&value)
    }

    #[quickcheck]
    fn hash_agrees_with_equality(x: These<bool, Option<bool>>, y: These<bool, Option<bool>>) -> bool {
        x != y || hash_of(&x) == hash_of(&y)
    }

    #[test]
    fn hash_agrees_with_equality_on_every_small_value() {
        let values: Vec<These<bool, Option<bool>>> = [false, true]
            .iter()
            .flat_map(|&l| vec![This(l), Both(l, None), Both(l, Some(false)), Both(l, Some(true))])
            .chain(vec![That(None), That(Some(false)), That(Some(true))])
            .collect();
        for x in &values {
            for y in &values {
                assert_eq!(x == y, hash_of(x) == hash_of(y), "{:?} vs {:?}", x, y);
            }
        }
    }

    #[quickcheck]
    fn options_round_trip(value: These<u8, char>) -> bool {
        let (left, right) = value.into_options();
        These::from_options(left, right) == Some(value)
            && value.has_left() == left.is_some()
            && value.has_right() == right.is_some()
    }

    #[cfg(feature = "rand")]
    #[test]
    fn sampling_reaches_every_shape() {
        use rand::{Rng, SeedableRng};
        use rand_xoshiro::Xoshiro256PlusPlus;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x7e5e);
        let mut seen = [false; 3];
        for _ in 0..256 {
            let value: These<u8, bool> = rng.gen();
            seen[value.shape().discriminant() as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn custom_distributions_drive_payloads() {
        use rand::distributions::{Distribution, Uniform};
        use rand::SeedableRng;
        use rand_xoshiro::Xoshiro256PlusPlus;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(17);
        let dist = TheseDistribution::new(Uniform::new(10, 20), Uniform::new(-5, 0));
        for _ in 0..64 {
            let value: These<i32, i32> = dist.sample(&mut rng);
            assert!(value.left().map_or(true, |l| (10..20).contains(&l)));
            assert!(value.right().map_or(true, |r| (-5..0).contains(&r)));
        }
    }
}
