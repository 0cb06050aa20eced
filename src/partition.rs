/*!
Selecting and partitioning the payloads of sequences of `These` values

Every function here preserves the relative order of the elements it keeps.
*/
use crate::these::These::{self, *};
use either::Either;

/// Collect the payloads of the `This` elements of a sequence
pub fn collect_this<L, R, I>(values: I) -> Vec<L>
where
    I: IntoIterator<Item = These<L, R>>,
{
    values.into_iter().filter_map(These::just_this).collect()
}

/// Collect the payloads of the `That` elements of a sequence
pub fn collect_that<L, R, I>(values: I) -> Vec<R>
where
    I: IntoIterator<Item = These<L, R>>,
{
    values.into_iter().filter_map(These::just_that).collect()
}

/// Collect the payloads of the `Both` elements of a sequence
pub fn collect_both<L, R, I>(values: I) -> Vec<(L, R)>
where
    I: IntoIterator<Item = These<L, R>>,
{
    values.into_iter().filter_map(These::just_both).collect()
}

/// Collect every left value of a sequence, i.e. those of both its `This` and `Both` elements
pub fn collect_here<L, R, I>(values: I) -> Vec<L>
where
    I: IntoIterator<Item = These<L, R>>,
{
    values.into_iter().filter_map(These::left).collect()
}

/// Collect every right value of a sequence, i.e. those of both its `That` and `Both` elements
pub fn collect_there<L, R, I>(values: I) -> Vec<R>
where
    I: IntoIterator<Item = These<L, R>>,
{
    values.into_iter().filter_map(These::right).collect()
}

/**
Partition a sequence by shape in a single pass, returning the payloads of its `Both`, `This` and
`That` elements as `(both, (this, that))`.

# Example
```rust
use these::{partition::partition_these, These};
let values = vec![These::This(1), These::That('a'), These::Both(2, 'b')];
assert_eq!(partition_these(values), (vec![(2, 'b')], (vec![1], vec!['a'])));
```
*/
pub fn partition_these<L, R, I>(values: I) -> (Vec<(L, R)>, (Vec<L>, Vec<R>))
where
    I: IntoIterator<Item = These<L, R>>,
{
    let mut both = Vec::new();
    let mut this = Vec::new();
    let mut that = Vec::new();
    for value in values {
        match value {
            This(l) => this.push(l),
            That(r) => that.push(r),
            Both(l, r) => both.push((l, r)),
        }
    }
    (both, (this, that))
}

/// Partition a sequence into all of its left values and all of its right values in a single pass
pub fn partition_here_there<L, R, I>(values: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = These<L, R>>,
{
    let mut here = Vec::new();
    let mut there = Vec::new();
    for value in values {
        let (l, r) = value.into_options();
        here.extend(l);
        there.extend(r);
    }
    (here, there)
}

/**
Partition a sequence of `Either`s into its left and right values, keeping track of which sides occur.

Return `None` for an empty sequence; otherwise, the result holds a non-empty vector on each side that
occurs at least once.
*/
pub fn partition_eithers<L, R, I>(values: I) -> Option<These<Vec<L>, Vec<R>>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for value in values {
        match value {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }
    These::from_options(nonempty(lefts), nonempty(rights))
}

fn nonempty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
