/*!
[![Documentation](https://docs.rs/these/badge.svg)](https://docs.rs/these/)
[![License: MIT](https://img.shields.io/badge/License-MIT-blue.svg)](https://opensource.org/licenses/MIT)

`these` provides [`These`](These), a sum type holding *this* value, *that* value, or *both*, together
with its algebra: case analysis, bifunctor mapping and traversal, merging, the associativity and
commutativity witnesses, semigroup combination and a right-biased monad.

`These<L, R>` sits between `Either<L, R>`, which forces a choice of exactly one side, and `(L, R)`,
which always holds both. It is the natural result of combining two partially-overlapping pieces of
information:
```rust
use these::These;

let merged = These::from_options(Some(1), None::<&str>).unwrap();
assert_eq!(merged, These::This(1));
assert_eq!(merged.with_defaults(0, "none"), (1, "none"));
assert_eq!(merged.swap(), These::That(1));
```

Values can be written as JSON (`{"This": .., "That": ..}`, see [`json`](json)) or in a compact binary
layout led by a one-byte discriminant (see [`binary`](binary)). Random values are available through
`rand` (feature `rand`) and `quickcheck` (feature `quickcheck`).
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

pub mod binary;
pub mod error;
pub mod json;
pub mod partition;
pub mod semigroup;
pub mod these;

mod serde_impl;

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;

pub use crate::error::{Error, Result};
pub use crate::semigroup::Semigroup;
pub use crate::these::{Shape, These};

#[cfg(feature = "rand")]
pub use crate::these::TheseDistribution;
