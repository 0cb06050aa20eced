/*!
`quickcheck` generation and shrinking for `These`
*/
use crate::these::{Shape, These};
use quickcheck::{Arbitrary, Gen};

impl<L: Arbitrary, R: Arbitrary> Arbitrary for These<L, R> {
    /// Choose a shape uniformly, then generate its payload(s)
    fn arbitrary(g: &mut Gen) -> These<L, R> {
        match g.choose(&Shape::ALL).copied().unwrap_or(Shape::Both) {
            Shape::This => These::This(L::arbitrary(g)),
            Shape::That => These::That(R::arbitrary(g)),
            Shape::Both => {
                let left = L::arbitrary(g);
                These::Both(left, R::arbitrary(g))
            }
        }
    }

    /// Shrink `Both` first to each of its sides alone, then to `Both` of shrunk pairs
    fn shrink(&self) -> Box<dyn Iterator<Item = These<L, R>>> {
        match self {
            These::This(l) => Box::new(l.shrink().map(These::This)),
            These::That(r) => Box::new(r.shrink().map(These::That)),
            These::Both(l, r) => {
                let sides = vec![These::This(l.clone()), These::That(r.clone())];
                let pairs = (l.clone(), r.clone())
                    .shrink()
                    .map(|(l, r)| These::Both(l, r));
                Box::new(sides.into_iter().chain(pairs))
            }
        }
    }
}
