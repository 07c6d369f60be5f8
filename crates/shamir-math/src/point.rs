use num_bigint::BigInt;
use shamir_traits::ShareIndex;

/// An evaluation `(x, y)` of the shared polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// The abscissa.
    pub x: i64,
    /// The exact value of the polynomial at `x`.
    pub y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new<T: Into<BigInt>>(x: i64, y: T) -> Self {
        Self { x, y: y.into() }
    }
}

impl ShareIndex for Point {
    fn index(&self) -> i64 {
        self.x
    }
}

impl From<(i64, BigInt)> for Point {
    fn from((x, y): (i64, BigInt)) -> Self {
        Self { x, y }
    }
}
