//! Polynomials with integer coefficients.

use crate::Point;
use num_bigint::BigInt;
use num_traits::Zero;

/// A polynomial with arbitrary-precision integer coefficients, stored from
/// the constant term upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, constant term first.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, constant term first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the constant term, i.e. the value at zero.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    pub fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * &x + c)
    }

    /// Evaluates the polynomial at every abscissa of `xs`.
    pub fn points<I: IntoIterator<Item = i64>>(&self, xs: I) -> Vec<Point> {
        xs.into_iter()
            .map(|x| Point::new(x, self.evaluate(x)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Polynomial;
    use crate::Point;
    use num_bigint::BigInt;
    use num_traits::Zero;

    #[test]
    fn evaluate() {
        // 2x^2 + 4x - 3
        let p = Polynomial::new(vec![BigInt::from(-3), BigInt::from(4), BigInt::from(2)]);
        assert_eq!(p.evaluate(0), BigInt::from(-3));
        assert_eq!(p.evaluate(1), BigInt::from(3));
        assert_eq!(p.evaluate(2), BigInt::from(13));
        assert_eq!(p.evaluate(-2), BigInt::from(-3));
        assert_eq!(p.constant_term(), BigInt::from(-3));
    }

    #[test]
    fn empty_polynomial_is_zero() {
        let p = Polynomial::new(vec![]);
        assert!(p.evaluate(5).is_zero());
        assert!(p.constant_term().is_zero());
    }

    #[test]
    fn points() {
        let p = Polynomial::new(vec![BigInt::zero(), BigInt::zero(), BigInt::from(1)]);
        assert_eq!(
            p.points(1..=3),
            vec![Point::new(1, 1), Point::new(2, 4), Point::new(3, 9)]
        );
    }
}
