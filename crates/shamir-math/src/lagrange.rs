//! Lagrange interpolation at zero over the rationals.
//!
//! For distinct abscissas `x_0, ..., x_{k-1}` the value at zero of the unique
//! polynomial of degree `< k` through `(x_i, y_i)` is
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j ≠ i} (-x_j) / (x_i - x_j)
//! ```
//!
//! Every factor is kept as an exact [`Fraction`], so the only division that
//! has to be exact is the final conversion of `f(0)` into an integer.

use crate::{Error, Fraction, Point, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::Zero;
use shamir_traits::ShareIndex;

/// Returns an error if two abscissas are equal.
pub fn check_distinct(xs: &[i64]) -> Result<()> {
    match xs.iter().duplicates().next() {
        Some(x) => Err(Error::DuplicateAbscissa(*x)),
        None => Ok(()),
    }
}

/// Selects the `k` items with the lowest index, in ascending index order.
///
/// Items with equal indices keep their relative order. Returns fewer than `k`
/// items when `items` is shorter than `k`.
pub fn select_lowest<P: ShareIndex>(items: &[P], k: usize) -> Vec<&P> {
    items
        .iter()
        .sorted_by_key(|p| p.index())
        .take(k)
        .collect()
}

/// Computes the Lagrange basis coefficients at zero,
/// `λ_i = Π_{j ≠ i} (-x_j) / (x_i - x_j)`, for every abscissa of `xs`.
///
/// Returns an error if two abscissas are equal.
pub fn lagrange_basis_at_zero(xs: &[i64]) -> Result<Vec<Fraction>> {
    check_distinct(xs)?;
    let xs = xs.iter().map(|x| BigInt::from(*x)).collect_vec();
    xs.iter()
        .enumerate()
        .map(|(i, xi)| basis_term(BigInt::from(1), i, xi, &xs))
        .collect()
}

/// Interpolates at zero the polynomial of degree `< points.len()` through
/// `points`, as an exact rational.
///
/// Returns an error if two points share an abscissa.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Fraction> {
    check_distinct(&points.iter().map(|p| p.x).collect_vec())?;
    let xs = points.iter().map(|p| BigInt::from(p.x)).collect_vec();

    let mut constant = Fraction::zero();
    for (i, (point, xi)) in points.iter().zip(&xs).enumerate() {
        let term = basis_term(point.y.clone(), i, xi, &xs)?;
        constant += &term;
    }
    Ok(constant)
}

/// Interpolates at zero the polynomial through `points`, requiring the result
/// to be an integer.
///
/// Returns [`Error::NonIntegralSecret`] when the points do not lie on a
/// polynomial with integer values at zero.
pub fn constant_term(points: &[Point]) -> Result<BigInt> {
    interpolate_at_zero(points)?.into_integer()
}

// y_i · Π_{j ≠ i} (-x_j) / (x_i - x_j)
fn basis_term(y: BigInt, i: usize, xi: &BigInt, xs: &[BigInt]) -> Result<Fraction> {
    let mut term = Fraction::from_integer(y);
    for (j, xj) in xs.iter().enumerate() {
        if i != j {
            term.mul_ratio(&-xj, &(xi - xj))?;
        }
    }
    Ok(term)
}
