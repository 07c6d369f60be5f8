//! Exact rational numbers over arbitrary-precision integers.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul};

/// An exact rational number `numer / denom`.
///
/// The fraction is always kept in lowest terms with a strictly positive
/// denominator, so that two equal rationals have equal representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Creates the fraction `numer / denom`.
    ///
    /// Returns an error if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut f = Self { numer, denom };
        f.reduce();
        Ok(f)
    }

    /// Creates the fraction `value / 1`.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    /// Returns the numerator.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator, which is always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns whether the fraction is an integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Multiplies the fraction in place by `numer / denom`.
    ///
    /// Returns an error if `denom` is zero, in which case `self` is unchanged.
    pub fn mul_ratio(&mut self, numer: &BigInt, denom: &BigInt) -> Result<()> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.numer *= numer;
        self.denom *= denom;
        self.reduce();
        Ok(())
    }

    /// Converts the fraction into an integer, failing when the denominator
    /// does not divide the numerator.
    pub fn into_integer(self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.numer)
        } else {
            Err(Error::NonIntegralSecret {
                numerator: self.numer,
                denominator: self.denom,
            })
        }
    }

    fn reduce(&mut self) {
        if self.denom.is_negative() {
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let mut f = Fraction {
            numer: &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            denom: &self.denom * &rhs.denom,
        };
        f.reduce();
        f
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        *self = &*self + rhs;
    }
}

impl Mul<&BigInt> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &BigInt) -> Fraction {
        let mut f = Fraction {
            numer: &self.numer * rhs,
            denom: self.denom.clone(),
        };
        f.reduce();
        f
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
