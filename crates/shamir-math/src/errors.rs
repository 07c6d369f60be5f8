use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Indicates that two interpolation points share an abscissa.
    #[error("Duplicate abscissa: x = {0} appears more than once")]
    DuplicateAbscissa(i64),

    /// Indicates a fraction with a zero denominator.
    #[error("Division by zero")]
    DivisionByZero,

    /// Indicates that the interpolated value is not an integer, i.e. that the
    /// points do not lie on a polynomial with integer values.
    #[error("Non-integral secret: {numerator}/{denominator} is not an integer")]
    NonIntegralSecret {
        /// Reduced numerator of the interpolated value.
        numerator: BigInt,
        /// Reduced (positive) denominator of the interpolated value.
        denominator: BigInt,
    },
}
