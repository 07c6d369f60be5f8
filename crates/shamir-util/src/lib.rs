#![crate_name = "shamir_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Numeral base utilities for the shamir.rs library.
//!
//! Share values are transmitted as strings in a numeral base between
//! [`MIN_BASE`] and [`MAX_BASE`]. The decoding implemented here is strict: an
//! optional sign followed by at least one digit, each digit below the base,
//! with no whitespace or separators.

use num_bigint::{BigInt, Sign};
use thiserror::Error;

/// The smallest supported numeral base.
pub const MIN_BASE: u32 = 2;

/// The largest supported numeral base (digits `0-9` then `a-z`).
pub const MAX_BASE: u32 = 36;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing numeral bases or decoding values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The base string is not a decimal integer.
    #[error("Invalid base: {0:?} is not an integer")]
    InvalidBase(String),

    /// The base is an integer outside of the supported range.
    #[error("Unsupported base {0}: must be between {} and {}", MIN_BASE, MAX_BASE)]
    UnsupportedBase(i64),

    /// The value contains no digits.
    #[error("Empty value: no digits to decode")]
    EmptyValue,

    /// The value contains a character that is not a digit in the base.
    #[error("Invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Its character position in the original string.
        position: usize,
        /// The base the value was decoded in.
        base: u32,
    },
}

/// Returns an error unless `base` is within [`MIN_BASE`]..=[`MAX_BASE`].
pub fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::UnsupportedBase(base as i64))
    }
}

/// Parse a numeral base written as a decimal integer.
///
/// An optional leading `+` or `-` is accepted, so that `"-2"` is reported as
/// an unsupported base rather than as garbage.
pub fn parse_base(s: &str) -> Result<u32> {
    let base = s
        .parse::<i64>()
        .map_err(|_| Error::InvalidBase(s.to_string()))?;
    match u32::try_from(base) {
        Ok(b) if check_base(b).is_ok() => Ok(b),
        _ => Err(Error::UnsupportedBase(base)),
    }
}

/// Decode an arbitrary-precision integer written in `base`.
///
/// Digits above 9 are the letters `a` to `z`, in either case.
pub fn decode_radix(value: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;

    let (sign, digits, offset) = if let Some(rest) = value.strip_prefix('-') {
        (Sign::Minus, rest, 1)
    } else if let Some(rest) = value.strip_prefix('+') {
        (Sign::Plus, rest, 1)
    } else {
        (Sign::Plus, value, 0)
    };

    if digits.is_empty() {
        return Err(Error::EmptyValue);
    }

    let mut values = Vec::with_capacity(digits.len());
    for (position, digit) in digits.chars().enumerate() {
        match digit.to_digit(base) {
            Some(d) => values.push(d as u8),
            None => {
                return Err(Error::InvalidDigit {
                    digit,
                    position: position + offset,
                    base,
                })
            }
        }
    }

    BigInt::from_radix_be(sign, &values, base).ok_or(Error::UnsupportedBase(base as i64))
}

/// Encode `value` in `base`, using lowercase letters for digits above 9.
pub fn encode_radix(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
