#![crate_name = "shamir_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Exact arithmetic for Shamir secret reconstruction over the integers.

mod errors;
mod fraction;
mod point;
mod poly;

pub mod lagrange;

pub use errors::{Error, Result};
pub use fraction::Fraction;
pub use point::Point;
pub use poly::Polynomial;
