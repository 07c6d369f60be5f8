#![crate_name = "shamir"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Shamir secret reconstruction over the integers.
//!
//! Shares are `(x, y)` evaluations of an integer polynomial, with `y` written
//! in a numeral base between 2 and 36. The [`ShareDecoder`] turns a batch of
//! raw shares into exact points, skipping the invalid ones, and
//! [`reconstruct`] recovers the polynomial's constant term from a threshold of
//! them using exact Lagrange interpolation.

mod errors;
mod share;

/// Validation of thresholds and share counts.
pub mod config;
/// Decoding of raw shares into points.
pub mod decoder;
pub mod input;
/// Reconstruction of secrets from points.
pub mod interpolator;

pub use decoder::{Decoded, Diagnostic, ShareDecoder};
pub use errors::{Error, Result, ShareError};
pub use input::TestCase;
pub use interpolator::{reconstruct, reconstruct_all, ReconstructionRequest};
pub use shamir_math::Point;
pub use shamir_traits::{DecodeShare, Reconstruct, ShareIndex};
pub use share::RawShare;

// Test the source code included in the README.
#[macro_use]
extern crate doc_comment;
#[cfg(doctest)]
doctest!("../README.md");
