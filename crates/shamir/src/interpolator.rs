/// Secret reconstruction.
///
/// The secret is the value at zero of the polynomial through a threshold of
/// points, as computed by [`shamir_math::lagrange`].
///
/// # Selection
///
/// When more than `k` points are available, the `k` points with the lowest
/// abscissas are used. Any `k` points of a genuine polynomial of degree `< k`
/// give the same secret; fixing the subset makes the result reproducible and
/// duplicate detection deterministic.
use crate::config::{validate_share_count, validate_threshold};
use crate::{Error, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use rayon::prelude::*;
use shamir_math::{lagrange, Point};
use shamir_traits::Reconstruct;
use tracing::debug;

/// A threshold and the points to reconstruct from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionRequest {
    /// Threshold for reconstruction
    pub k: usize,
    /// Available points, in any order
    pub points: Vec<Point>,
}

impl ReconstructionRequest {
    /// Creates a new reconstruction request.
    ///
    /// The request is validated when it is reconstructed.
    pub fn new(k: usize, points: Vec<Point>) -> Self {
        Self { k, points }
    }
}

impl Reconstruct for ReconstructionRequest {
    type Secret = BigInt;
    type Error = Error;

    fn reconstruct(&self) -> Result<BigInt> {
        reconstruct(&self.points, self.k)
    }
}

/// Reconstruct the secret shared with threshold `k` from `points`.
///
/// # Errors
/// - [`Error::InvalidThreshold`] if `k` is zero,
/// - [`Error::InsufficientPoints`] if fewer than `k` points are given,
/// - [`shamir_math::Error::DuplicateAbscissa`] if two selected points share
///   an abscissa,
/// - [`shamir_math::Error::NonIntegralSecret`] if the selected points do not
///   lie on a polynomial with an integer constant term.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt> {
    validate_threshold(k)?;
    validate_share_count(points.len(), k)?;

    let selected = lagrange::select_lowest(points, k)
        .into_iter()
        .cloned()
        .collect_vec();
    debug!(
        k,
        available = points.len(),
        abscissas = ?selected.iter().map(|p| p.x).collect_vec(),
        "selected points"
    );

    let secret = lagrange::constant_term(&selected)?;
    debug!(bits = secret.bits(), "reconstructed secret");
    Ok(secret)
}

/// Reconstruct independent requests in parallel.
///
/// The results are in the same order as `requests`.
pub fn reconstruct_all(requests: &[ReconstructionRequest]) -> Vec<Result<BigInt>> {
    requests.par_iter().map(|r| r.reconstruct()).collect()
}
