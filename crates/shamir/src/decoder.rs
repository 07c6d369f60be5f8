/// Share decoding.
///
/// This module turns a batch of raw, base-encoded shares into exact integer
/// points. Invalid or absent shares are skipped rather than aborting the
/// batch; every skipped share is reported as a [`Diagnostic`].
use crate::config::validate_share_total;
use crate::{RawShare, ReconstructionRequest, Result, ShareError};
use shamir_math::Point;
use shamir_traits::DecodeShare;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

/// A share that was skipped during decoding, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index of the skipped share.
    pub index: u64,
    /// Reason it was skipped.
    pub error: ShareError,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "share {}: {}", self.index, self.error)
    }
}

/// The result of decoding a batch of shares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded points, in ascending abscissa order.
    pub points: Vec<Point>,
    /// One diagnostic per skipped share, in ascending index order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Decoded {
    /// Builds a reconstruction request with threshold `k` from the decoded
    /// points.
    pub fn into_request(self, k: usize) -> ReconstructionRequest {
        ReconstructionRequest::new(k, self.points)
    }
}

/// Decoder for the shares indexed `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDecoder {
    n: u64,
}

impl ShareDecoder {
    /// Create a decoder expecting `n` shares.
    ///
    /// Returns an error if `n` exceeds [`MAX_SHARES`](crate::config::MAX_SHARES).
    pub fn new(n: u64) -> Result<Self> {
        validate_share_total(n)?;
        Ok(Self { n })
    }

    /// Number of shares expected.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Decode the shares indexed `1..=n` from `records`.
    ///
    /// Records with an index outside of `1..=n` are ignored. Each skipped
    /// share is logged at the `warn` level and returned as a diagnostic.
    pub fn decode(&self, records: &BTreeMap<u64, RawShare>) -> Decoded {
        let mut decoded = Decoded::default();

        for index in 1..=self.n {
            let result = match records.get(&index) {
                Some(record) => record.decode_share(index),
                None => Err(ShareError::Missing),
            };
            match result {
                Ok(point) => decoded.points.push(point),
                Err(error) => {
                    warn!(index, %error, "skipping share");
                    decoded.diagnostics.push(Diagnostic { index, error });
                }
            }
        }

        let ignored = records.range(self.n.saturating_add(1)..).count()
            + usize::from(records.contains_key(&0));
        if ignored > 0 {
            debug!(ignored, n = self.n, "ignoring records outside of 1..=n");
        }

        debug!(
            decoded = decoded.points.len(),
            skipped = decoded.diagnostics.len(),
            "decoded shares"
        );
        decoded
    }
}
