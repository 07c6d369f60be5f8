/// Configuration validation for reconstruction requests.
use crate::{Error, Result};

/// The largest share count `n` accepted from an input document.
pub const MAX_SHARES: u64 = 1 << 16;

/// Validates a threshold.
pub fn validate_threshold(k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidThreshold(0));
    }
    Ok(())
}

/// Converts a signed threshold, as found in input documents, into a valid
/// threshold.
pub fn threshold_from_i64(k: i64) -> Result<usize> {
    if k <= 0 {
        return Err(Error::InvalidThreshold(k));
    }
    usize::try_from(k).map_err(|_| Error::InvalidField {
        field: "k",
        reason: format!("{k} does not fit in a machine word"),
    })
}

/// Validates the declared number of shares.
pub fn validate_share_total(n: u64) -> Result<()> {
    if n > MAX_SHARES {
        return Err(Error::InvalidField {
            field: "n",
            reason: format!("{n} exceeds the maximum of {MAX_SHARES} shares"),
        });
    }
    Ok(())
}

/// Validates that enough points are available for the threshold.
pub fn validate_share_count(provided: usize, required: usize) -> Result<()> {
    if provided < required {
        return Err(Error::InsufficientPoints { provided, required });
    }
    Ok(())
}
