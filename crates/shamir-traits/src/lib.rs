#![crate_name = "shamir_traits"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Traits for Shamir secret reconstruction.

/// Values that are located at an abscissa, i.e. that know which evaluation
/// point of the shared polynomial they belong to.
pub trait ShareIndex {
    /// The abscissa (x-coordinate) of this value.
    fn index(&self) -> i64;
}

/// Decoding of an encoded share into an exact value.
pub trait DecodeShare {
    /// The decoded value.
    type Output;
    /// The error returned when the share cannot be decoded.
    type Error;

    /// Attempt to decode the share located at `index`.
    fn decode_share(&self, index: u64) -> Result<Self::Output, Self::Error>;
}

/// Reconstruction of a secret from a threshold of shares.
pub trait Reconstruct {
    /// The reconstructed secret.
    type Secret;
    /// The error returned when reconstruction fails.
    type Error;

    /// Reconstruct the secret.
    fn reconstruct(&self) -> Result<Self::Secret, Self::Error>;
}

impl<T: ShareIndex> ShareIndex for &T {
    fn index(&self) -> i64 {
        (*self).index()
    }
}

#[cfg(test)]
mod tests {
    use super::ShareIndex;

    struct At(i64);

    impl ShareIndex for At {
        fn index(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn reference_forwards_index() {
        let at = At(7);
        let by_ref = &at;
        assert_eq!(ShareIndex::index(&by_ref), 7);
    }
}
