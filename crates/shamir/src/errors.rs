use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible request-level errors from this
/// library. Any of them aborts the reconstruction it was returned from.
#[derive(Debug, Error)]
pub enum Error {
    /// Indicates an error from the exact arithmetic, such as two selected
    /// points sharing an abscissa.
    #[error("{0}")]
    Math(shamir_math::Error),

    /// Indicates a threshold below one.
    #[error("Invalid threshold: k = {0} must be at least 1")]
    InvalidThreshold(i64),

    /// Indicates that fewer valid points than the threshold are available.
    #[error("Insufficient points: {provided} valid points provided, {required} required")]
    InsufficientPoints {
        /// Number of valid points.
        provided: usize,
        /// The threshold.
        required: usize,
    },

    /// Indicates an input document without a `keys` object.
    #[error("Missing 'keys' object with 'n' and 'k'")]
    MissingKeys,

    /// Indicates a `keys` object without one of its fields.
    #[error("The 'keys' object must contain '{0}'")]
    MissingField(&'static str),

    /// Indicates a `keys` field holding an unusable value.
    #[error("Invalid '{field}': {reason}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Indicates a document that is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Indicates an input file that could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<shamir_math::Error> for Error {
    fn from(e: shamir_math::Error) -> Self {
        Error::Math(e)
    }
}

/// Errors affecting a single share. The share is skipped and decoding of the
/// remaining shares continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The share is absent from the input.
    #[error("share is missing")]
    Missing,

    /// The share lacks its base or value, or its base is unusable.
    #[error("malformed share: {0}")]
    Malformed(String),

    /// The value is not a valid integer in the stated base.
    #[error("cannot decode value: {0}")]
    Decode(shamir_util::Error),
}

impl ShareError {
    /// Returns whether the share was present but malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ShareError::Malformed(_))
    }
}
