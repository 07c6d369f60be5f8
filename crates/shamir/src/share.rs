//! Raw, still encoded, shares.

use crate::ShareError;
use serde::{Deserialize, Deserializer};
use shamir_math::Point;
use shamir_traits::DecodeShare;
use shamir_util::{decode_radix, parse_base};

/// A share as received: an encoded value and the base it is written in.
///
/// Both fields are optional because input documents may omit them; a share
/// missing either one is rejected when decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawShare {
    /// The numeral base, as a decimal string.
    #[serde(default, deserialize_with = "string_or_none")]
    pub base: Option<String>,
    /// The value, written in `base`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub value: Option<String>,
}

impl RawShare {
    /// Creates a share with both fields present.
    pub fn new<B: Into<String>, V: Into<String>>(base: B, value: V) -> Self {
        Self {
            base: Some(base.into()),
            value: Some(value.into()),
        }
    }
}

impl DecodeShare for RawShare {
    type Output = Point;
    type Error = ShareError;

    fn decode_share(&self, index: u64) -> Result<Point, ShareError> {
        let (base, value) = match (&self.base, &self.value) {
            (Some(base), Some(value)) => (base, value),
            (None, Some(_)) => return Err(ShareError::Malformed("missing base".to_string())),
            (Some(_), None) => return Err(ShareError::Malformed("missing value".to_string())),
            (None, None) => {
                return Err(ShareError::Malformed(
                    "missing base and value".to_string(),
                ))
            }
        };

        let x = i64::try_from(index)
            .map_err(|_| ShareError::Malformed(format!("index {index} is out of range")))?;
        let base = parse_base(base).map_err(|e| ShareError::Malformed(e.to_string()))?;
        let y = decode_radix(value, base).map_err(ShareError::Decode)?;

        Ok(Point { x, y })
    }
}

// Fields that are present but not JSON strings are treated as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
