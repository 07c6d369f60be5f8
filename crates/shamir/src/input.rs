//! JSON test cases.
//!
//! A test case is a JSON object holding a `keys` object with the number of
//! shares `n` and the threshold `k`, and the shares themselves under the keys
//! `"1"` to `"n"`:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```

use crate::config::{threshold_from_i64, validate_share_total};
use crate::{Decoded, Diagnostic, Error, RawShare, ReconstructionRequest, Result, ShareDecoder};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};
use shamir_traits::Reconstruct;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A parsed test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Number of shares declared.
    pub n: u64,
    /// Threshold for reconstruction.
    pub k: usize,
    /// The shares found under the keys `"1"` to `"n"`.
    pub records: BTreeMap<u64, RawShare>,
}

impl TestCase {
    /// Parses a test case from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }

    /// Reads and parses a test case from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading test case");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds a test case from a parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let document = value.as_object().ok_or(Error::MissingKeys)?;
        let keys = document
            .get("keys")
            .and_then(Value::as_object)
            .ok_or(Error::MissingKeys)?;

        let n = keys
            .get("n")
            .ok_or(Error::MissingField("n"))?
            .as_u64()
            .ok_or_else(|| Error::InvalidField {
                field: "n",
                reason: "must be a non-negative integer".to_string(),
            })?;
        validate_share_total(n)?;

        let k = keys
            .get("k")
            .ok_or(Error::MissingField("k"))?
            .as_i64()
            .ok_or_else(|| Error::InvalidField {
                field: "k",
                reason: "must be an integer".to_string(),
            })?;
        let k = threshold_from_i64(k)?;

        Ok(Self {
            n,
            k,
            records: records(document, n),
        })
    }

    /// Decodes the shares of the test case.
    pub fn decode(&self) -> Result<Decoded> {
        Ok(ShareDecoder::new(self.n)?.decode(&self.records))
    }

    /// Decodes the shares and builds the reconstruction request, returning
    /// the diagnostics of the skipped shares alongside.
    pub fn request(&self) -> Result<(ReconstructionRequest, Vec<Diagnostic>)> {
        let Decoded {
            points,
            diagnostics,
        } = self.decode()?;
        Ok((ReconstructionRequest::new(self.k, points), diagnostics))
    }
}

impl Reconstruct for TestCase {
    type Secret = BigInt;
    type Error = Error;

    fn reconstruct(&self) -> Result<BigInt> {
        let (request, _) = self.request()?;
        request.reconstruct()
    }
}

// Records that are not JSON objects are kept as shares with neither field.
fn records(document: &Map<String, Value>, n: u64) -> BTreeMap<u64, RawShare> {
    (1..=n)
        .filter_map(|i| {
            document.get(&i.to_string()).map(|record| {
                let share = RawShare::deserialize(record).unwrap_or_default();
                (i, share)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShareError;
    use shamir_math::Point;

    const TESTCASE1: &str = include_str!("../data/testcase1.json");
    const TESTCASE2: &str = include_str!("../data/testcase2.json");

    #[test]
    fn parse_testcase1() -> Result<()> {
        let case = TestCase::from_json_str(TESTCASE1)?;
        assert_eq!(case.n, 4);
        assert_eq!(case.k, 3);
        // Record "6" lies outside of 1..=n.
        assert_eq!(case.records.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let (request, diagnostics) = case.request()?;
        assert_eq!(
            request.points,
            vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
        );
        assert_eq!(
            diagnostics,
            vec![Diagnostic {
                index: 4,
                error: ShareError::Missing
            }]
        );
        Ok(())
    }

    #[test]
    fn reconstruct_testcase1() -> Result<()> {
        let case = TestCase::from_json_str(TESTCASE1)?;
        assert_eq!(case.reconstruct()?, BigInt::from(3));
        Ok(())
    }

    #[test]
    fn reconstruct_testcase2() -> Result<()> {
        let case = TestCase::from_json_str(TESTCASE2)?;
        assert_eq!(case.n, 10);
        assert_eq!(case.k, 7);
        let (request, diagnostics) = case.request()?;
        assert_eq!(request.points.len(), 10);
        assert!(diagnostics.is_empty());
        assert_eq!(
            case.reconstruct()?,
            BigInt::parse_bytes(b"79836264049851", 10).unwrap()
        );
        Ok(())
    }

    #[test]
    fn malformed_records_are_skipped() -> Result<()> {
        let case = TestCase::from_json_str(
            r#"{
                "keys": { "n": 5, "k": 2 },
                "1": { "base": "10", "value": "7" },
                "2": { "base": "10" },
                "3": { "base": 10, "value": "13" },
                "4": "not a share",
                "5": { "base": "16", "value": "13" }
            }"#,
        )?;
        let (request, diagnostics) = case.request()?;
        // 3x + 4
        assert_eq!(request.points, vec![Point::new(1, 7), Point::new(5, 19)]);
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.error.is_malformed()));
        assert_eq!(case.reconstruct()?, BigInt::from(4));
        Ok(())
    }

    #[test]
    fn too_few_valid_records() {
        let case = TestCase::from_json_str(
            r#"{
                "keys": { "n": 3, "k": 3 },
                "1": { "base": "10", "value": "1" },
                "2": { "base": "10", "value": "4" },
                "3": { "base": "10" }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            case.reconstruct(),
            Err(Error::InsufficientPoints {
                provided: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn missing_keys() {
        assert!(matches!(
            TestCase::from_json_str(r#"{ "1": { "base": "10", "value": "1" } }"#),
            Err(Error::MissingKeys)
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"[1, 2, 3]"#),
            Err(Error::MissingKeys)
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": 3 }"#),
            Err(Error::MissingKeys)
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "k": 3 } }"#),
            Err(Error::MissingField("n"))
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": 3 } }"#),
            Err(Error::MissingField("k"))
        ));
    }

    #[test]
    fn invalid_keys() {
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": -1, "k": 3 } }"#),
            Err(Error::InvalidField { field: "n", .. })
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": "4", "k": 3 } }"#),
            Err(Error::InvalidField { field: "n", .. })
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": 4, "k": 2.5 } }"#),
            Err(Error::InvalidField { field: "k", .. })
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": 4, "k": 0 } }"#),
            Err(Error::InvalidThreshold(0))
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": 4, "k": -2 } }"#),
            Err(Error::InvalidThreshold(-2))
        ));
    }

    #[test]
    fn oversized_share_total() {
        let case = TestCase {
            n: u64::MAX,
            k: 1,
            records: BTreeMap::new(),
        };
        assert!(matches!(
            case.reconstruct(),
            Err(Error::InvalidField { field: "n", .. })
        ));
        assert!(matches!(
            TestCase::from_json_str(r#"{ "keys": { "n": 65537, "k": 3 } }"#),
            Err(Error::InvalidField { field: "n", .. })
        ));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            TestCase::from_json_str("{ keys: "),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn unreadable_file() {
        assert!(matches!(
            TestCase::from_path("this/file/does/not/exist.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn read_from_path() -> Result<()> {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/testcase1.json");
        assert_eq!(TestCase::from_path(path)?, TestCase::from_json_str(TESTCASE1)?);
        Ok(())
    }
}
