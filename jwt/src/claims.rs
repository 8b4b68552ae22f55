//! Decoded claim sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims decoded from a token payload.
///
/// The mapping is opaque: whatever the decoder produced is carried as-is.
/// Only the numeric `exp` member is ever interpreted by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Look up a claim by name.
    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }

    /// The `exp` claim in seconds since the Unix epoch, if present and
    /// numeric. A missing or non-numeric `exp` yields `None`.
    pub fn exp(&self) -> Option<f64> {
        self.0.get("exp").and_then(Value::as_f64)
    }

    /// The expiry instant derived from the `exp` claim, if one exists.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp()
            .and_then(|exp| DateTime::from_timestamp_millis((exp * 1000.0) as i64))
    }

    /// Consume the claim set, returning the raw mapping.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
