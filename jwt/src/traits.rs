//! Traits for the decoding and clock capabilities

use crate::claims::ClaimSet;
use chrono::{DateTime, Utc};

/// Capability that decodes a compact-serialized token into its claims.
///
/// The expiry check forwards the token unchanged and reads only the `exp`
/// member of the result; everything else about the token format is owned
/// by the decoder.
pub trait TokenDecoder {
    /// Error type surfaced unchanged to callers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode the claims of a compact-serialized token.
    fn decode(&self, token: &str) -> Result<ClaimSet, Self::Error>;
}

/// Capability that reads the current wall-clock time.
///
/// Injectable so tests can supply fixed timestamps deterministically.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock over the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
