//! Traits for key generation backends

use crate::options::GenerateKeyPairOptions;
use crate::types::{KeyPair, Secret};
use std::future::Future;

/// Capability that generates asymmetric key pairs for JWA algorithms.
///
/// The call-through functions in this crate forward the algorithm
/// identifier and options unchanged and return the backend result
/// unmodified. Which algorithms and curves are valid, what the defaults
/// mean, and how keys are encoded is owned entirely by the backend.
pub trait KeyPairBackend: Send + Sync {
    /// Error type surfaced unchanged to callers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a key pair for the given JWA algorithm identifier.
    fn generate_key_pair(
        &self,
        alg: &str,
        options: &GenerateKeyPairOptions,
    ) -> impl Future<Output = Result<KeyPair, Self::Error>> + Send;
}

/// Capability that generates symmetric secrets for JWA algorithms.
pub trait SecretBackend: Send + Sync {
    /// Error type surfaced unchanged to callers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a secret of the length the given algorithm calls for.
    fn generate_secret(&self, alg: &str) -> Result<Secret, Self::Error>;
}
