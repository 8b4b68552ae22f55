//! Call-through operations over a key generation backend

use crate::backend::RustCryptoBackend;
use crate::options::GenerateKeyPairOptions;
use crate::traits::{KeyPairBackend, SecretBackend};
use crate::types::{KeyPair, Secret};
use crate::Result;

/// Generates a private and a public key for a given JWA algorithm
/// identifier, using the default backend and default options.
///
/// This can only generate asymmetric key pairs. For symmetric secrets use
/// [`generate_secret`].
///
/// # Errors
///
/// Returns whatever error the backend raises, unchanged: an unsupported
/// algorithm, an inapplicable curve, or a generation failure inside the
/// backing cryptography crates.
pub async fn generate_key_pair(alg: &str) -> Result<KeyPair> {
    generate_key_pair_with(&RustCryptoBackend, alg, GenerateKeyPairOptions::default()).await
}

/// Generates a key pair for a given JWA algorithm identifier with
/// explicit generation options.
///
/// # Errors
///
/// Returns whatever error the backend raises, unchanged.
pub async fn generate_key_pair_with_options(
    alg: &str,
    options: GenerateKeyPairOptions,
) -> Result<KeyPair> {
    generate_key_pair_with(&RustCryptoBackend, alg, options).await
}

/// Generates a key pair through an explicit backend.
///
/// The algorithm identifier and options are forwarded unchanged and the
/// backend result is returned unmodified; no validation, defaulting, or
/// transformation happens here.
///
/// # Errors
///
/// Returns the backend's own error type, untranslated.
pub async fn generate_key_pair_with<B: KeyPairBackend>(
    backend: &B,
    alg: &str,
    options: GenerateKeyPairOptions,
) -> std::result::Result<KeyPair, B::Error> {
    tracing::debug!(alg, "generating key pair");
    backend.generate_key_pair(alg, &options).await
}

/// Generates a symmetric secret for a given JWA algorithm identifier,
/// using the default backend.
///
/// # Errors
///
/// Returns whatever error the backend raises, unchanged.
pub fn generate_secret(alg: &str) -> Result<Secret> {
    generate_secret_with(&RustCryptoBackend, alg)
}

/// Generates a symmetric secret through an explicit backend.
///
/// # Errors
///
/// Returns the backend's own error type, untranslated.
pub fn generate_secret_with<B: SecretBackend>(
    backend: &B,
    alg: &str,
) -> std::result::Result<Secret, B::Error> {
    tracing::debug!(alg, "generating secret");
    backend.generate_secret(alg)
}
