//! Default backend over the RustCrypto crates
//!
//! This module owns the JWA registry for generation: which algorithm
//! identifiers map to which key types, which curves apply, and how the
//! material is encoded (PKCS#8 for private keys, SPKI for public keys,
//! both PEM armored).

use crate::error::{KeyError, Result};
use crate::options::{GenerateKeyPairOptions, MIN_MODULUS_LENGTH};
use crate::traits::{KeyPairBackend, SecretBackend};
use crate::types::{KeyPair, Secret};
use rand::{Rng, RngCore};
use zeroize::Zeroizing;

/// Key generation backend backed by `rsa`, `p256`, `p384` and
/// `ed25519-dalek`.
///
/// RSA generation is dispatched to a blocking worker thread; EC and OKP
/// generation completes inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

impl KeyPairBackend for RustCryptoBackend {
    type Error = KeyError;

    async fn generate_key_pair(
        &self,
        alg: &str,
        options: &GenerateKeyPairOptions,
    ) -> Result<KeyPair> {
        let crv = options.crv.as_deref();

        match alg {
            "RS256" | "RS384" | "RS512" | "PS256" | "PS384" | "PS512" | "RSA-OAEP"
            | "RSA-OAEP-256" | "RSA-OAEP-384" | "RSA-OAEP-512" => {
                let bits = options.modulus_length;
                if bits < MIN_MODULUS_LENGTH {
                    return Err(KeyError::ModulusLength(bits));
                }

                // RSA generation takes whole seconds; keep it off the executor
                tokio::task::spawn_blocking(move || rsa_key_pair(bits as usize))
                    .await
                    .map_err(|_| KeyError::TaskFailed)?
            }
            "ES256" => {
                check_curve(alg, crv, &["P-256"])?;
                p256_key_pair()
            }
            "ES384" => {
                check_curve(alg, crv, &["P-384"])?;
                p384_key_pair()
            }
            "EdDSA" | "Ed25519" => {
                check_curve(alg, crv, &["Ed25519"])?;
                ed25519_key_pair()
            }
            "ECDH-ES" | "ECDH-ES+A128KW" | "ECDH-ES+A192KW" | "ECDH-ES+A256KW" => {
                match crv.unwrap_or("P-256") {
                    "P-256" => p256_key_pair(),
                    "P-384" => p384_key_pair(),
                    other => Err(KeyError::UnsupportedCurve {
                        alg: alg.to_string(),
                        crv: other.to_string(),
                    }),
                }
            }
            _ => Err(KeyError::UnsupportedAlgorithm(alg.to_string())),
        }
    }
}

impl SecretBackend for RustCryptoBackend {
    type Error = KeyError;

    fn generate_secret(&self, alg: &str) -> Result<Secret> {
        let len = secret_length(alg)?;

        let mut bytes = Zeroizing::new(vec![0u8; len]);
        rand::rng().fill_bytes(&mut bytes);

        Ok(bytes)
    }
}

/// Reject curve hints that do not apply to the algorithm's fixed curve.
fn check_curve(alg: &str, crv: Option<&str>, applicable: &[&str]) -> Result<()> {
    match crv {
        None => Ok(()),
        Some(crv) if applicable.contains(&crv) => Ok(()),
        Some(crv) => Err(KeyError::UnsupportedCurve {
            alg: alg.to_string(),
            crv: crv.to_string(),
        }),
    }
}

/// Secret sizes in bytes for the symmetric JWA algorithms.
fn secret_length(alg: &str) -> Result<usize> {
    match alg {
        "HS256" | "A256KW" | "A256GCM" | "A256GCMKW" | "A128CBC-HS256" => Ok(32),
        "HS384" | "A192CBC-HS384" => Ok(48),
        "HS512" | "A256CBC-HS512" => Ok(64),
        "A128KW" | "A128GCM" | "A128GCMKW" => Ok(16),
        "A192KW" | "A192GCM" | "A192GCMKW" => Ok(24),
        _ => Err(KeyError::UnsupportedAlgorithm(alg.to_string())),
    }
}

fn rsa_key_pair(bits: usize) -> Result<KeyPair> {
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
    use rsa::{RsaPrivateKey, RsaPublicKey};

    let mut rng = rand::rng();
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| KeyError::KeyGeneration(format!("RSA key generation failed: {e}")))?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = private_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Private key encoding failed: {e}")))?;
    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Public key encoding failed: {e}")))?;

    Ok(KeyPair {
        private_key: private_pem,
        public_key: public_pem,
    })
}

fn p256_key_pair() -> Result<KeyPair> {
    use p256::ecdsa::SigningKey;
    use p256::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

    // Random scalar bytes from system entropy; the curve crate owns the
    // range check
    let mut scalar = Zeroizing::new([0u8; 32]);
    rand::rng().fill(&mut *scalar);

    let signing_key = SigningKey::from_slice(scalar.as_slice())
        .map_err(|e| KeyError::KeyGeneration(format!("P-256 key generation failed: {e}")))?;
    let verifying_key = signing_key.verifying_key();

    let private_pem = signing_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Private key encoding failed: {e}")))?;
    let public_pem = verifying_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Public key encoding failed: {e}")))?;

    Ok(KeyPair {
        private_key: private_pem,
        public_key: public_pem,
    })
}

fn p384_key_pair() -> Result<KeyPair> {
    use p384::ecdsa::SigningKey;
    use p384::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

    let mut scalar = Zeroizing::new([0u8; 48]);
    rand::rng().fill(&mut *scalar);

    let signing_key = SigningKey::from_slice(scalar.as_slice())
        .map_err(|e| KeyError::KeyGeneration(format!("P-384 key generation failed: {e}")))?;
    let verifying_key = signing_key.verifying_key();

    let private_pem = signing_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Private key encoding failed: {e}")))?;
    let public_pem = verifying_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Public key encoding failed: {e}")))?;

    Ok(KeyPair {
        private_key: private_pem,
        public_key: public_pem,
    })
}

fn ed25519_key_pair() -> Result<KeyPair> {
    use ed25519_dalek::SigningKey;
    use pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

    let mut seed = Zeroizing::new([0u8; 32]);
    rand::rng().fill(&mut *seed);

    let signing_key = SigningKey::from_bytes(&seed);
    let verifying_key = signing_key.verifying_key();

    let private_pem = signing_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Private key encoding failed: {e}")))?;
    let public_pem = verifying_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("Public key encoding failed: {e}")))?;

    Ok(KeyPair {
        private_key: private_pem,
        public_key: public_pem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_lengths_match_jwa_sizes() {
        assert_eq!(secret_length("HS256").ok(), Some(32));
        assert_eq!(secret_length("HS384").ok(), Some(48));
        assert_eq!(secret_length("HS512").ok(), Some(64));
        assert_eq!(secret_length("A128KW").ok(), Some(16));
        assert_eq!(secret_length("A192GCM").ok(), Some(24));
        assert_eq!(secret_length("A256GCMKW").ok(), Some(32));
    }

    #[test]
    fn asymmetric_identifier_is_not_a_secret_algorithm() {
        assert!(matches!(
            secret_length("RS256"),
            Err(KeyError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn curve_hint_must_be_applicable() {
        assert!(check_curve("ES256", None, &["P-256"]).is_ok());
        assert!(check_curve("ES256", Some("P-256"), &["P-256"]).is_ok());
        assert!(matches!(
            check_curve("ES256", Some("P-384"), &["P-256"]),
            Err(KeyError::UnsupportedCurve { .. })
        ));
    }
}
