//! Error handling for key generation

use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Algorithm identifier not recognized by the backend
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Curve hint not applicable to the requested algorithm
    #[error("Unsupported curve for {alg}: {crv}")]
    UnsupportedCurve {
        /// Requested JWA algorithm identifier
        alg: String,
        /// Requested curve or key subtype
        crv: String,
    },

    /// RSA modulus length below the JOSE minimum of 2048 bits
    #[error("Modulus length must be at least 2048 bits, got {0}")]
    ModulusLength(u32),

    /// Key generation error occurred
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Generated key could not be encoded
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// Background generation task failed
    #[error("Background key generation task failed")]
    TaskFailed,
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
