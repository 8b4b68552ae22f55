//! Error handling for token decoding

use thiserror::Error;

/// JWT-specific errors
#[derive(Debug, Error)]
pub enum JwtError {
    /// The decoder could not parse the token; the underlying decoder
    /// error is surfaced unchanged
    #[error(transparent)]
    Decode(#[from] jsonwebtoken::errors::Error),
}

/// Result type for token operations
pub type JwtResult<T> = std::result::Result<T, JwtError>;
