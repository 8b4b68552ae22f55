//! Default token decoder over `jsonwebtoken`

use crate::claims::ClaimSet;
use crate::error::{JwtError, JwtResult};
use crate::traits::TokenDecoder;
use jsonwebtoken::{DecodingKey, Validation};

/// Claim decoder that performs no signature verification.
///
/// Decoding checks the compact serialization shape and parses the payload,
/// nothing more: the signature is ignored and no claims are validated.
/// Never use the output to make trust decisions; it only answers questions
/// about what a token *says*, such as when it expires.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnverifiedDecoder;

impl TokenDecoder for UnverifiedDecoder {
    type Error = JwtError;

    fn decode(&self, token: &str) -> JwtResult<ClaimSet> {
        tracing::trace!("decoding token claims without signature verification");

        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = Default::default();

        // Dummy key; it is never consulted with signature validation off
        let data =
            jsonwebtoken::decode::<ClaimSet>(token, &DecodingKey::from_secret(&[]), &validation)?;

        Ok(data.claims)
    }
}

/// Decode the claims of a compact-serialized token without verifying it.
///
/// # Errors
///
/// Propagates the decoder's error unchanged when the token is malformed.
pub fn decode_claims(token: &str) -> JwtResult<ClaimSet> {
    UnverifiedDecoder.decode(token)
}
