//! Access token expiry checks

use crate::decoder::UnverifiedDecoder;
use crate::error::JwtResult;
use crate::traits::{Clock, SystemClock, TokenDecoder};

/// Reports whether an access token's `exp` claim has passed.
///
/// The token is decoded without signature verification. A missing or
/// non-numeric `exp` claim is treated as "does not expire" and reported
/// as not expired.
///
/// # Errors
///
/// Propagates the decoder's error unchanged when the token cannot be
/// decoded.
pub fn is_access_token_expired(token: &str) -> JwtResult<bool> {
    is_access_token_expired_with(&UnverifiedDecoder, &SystemClock, token)
}

/// Expiry check through an explicit decoder and clock.
///
/// Pure function of the token and the clock's current time: the token is
/// expired iff `exp * 1000` milliseconds is strictly earlier than now.
///
/// # Errors
///
/// Returns the decoder's own error type, untranslated.
pub fn is_access_token_expired_with<D, C>(
    decoder: &D,
    clock: &C,
    token: &str,
) -> Result<bool, D::Error>
where
    D: TokenDecoder,
    C: Clock,
{
    let claims = decoder.decode(token)?;

    let Some(exp) = claims.exp() else {
        return Ok(false);
    };

    Ok(exp * 1000.0 < clock.now().timestamp_millis() as f64)
}
