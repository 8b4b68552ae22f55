//! Key pair generation options

/// JOSE requires RSA moduli of 2048 bits or larger.
pub const MIN_MODULUS_LENGTH: u32 = 2048;

/// Additional options passed down to the key pair generation backend.
///
/// All fields default to the JOSE conventions: no curve hint, a 2048-bit
/// RSA modulus, and non-extractable keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateKeyPairOptions {
    /// The EC "crv" (Curve) or OKP "crv" (Subtype of Key Pair) value to
    /// generate. The curve must be both supported by the backend and
    /// applicable for the given JWA algorithm identifier.
    pub crv: Option<String>,

    /// A hint for RSA algorithms to generate a key of a given modulus
    /// length (key size in bits). JOSE requires 2048 bits or larger.
    pub modulus_length: u32,

    /// Only effective in Web Crypto backends, where it maps to the
    /// `SubtleCrypto.generateKey()` extractable argument. Native backends
    /// carry the flag through unchanged.
    pub extractable: bool,
}

impl GenerateKeyPairOptions {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            crv: None,
            modulus_length: MIN_MODULUS_LENGTH,
            extractable: false,
        }
    }

    /// Set the curve or key subtype hint.
    #[must_use]
    pub fn with_curve(mut self, crv: impl Into<String>) -> Self {
        self.crv = Some(crv.into());
        self
    }

    /// Set the RSA modulus length hint in bits.
    #[must_use]
    pub fn with_modulus_length(mut self, bits: u32) -> Self {
        self.modulus_length = bits;
        self
    }

    /// Set the extractability flag for Web Crypto backends.
    #[must_use]
    pub fn with_extractable(mut self, extractable: bool) -> Self {
        self.extractable = extractable;
        self
    }
}

impl Default for GenerateKeyPairOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_jose_conventions() {
        let options = GenerateKeyPairOptions::default();
        assert_eq!(options.crv, None);
        assert_eq!(options.modulus_length, 2048);
        assert!(!options.extractable);
    }

    #[test]
    fn builder_methods_override_defaults() {
        let options = GenerateKeyPairOptions::new()
            .with_curve("P-384")
            .with_modulus_length(3072)
            .with_extractable(true);
        assert_eq!(options.crv.as_deref(), Some("P-384"));
        assert_eq!(options.modulus_length, 3072);
        assert!(options.extractable);
    }
}
