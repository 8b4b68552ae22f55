//! # Tokenkit Key Generation
//!
//! Key pair and secret generation for JOSE (JWA) algorithm identifiers.
//!
//! ## Features
//!
//! - **Key Pair Generation**: asymmetric pairs for the RSA, EC and OKP
//!   signing and key-management algorithms
//! - **Secret Generation**: symmetric secrets for the HS* and A*KW/GCM
//!   families
//! - **Pluggable Backends**: generation is a capability behind a trait;
//!   the default backend delegates to the RustCrypto crates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tokenkit_key::{generate_key_pair, generate_key_pair_with_options, GenerateKeyPairOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pair = generate_key_pair("PS256").await?;
//! println!("{}", pair.public_key);
//!
//! let pair = generate_key_pair_with_options(
//!     "ECDH-ES",
//!     GenerateKeyPairOptions::new().with_curve("P-384"),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod options;
pub mod traits;
pub mod types;

mod generate;

// Re-export core types
pub use error::{KeyError, Result};
pub use options::{GenerateKeyPairOptions, MIN_MODULUS_LENGTH};
pub use types::{KeyPair, Secret};

// Re-export the main API
pub use backend::RustCryptoBackend;
pub use generate::{
    generate_key_pair, generate_key_pair_with, generate_key_pair_with_options, generate_secret,
    generate_secret_with,
};
pub use traits::{KeyPairBackend, SecretBackend};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generate_key_pair, generate_key_pair_with_options, generate_secret,
        GenerateKeyPairOptions, KeyError, KeyPair, Result, RustCryptoBackend, Secret,
    };
}
