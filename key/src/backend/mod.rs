//! Key generation backends
//!
//! The default backend delegates to the RustCrypto crates. Alternative
//! backends (hardware tokens, Web Crypto in WASM hosts) plug in through
//! the [`KeyPairBackend`](crate::traits::KeyPairBackend) and
//! [`SecretBackend`](crate::traits::SecretBackend) traits.

mod rustcrypto;

pub use rustcrypto::RustCryptoBackend;
