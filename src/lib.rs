//! # sigengine
//!
//! An allocation-free signature engine for constrained devices: SHA-256
//! digests, HMAC-SHA256 tags and ECDSA over secp160r1, secp192r1, secp224r1,
//! secp256r1 and secp256k1, written into caller-owned buffers.
//!
//! ## Usage
//!
//! ```
//! use sigengine::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let mut out = [0u8; 64];
//! let mut signer = Signer::new(b"reading=21.4", &mut out);
//! let tag = signer.sign(AlgorithmId::HmacSha256, &key)?.to_vec();
//!
//! let verifier = Verifier::new(b"reading=21.4", &tag);
//! assert_eq!(verifier.verify(AlgorithmId::HmacSha256, &key)?, Verification::Valid);
//! # Ok::<(), sigengine::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` support and `OsEntropy`
//! - `serde`: serialization of identifiers and verification outcomes
//! - `trace`: structured `tracing` events at sign and verify boundaries
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sigengine-api`]: error type, identifiers and caller capabilities
//! - [`sigengine-params`]: curve and hash constants
//! - [`sigengine-algorithms`]: SHA-256, HMAC and curve arithmetic
//! - [`sigengine-sign`]: the signer, verifier and ECDSA

#![cfg_attr(not(feature = "std"), no_std)]

pub use sigengine_algorithms as algorithms;
pub use sigengine_api as api;
pub use sigengine_internal as internal;
pub use sigengine_params as params;
pub use sigengine_sign as sign;

/// Common imports for sigengine users
pub mod prelude {
    pub use crate::api::{
        AlgorithmId, CurveId, EntropySource, Error, HashContext, Result, Verification,
    };
    pub use crate::sign::{tag_len, NonceMode, RngEntropy, Signer, Verifier};

    #[cfg(feature = "std")]
    pub use crate::sign::OsEntropy;
}
