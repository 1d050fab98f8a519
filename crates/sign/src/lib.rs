//! Signing and verification over caller-owned buffers
//!
//! This crate exposes the engine's two entry points. A [`Signer`] appends a
//! SHA-256 digest, an HMAC-SHA256 tag or an ECDSA signature over one message
//! to a bounded output buffer; a [`Verifier`] checks one detached tag. No
//! operation allocates, and a failed call changes neither the output bytes
//! nor the signer's cursor.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod trace;

pub mod ecdsa;
pub mod entropy;
pub mod signer;
pub mod verifier;

pub use ecdsa::{NonceScratch, MAX_NONCE_ATTEMPTS};
#[cfg(feature = "std")]
pub use entropy::OsEntropy;
pub use entropy::RngEntropy;
pub use signer::{tag_len, NonceMode, Signer};
pub use verifier::Verifier;
