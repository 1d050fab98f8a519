//! Cryptographic primitives for the signature engine
//!
//! This crate provides the building blocks the signer and verifier dispatch
//! to: a SHA-256 [`HashContext`](sigengine_api::HashContext), an
//! allocation-free HMAC over any hash context, and constant-time generic
//! elliptic curve arithmetic with a compile-time curve registry.
//!
//! Nothing here allocates; every buffer is fixed-size or caller-provided.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::Sha256;

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{AffinePoint, Curve, Modulus, ProjectivePoint, Uint};
