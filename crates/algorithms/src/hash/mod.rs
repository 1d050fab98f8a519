//! Hash functions
//!
//! The engine needs exactly one digest, SHA-256, exposed both as a one-shot
//! function and as a reusable [`HashContext`](sigengine_api::HashContext).

pub mod sha2;

pub use self::sha2::Sha256;
