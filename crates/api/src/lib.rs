//! Public API traits and types for sigengine
//!
//! This crate provides the public API surface shared by every sigengine crate:
//! the closed error type, the verification outcome, algorithm and curve
//! identifiers, and the two capabilities injected by callers (a streaming
//! hash context and an entropy source).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{EntropySource, HashContext};
pub use types::{AlgorithmId, CurveId, Verification};
