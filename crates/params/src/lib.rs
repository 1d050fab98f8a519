//! Constant values for the sigengine workspace
//!
//! Domain parameters for the supported short Weierstrass curves and the
//! size constants of the digest and MAC constructions built on SHA-256.

#![no_std]

pub mod traditional;
pub mod utils;
