//! Entropy source adapters
//!
//! Any `FnMut(&mut [u8]) -> bool` already works as an [`EntropySource`]; the
//! types here bridge `rand` generators to the same interface.

use rand::{CryptoRng, RngCore};
use sigengine_api::EntropySource;

/// Wraps a cryptographic RNG as an [`EntropySource`]
///
/// A generator error is reported as a failed fill.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngEntropy<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, dest: &mut [u8]) -> bool {
        self.rng.try_fill_bytes(dest).is_ok()
    }
}

/// The operating system's random number generator
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "std")]
impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> bool {
        rand::rngs::OsRng.try_fill_bytes(dest).is_ok()
    }
}
