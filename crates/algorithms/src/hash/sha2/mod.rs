//! SHA-256 streaming context
//!
//! The compression function comes from the RustCrypto `sha2` crate; this
//! module adapts it to the engine's [`HashContext`] capability so that HMAC
//! and the deterministic nonce derivation can run over any digest engine.

use ::sha2::Digest;
use sigengine_api::HashContext;
use sigengine_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};

/// SHA-256 hash context (block size 64, output size 32)
#[derive(Clone, Default)]
pub struct Sha256 {
    inner: ::sha2::Sha256,
}

impl Sha256 {
    /// Create a freshly initialised context
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot digest of `data`
    pub fn digest(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        out.copy_from_slice(&::sha2::Sha256::digest(data));
        out
    }
}

impl HashContext for Sha256 {
    fn block_size(&self) -> usize {
        SHA256_BLOCK_SIZE
    }

    fn output_size(&self) -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn init(&mut self) {
        Digest::reset(&mut self.inner);
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize(&mut self, out: &mut [u8]) {
        let digest = self.inner.finalize_reset();
        let n = out.len().min(SHA256_OUTPUT_SIZE);
        out[..n].copy_from_slice(&digest[..n]);
    }
}
