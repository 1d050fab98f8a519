//! HMAC (Hash-based Message Authentication Code), allocation-free
//!
//! RFC 2104 over any [`HashContext`]. The padded key block lives in a
//! caller-provided region so the deterministic nonce derivation can keep all
//! of its state in one scratch buffer; the region is wiped when the MAC is
//! dropped.

use crate::error::{validate, Result};
use sigengine_api::HashContext;
use sigengine_internal::constant_time::ct_eq;
use sigengine_params::traditional::hmac::{HMAC_IPAD, HMAC_OPAD};
use sigengine_params::utils::hash::{MAX_HASH_BLOCK_SIZE, MAX_HASH_OUTPUT_SIZE};
use zeroize::Zeroize;

/// Streaming HMAC borrowing its hash context and pad block
pub struct Hmac<'a, H: HashContext + ?Sized> {
    hash: &'a mut H,
    // K' xor opad once construction has absorbed the inner pad
    pad: &'a mut [u8],
}

impl<'a, H: HashContext + ?Sized> Hmac<'a, H> {
    /// Start a MAC keyed with `key`, using `pad` (at least one hash block) as key storage
    pub fn new_in(hash: &'a mut H, key: &[u8], pad: &'a mut [u8]) -> Result<Self> {
        let bs = hash.block_size();
        let out = hash.output_size();
        validate::max_length("HMAC block size", bs, MAX_HASH_BLOCK_SIZE)?;
        validate::max_length("HMAC output size", out, MAX_HASH_OUTPUT_SIZE.min(bs))?;
        validate::parameter(pad.len() >= bs, "HMAC pad", "shorter than hash block")?;

        let pad = &mut pad[..bs];
        pad.fill(0);
        if key.len() > bs {
            hash.init();
            hash.update(key);
            hash.finalize(&mut pad[..out]);
        } else {
            pad[..key.len()].copy_from_slice(key);
        }

        for b in pad.iter_mut() {
            *b ^= HMAC_IPAD;
        }
        hash.init();
        hash.update(pad);
        for b in pad.iter_mut() {
            *b ^= HMAC_IPAD ^ HMAC_OPAD;
        }

        Ok(Self { hash, pad })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        self.hash.update(data);
    }

    /// Finish the MAC, writing `output_size()` bytes into `out`
    pub fn finalize(mut self, out: &mut [u8]) -> Result<()> {
        let n = self.hash.output_size();
        validate::parameter(out.len() >= n, "HMAC output", "buffer shorter than digest")?;

        let mut inner = [0u8; MAX_HASH_OUTPUT_SIZE];
        self.hash.finalize(&mut inner[..n]);

        self.hash.init();
        self.hash.update(&self.pad[..]);
        self.hash.update(&inner[..n]);
        self.hash.finalize(&mut out[..n]);

        inner.zeroize();
        Ok(())
    }

    /// One-shot MAC of `data` into `out`, with the pad block on the stack
    pub fn mac(hash: &mut H, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<()> {
        let mut pad = [0u8; MAX_HASH_BLOCK_SIZE];
        let mut mac = Hmac::new_in(hash, key, &mut pad)?;
        mac.update(data);
        mac.finalize(out)
    }

    /// Constant-time verification of `tag` against `key` / `data`
    pub fn verify(hash: &mut H, key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let n = hash.output_size();
        let mut expected = [0u8; MAX_HASH_OUTPUT_SIZE];
        Self::mac(hash, key, data, &mut expected)?;
        let ok = ct_eq(&expected[..n], tag);
        expected.zeroize();
        Ok(ok)
    }
}

impl<H: HashContext + ?Sized> Drop for Hmac<'_, H> {
    fn drop(&mut self) {
        self.pad.zeroize();
    }
}
