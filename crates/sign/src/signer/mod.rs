//! Signing into a caller-owned output buffer
//!
//! A [`Signer`] borrows the message and an output region, and appends each
//! tag at its cursor. The cursor only moves on success: any failed call
//! leaves both the cursor and the output bytes exactly as they were.

use core::fmt;

use crate::ecdsa::{self, NonceScratch};
use sigengine_algorithms::ec;
use sigengine_algorithms::error::to_core_result;
use sigengine_algorithms::{Hmac, Sha256};
use sigengine_api::error::validate;
use sigengine_api::{AlgorithmId, CurveId, EntropySource, Result};
use sigengine_params::traditional::hmac::{HMAC_SHA256_KEY_SIZE, HMAC_SHA256_TAG_SIZE};
use sigengine_params::utils::hash::SHA256_OUTPUT_SIZE;

/// Byte length of the tag `algorithm` produces
///
/// Fails with `UnsupportedAlgorithm` for unknown curve codes.
pub fn tag_len(algorithm: AlgorithmId) -> Result<usize> {
    match algorithm {
        AlgorithmId::DigestSha256 => Ok(SHA256_OUTPUT_SIZE),
        AlgorithmId::HmacSha256 => Ok(HMAC_SHA256_TAG_SIZE),
        AlgorithmId::Ecdsa(curve) => Ok(ec::lookup(curve)?.signature_size()),
    }
}

/// How ECDSA nonces are produced
#[derive(Default)]
pub enum NonceMode<'a> {
    /// RFC 6979 over SHA-256, with scratch on the stack
    #[default]
    Deterministic,
    /// Fresh nonces from a caller entropy source
    Entropy(&'a mut dyn EntropySource),
}

impl fmt::Debug for NonceMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonceMode::Deterministic => f.write_str("Deterministic"),
            NonceMode::Entropy(_) => f.write_str("Entropy(..)"),
        }
    }
}

/// Appends tags over one message to a bounded output buffer
#[derive(Debug)]
pub struct Signer<'a> {
    input: &'a [u8],
    output: &'a mut [u8],
    output_used: usize,
    nonce: NonceMode<'a>,
}

#[cfg_attr(not(feature = "trace"), allow(unused_variables))]
fn traced<T>(algorithm: AlgorithmId, used: usize, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => trace_event!(algorithm = %algorithm, output_used = used, "tag written"),
        Err(err) => trace_event!(algorithm = %algorithm, error = %err, "sign rejected"),
    }
    result
}

impl<'a> Signer<'a> {
    /// Sign `input` into `output` starting at offset 0, with deterministic nonces
    pub fn new(input: &'a [u8], output: &'a mut [u8]) -> Self {
        Self {
            input,
            output,
            output_used: 0,
            nonce: NonceMode::Deterministic,
        }
    }

    /// As [`Signer::new`], drawing ECDSA nonces from `source`
    pub fn with_entropy(
        input: &'a [u8],
        output: &'a mut [u8],
        source: &'a mut dyn EntropySource,
    ) -> Self {
        Self {
            nonce: NonceMode::Entropy(source),
            ..Self::new(input, output)
        }
    }

    /// Continue appending after `output_used` bytes already present in `output`
    ///
    /// Fails with `Oversize` if `output_used` exceeds the buffer.
    pub fn resume(input: &'a [u8], output: &'a mut [u8], output_used: usize) -> Result<Self> {
        validate::capacity(output_used, output.len(), 0)?;
        Ok(Self {
            output_used,
            ..Self::new(input, output)
        })
    }

    /// Replace the nonce mode for subsequent ECDSA signatures
    pub fn set_nonce_mode(&mut self, mode: NonceMode<'a>) {
        self.nonce = mode;
    }

    /// The message being signed
    pub fn input(&self) -> &[u8] {
        self.input
    }

    /// Total length of the output buffer
    pub fn capacity(&self) -> usize {
        self.output.len()
    }

    /// Bytes written so far
    pub fn output_used(&self) -> usize {
        self.output_used
    }

    /// Bytes still free after the cursor
    pub fn remaining(&self) -> usize {
        self.output.len() - self.output_used
    }

    /// Everything written so far
    pub fn written(&self) -> &[u8] {
        &self.output[..self.output_used]
    }

    // Advance the cursor over a tag already placed after it
    fn commit(&mut self, len: usize) -> &[u8] {
        let start = self.output_used;
        self.output_used += len;
        &self.output[start..self.output_used]
    }

    /// Append `SHA-256(input)`
    pub fn sign_sha256(&mut self) -> Result<&[u8]> {
        let result = self.write_sha256();
        traced(AlgorithmId::DigestSha256, self.output_used, result)?;
        Ok(self.commit(SHA256_OUTPUT_SIZE))
    }

    fn write_sha256(&mut self) -> Result<()> {
        validate::capacity(SHA256_OUTPUT_SIZE, self.output.len(), self.output_used)?;
        let digest = Sha256::digest(self.input);
        let start = self.output_used;
        self.output[start..start + SHA256_OUTPUT_SIZE].copy_from_slice(&digest);
        Ok(())
    }

    /// Append `HMAC-SHA256(key, input)`; `key` must be 32 bytes
    pub fn sign_hmac(&mut self, key: &[u8]) -> Result<&[u8]> {
        let result = self.write_hmac(key);
        traced(AlgorithmId::HmacSha256, self.output_used, result)?;
        Ok(self.commit(HMAC_SHA256_TAG_SIZE))
    }

    fn write_hmac(&mut self, key: &[u8]) -> Result<()> {
        validate::capacity(HMAC_SHA256_TAG_SIZE, self.output.len(), self.output_used)?;
        validate::key_size("HMAC-SHA256 sign", key.len(), HMAC_SHA256_KEY_SIZE)?;

        let mut ctx = Sha256::new();
        let mut tag = [0u8; HMAC_SHA256_TAG_SIZE];
        to_core_result(
            Hmac::mac(&mut ctx, key, self.input, &mut tag),
            "HMAC-SHA256 sign",
        )?;
        let start = self.output_used;
        self.output[start..start + HMAC_SHA256_TAG_SIZE].copy_from_slice(&tag);
        Ok(())
    }

    /// Append a 64-byte ECDSA signature `r || s` over `SHA-256(input)`
    ///
    /// `key` is the 32-byte big-endian private scalar on every curve. Checks
    /// run in order: curve code, output capacity, key length, key range.
    pub fn sign_ecdsa(&mut self, key: &[u8], curve: CurveId) -> Result<&[u8]> {
        let result = self.write_ecdsa(key, curve);
        let len = traced(AlgorithmId::Ecdsa(curve), self.output_used, result)?;
        Ok(self.commit(len))
    }

    fn write_ecdsa(&mut self, key: &[u8], curve: CurveId) -> Result<usize> {
        let curve = ec::lookup(curve)?;
        let len = curve.signature_size();
        validate::capacity(len, self.output.len(), self.output_used)?;
        validate::key_size("ECDSA sign", key.len(), curve.private_key_size())?;

        let digest = Sha256::digest(self.input);
        let start = self.output_used;
        let out = &mut self.output[start..start + len];
        match &mut self.nonce {
            NonceMode::Deterministic => {
                let mut ctx = Sha256::new();
                let mut scratch = NonceScratch::new();
                ecdsa::sign_deterministic(curve, key, &digest, &mut ctx, &mut scratch, out)?;
            }
            NonceMode::Entropy(source) => {
                ecdsa::sign_with_entropy(curve, key, &digest, &mut **source, out)?;
            }
        }
        Ok(len)
    }

    /// Append the tag for `algorithm`
    ///
    /// `key` is ignored for [`AlgorithmId::DigestSha256`].
    pub fn sign(&mut self, algorithm: AlgorithmId, key: &[u8]) -> Result<&[u8]> {
        match algorithm {
            AlgorithmId::DigestSha256 => self.sign_sha256(),
            AlgorithmId::HmacSha256 => self.sign_hmac(key),
            AlgorithmId::Ecdsa(curve) => self.sign_ecdsa(key, curve),
        }
    }
}
