//! Verification of detached tags
//!
//! A mismatch is reported as [`Verification::Invalid`], never as an error.
//! Errors are reserved for inputs that cannot be checked at all: a
//! signature or key of the wrong length, or an unknown algorithm.

use crate::ecdsa;
use sigengine_algorithms::ec;
use sigengine_algorithms::error::to_core_result;
use sigengine_algorithms::{Hmac, Sha256};
use sigengine_api::error::validate;
use sigengine_api::{AlgorithmId, CurveId, Result, Verification};
use sigengine_internal::constant_time::ct_eq;
use sigengine_params::traditional::hmac::{HMAC_SHA256_KEY_SIZE, HMAC_SHA256_TAG_SIZE};
use sigengine_params::utils::hash::SHA256_OUTPUT_SIZE;

/// Checks one detached tag against one message
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    input: &'a [u8],
    signature: &'a [u8],
}

#[cfg_attr(not(feature = "trace"), allow(unused_variables))]
fn traced(algorithm: AlgorithmId, result: Result<Verification>) -> Result<Verification> {
    match &result {
        Ok(outcome) => trace_event!(algorithm = %algorithm, valid = outcome.is_valid(), "verified"),
        Err(err) => trace_event!(algorithm = %algorithm, error = %err, "verify rejected"),
    }
    result
}

impl<'a> Verifier<'a> {
    /// Check `signature` over `input`
    pub fn new(input: &'a [u8], signature: &'a [u8]) -> Self {
        Self { input, signature }
    }

    /// The message being verified
    pub fn input(&self) -> &[u8] {
        self.input
    }

    /// The tag under test
    pub fn signature(&self) -> &[u8] {
        self.signature
    }

    /// Compare against `SHA-256(input)`
    pub fn verify_sha256(&self) -> Result<Verification> {
        traced(AlgorithmId::DigestSha256, self.check_sha256())
    }

    fn check_sha256(&self) -> Result<Verification> {
        validate::signature_size("SHA-256 verify", self.signature.len(), SHA256_OUTPUT_SIZE)?;
        let digest = Sha256::digest(self.input);
        Ok(Verification::from(ct_eq(&digest, self.signature)))
    }

    /// Compare against `HMAC-SHA256(key, input)`; `key` must be 32 bytes
    ///
    /// The tag length is checked before the key length.
    pub fn verify_hmac(&self, key: &[u8]) -> Result<Verification> {
        traced(AlgorithmId::HmacSha256, self.check_hmac(key))
    }

    fn check_hmac(&self, key: &[u8]) -> Result<Verification> {
        validate::signature_size(
            "HMAC-SHA256 verify",
            self.signature.len(),
            HMAC_SHA256_TAG_SIZE,
        )?;
        validate::key_size("HMAC-SHA256 verify", key.len(), HMAC_SHA256_KEY_SIZE)?;

        let mut ctx = Sha256::new();
        let valid = to_core_result(
            Hmac::verify(&mut ctx, key, self.input, self.signature),
            "HMAC-SHA256 verify",
        )?;
        Ok(Verification::from(valid))
    }

    /// Check a 64-byte ECDSA `r || s` signature under the 64-byte public key `X || Y`
    ///
    /// Checks run in order: signature length, key length, curve code.
    pub fn verify_ecdsa(&self, key: &[u8], curve: CurveId) -> Result<Verification> {
        traced(AlgorithmId::Ecdsa(curve), self.check_ecdsa(key, curve))
    }

    fn check_ecdsa(&self, key: &[u8], curve: CurveId) -> Result<Verification> {
        ecdsa::check_verify_sizes(key, self.signature)?;
        let curve = ec::lookup(curve)?;
        let digest = Sha256::digest(self.input);
        ecdsa::verify(curve, key, &digest, self.signature)
    }

    /// Check the tag for `algorithm`
    ///
    /// `key` is ignored for [`AlgorithmId::DigestSha256`].
    pub fn verify(&self, algorithm: AlgorithmId, key: &[u8]) -> Result<Verification> {
        match algorithm {
            AlgorithmId::DigestSha256 => self.verify_sha256(),
            AlgorithmId::HmacSha256 => self.verify_hmac(key),
            AlgorithmId::Ecdsa(curve) => self.verify_ecdsa(key, curve),
        }
    }
}
