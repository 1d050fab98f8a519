//! Error type definitions for signing and verification

use thiserror::Error;

/// Primary error type for signer and verifier operations
///
/// A signature that simply fails to verify is not an error; it is reported as
/// [`Verification::Invalid`](crate::Verification::Invalid). Every variant here
/// leaves the caller's buffers and cursors exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The output region cannot hold the tag
    #[error("output buffer too small: {needed} bytes needed, {available} available")]
    Oversize {
        /// Tag length the operation would append
        needed: usize,
        /// Bytes left between the cursor and the end of the output
        available: usize,
    },

    /// The key length does not match the algorithm requirement
    #[error("{context}: wrong key size (expected {expected}, got {actual})")]
    WrongKeySize {
        /// Operation that rejected the key
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length supplied by the caller
        actual: usize,
    },

    /// The signature length does not match the algorithm requirement
    #[error("{context}: wrong signature size (expected {expected}, got {actual})")]
    WrongSignatureSize {
        /// Operation that rejected the signature
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length supplied by the caller
        actual: usize,
    },

    /// The curve code names no supported curve
    #[error("unsupported algorithm: curve code {code}")]
    UnsupportedAlgorithm {
        /// The curve code that was requested
        code: u8,
    },

    /// The underlying primitive failed (entropy source, invalid key, nonce exhaustion)
    #[error("cryptographic operation failed: {context}")]
    CryptoFailure {
        /// Operation that failed
        context: &'static str,
    },
}

/// Result type for signer and verifier operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `CryptoFailure`
    pub const fn crypto(context: &'static str) -> Self {
        Self::CryptoFailure { context }
    }

    /// Whether retrying the same call later may succeed
    ///
    /// Only primitive failures qualify: an entropy source may recover. Size and
    /// algorithm errors are deterministic.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::CryptoFailure { .. })
    }
}
