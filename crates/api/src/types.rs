//! Identifier and outcome types shared across the engine

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a verification that completed without an operational error
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verification {
    /// The signature matches the input (and key, for keyed algorithms)
    Valid,
    /// The signature does not match
    Invalid,
}

impl Verification {
    /// `true` for [`Verification::Valid`]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// One-byte elliptic curve code, as carried by the packet layer
///
/// Any byte is representable; only the associated constants name supported
/// curves. Looking up an unknown code yields `Error::UnsupportedAlgorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveId(u8);

impl CurveId {
    /// secp160r1
    pub const SECP160R1: Self = Self(0);
    /// secp192r1 (NIST P-192)
    pub const SECP192R1: Self = Self(1);
    /// secp224r1 (NIST P-224)
    pub const SECP224R1: Self = Self(2);
    /// secp256r1 (NIST P-256)
    pub const SECP256R1: Self = Self(3);
    /// secp256k1
    pub const SECP256K1: Self = Self(4);

    /// Every supported curve, in code order
    pub const ALL: [Self; 5] = [
        Self::SECP160R1,
        Self::SECP192R1,
        Self::SECP224R1,
        Self::SECP256R1,
        Self::SECP256K1,
    ];

    /// Wrap a raw curve code without checking it
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    /// The raw curve code
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl From<u8> for CurveId {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::SECP160R1 => "secp160r1",
            Self::SECP192R1 => "secp192r1",
            Self::SECP224R1 => "secp224r1",
            Self::SECP256R1 => "secp256r1",
            Self::SECP256K1 => "secp256k1",
            Self(code) => return write!(f, "curve#{}", code),
        };
        f.write_str(name)
    }
}

/// Algorithm selector for generic sign/verify dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlgorithmId {
    /// SHA-256 digest as an integrity-only tag
    DigestSha256,
    /// HMAC-SHA256 with a 32-byte key
    HmacSha256,
    /// ECDSA over SHA-256 on the given curve
    Ecdsa(CurveId),
}

impl AlgorithmId {
    /// Whether the algorithm takes a key
    pub const fn is_keyed(self) -> bool {
        !matches!(self, Self::DigestSha256)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigestSha256 => f.write_str("SHA-256"),
            Self::HmacSha256 => f.write_str("HMAC-SHA256"),
            Self::Ecdsa(curve) => write!(f, "ECDSA-{}", curve),
        }
    }
}
