//! Constants for HMAC-SHA256 tags

use crate::utils::hash::SHA256_OUTPUT_SIZE;

/// Required key length for HMAC-SHA256 tags in bytes
pub const HMAC_SHA256_KEY_SIZE: usize = 32;

/// HMAC-SHA256 tag length in bytes
pub const HMAC_SHA256_TAG_SIZE: usize = SHA256_OUTPUT_SIZE;

/// Inner padding byte (RFC 2104)
pub const HMAC_IPAD: u8 = 0x36;

/// Outer padding byte (RFC 2104)
pub const HMAC_OPAD: u8 = 0x5c;
