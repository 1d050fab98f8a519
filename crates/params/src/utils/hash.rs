//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Largest block size any `HashContext` may report to the HMAC construction
pub const MAX_HASH_BLOCK_SIZE: usize = 128;

/// Largest output size any `HashContext` may report to the HMAC construction
pub const MAX_HASH_OUTPUT_SIZE: usize = 64;
