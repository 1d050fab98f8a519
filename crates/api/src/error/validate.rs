//! Validation utilities shared by the signer and verifier

use super::{Error, Result};

/// Validate that `tag_len` bytes fit between the cursor and the end of the output
#[inline(always)]
pub fn capacity(tag_len: usize, capacity: usize, used: usize) -> Result<()> {
    let available = capacity.saturating_sub(used);
    if available < tag_len {
        return Err(Error::Oversize {
            needed: tag_len,
            available,
        });
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::WrongKeySize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a detached signature length
#[inline(always)]
pub fn signature_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::WrongSignatureSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
