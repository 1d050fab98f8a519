//! Capabilities injected into the engine by its caller

/// Streaming hash context
///
/// The deterministic nonce derivation and the HMAC construction drive the hash
/// exclusively through this interface, so a platform may substitute a hardware
/// digest engine. The context is reused: `init` must fully reset any previous
/// state.
pub trait HashContext {
    /// Internal block size in bytes
    fn block_size(&self) -> usize;

    /// Digest length in bytes
    fn output_size(&self) -> usize;

    /// Reset to the initial state
    fn init(&mut self);

    /// Absorb `data`
    fn update(&mut self, data: &[u8]);

    /// Write the digest into `out[..output_size()]`
    ///
    /// `out` is at least `output_size()` bytes long. The context must be
    /// re-initialised before further use.
    fn finalize(&mut self, out: &mut [u8]);
}

/// Source of nonce and key-generation randomness
///
/// Mirrors a hardware RNG driver: fill the whole buffer and report success.
/// A source that returns `false` must not be treated as having produced bytes.
pub trait EntropySource {
    /// Fill `dest` completely with random bytes; `false` on failure
    fn fill(&mut self, dest: &mut [u8]) -> bool;
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> bool,
{
    fn fill(&mut self, dest: &mut [u8]) -> bool {
        self(dest)
    }
}
