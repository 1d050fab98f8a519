//! Shared fixtures for the sigengine integration and property tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sigengine_algorithms::ec;
use sigengine_api::{CurveId, Result};
use sigengine_sign::{ecdsa, RngEntropy};

/// Key pair for `curve` drawn from a ChaCha20 stream seeded with `seed`
pub fn keypair(curve: CurveId, seed: u64) -> Result<([u8; 32], [u8; 64])> {
    let curve = ec::lookup(curve)?;
    let mut sk = [0u8; 32];
    let mut pk = [0u8; 64];
    let mut source = RngEntropy::new(ChaCha20Rng::seed_from_u64(seed));
    ecdsa::generate_keypair(curve, &mut source, &mut sk, &mut pk)?;
    Ok((sk, pk))
}

/// 32-byte private key whose value is below the order of every curve
pub fn low_key(byte: u8) -> [u8; 32] {
    let mut key = [0u8; 32];
    key[16..].fill(byte);
    key
}
