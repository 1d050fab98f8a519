//! Deterministic nonce generation (RFC 6979, section 3.2)
//!
//! The HMAC-DRBG runs over a caller-supplied [`HashContext`] and keeps its
//! whole state in a [`NonceScratch`]: the `int2octets(x) || bits2octets(h)`
//! seed, the K and V registers and the HMAC pad block. Only SHA-256-sized
//! contexts are accepted, so one V block always covers qlen.

use super::bits2int;
use sigengine_algorithms::ec::{Curve, Uint};
use sigengine_algorithms::error::validate;
use sigengine_algorithms::{Error as AlgoError, Hmac};
use sigengine_api::HashContext;
use sigengine_params::traditional::ecdsa::{ECDSA_PRIVATE_KEY_SIZE, ECDSA_SIGNATURE_SIZE};
use sigengine_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte size of [`NonceScratch`]: private key, digest and two signatures
pub const NONCE_SCRATCH_SIZE: usize =
    ECDSA_PRIVATE_KEY_SIZE + SHA256_OUTPUT_SIZE + 2 * ECDSA_SIGNATURE_SIZE;

/// Working memory for deterministic nonce generation
///
/// Holds key-derived material while a signature is produced and is wiped on
/// drop. One scratch can be reused across signatures.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct NonceScratch {
    seed: [u8; 2 * ECDSA_PRIVATE_KEY_SIZE],
    k: [u8; SHA256_OUTPUT_SIZE],
    v: [u8; SHA256_OUTPUT_SIZE],
    pad: [u8; SHA256_BLOCK_SIZE],
}

const _: () = assert!(core::mem::size_of::<NonceScratch>() == NONCE_SCRATCH_SIZE);

impl NonceScratch {
    /// Zeroed scratch
    pub const fn new() -> Self {
        Self {
            seed: [0; 2 * ECDSA_PRIVATE_KEY_SIZE],
            k: [0; SHA256_OUTPUT_SIZE],
            v: [0; SHA256_OUTPUT_SIZE],
            pad: [0; SHA256_BLOCK_SIZE],
        }
    }
}

impl Default for NonceScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// HMAC-DRBG instance producing nonce candidates for one signature
pub(crate) struct Rfc6979<'a> {
    hash: &'a mut dyn HashContext,
    state: &'a mut NonceScratch,
    curve: &'a Curve,
    seed_len: usize,
    fresh: bool,
}

// HMAC_K(parts...) into out
fn hmac(
    hash: &mut dyn HashContext,
    key: &[u8],
    pad: &mut [u8],
    parts: &[&[u8]],
    out: &mut [u8],
) -> Result<(), AlgoError> {
    let mut mac = Hmac::new_in(hash, key, pad)?;
    for part in parts {
        mac.update(part);
    }
    mac.finalize(out)
}

impl<'a> Rfc6979<'a> {
    /// Seed the generator from the private key `x` and the reduced digest `h`
    pub(crate) fn new(
        curve: &'a Curve,
        x: &Uint,
        h: &Uint,
        hash: &'a mut dyn HashContext,
        state: &'a mut NonceScratch,
    ) -> Result<Self, AlgoError> {
        validate::length("RFC 6979 hash output", hash.output_size(), SHA256_OUTPUT_SIZE)?;
        validate::max_length("RFC 6979 hash block", hash.block_size(), SHA256_BLOCK_SIZE)?;

        let rlen = curve.scalar_size();
        x.write_be(&mut state.seed[..rlen]);
        h.write_be(&mut state.seed[rlen..2 * rlen]);
        state.v.fill(0x01);
        state.k.fill(0x00);

        let mut drbg = Self {
            hash,
            state,
            curve,
            seed_len: 2 * rlen,
            fresh: true,
        };
        drbg.absorb_seed(0x00)?;
        drbg.absorb_seed(0x01)?;
        Ok(drbg)
    }

    // K = HMAC_K(V || tag || seed); V = HMAC_K(V)
    fn absorb_seed(&mut self, tag: u8) -> Result<(), AlgoError> {
        let mut t = [0u8; SHA256_OUTPUT_SIZE];
        let s = &mut *self.state;
        hmac(
            &mut *self.hash,
            &s.k,
            &mut s.pad,
            &[&s.v[..], &[tag][..], &s.seed[..self.seed_len]],
            &mut t,
        )?;
        s.k.copy_from_slice(&t);
        t.zeroize();
        self.step_v()
    }

    // K = HMAC_K(V || 0x00); V = HMAC_K(V)
    fn reseed(&mut self) -> Result<(), AlgoError> {
        let mut t = [0u8; SHA256_OUTPUT_SIZE];
        let s = &mut *self.state;
        hmac(&mut *self.hash, &s.k, &mut s.pad, &[&s.v[..], &[0x00][..]], &mut t)?;
        s.k.copy_from_slice(&t);
        t.zeroize();
        self.step_v()
    }

    // V = HMAC_K(V)
    fn step_v(&mut self) -> Result<(), AlgoError> {
        let mut t = [0u8; SHA256_OUTPUT_SIZE];
        let s = &mut *self.state;
        hmac(&mut *self.hash, &s.k, &mut s.pad, &[&s.v[..]], &mut t)?;
        s.v.copy_from_slice(&t);
        t.zeroize();
        Ok(())
    }

    /// Next candidate `k = bits2int(V)`, not yet range-checked
    ///
    /// Every call after the first applies the rejection update of step H.3
    /// before drawing, so a candidate refused by the signer (out of range,
    /// r = 0 or s = 0) is never repeated.
    pub(crate) fn next_candidate(&mut self) -> Result<Uint, AlgoError> {
        if !self.fresh {
            self.reseed()?;
        }
        self.fresh = false;
        self.step_v()?;
        Ok(bits2int(self.curve, &self.state.v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigengine_algorithms::ec::lookup;
    use sigengine_algorithms::Sha256;
    use sigengine_api::CurveId;

    fn uint(hex_str: &str) -> Uint {
        Uint::from_be_slice(&hex::decode(hex_str).unwrap())
    }

    #[test]
    fn test_scratch_layout() {
        assert_eq!(NONCE_SCRATCH_SIZE, 192);
        assert_eq!(core::mem::size_of::<NonceScratch>(), NONCE_SCRATCH_SIZE);
    }

    #[test]
    fn test_rfc6979_p256_sample_nonce() {
        // RFC 6979 A.2.5, SHA-256, message "sample"
        let curve = lookup(CurveId::SECP256R1).unwrap();
        let x = uint("C9AFA9D845BA75166B5C215767B1D6934E50C3DB36E89B127B8A622B120F6721");
        let digest = Sha256::digest(b"sample");
        let h = curve.order().reduce(&bits2int(curve, &digest));

        let mut ctx = Sha256::new();
        let mut scratch = NonceScratch::new();
        let mut drbg = Rfc6979::new(curve, &x, &h, &mut ctx, &mut scratch).unwrap();
        assert_eq!(
            drbg.next_candidate().unwrap(),
            uint("A6E3C57DD01ABE90086538398355DD4C3B17AA873382B0F24D6129493D8AAD60")
        );
    }

    #[test]
    fn test_candidates_do_not_repeat() {
        let curve = lookup(CurveId::SECP192R1).unwrap();
        let x = Uint::from_u32(7);
        let h = Uint::from_u32(11);
        let mut ctx = Sha256::new();
        let mut scratch = NonceScratch::new();
        let mut drbg = Rfc6979::new(curve, &x, &h, &mut ctx, &mut scratch).unwrap();
        let first = drbg.next_candidate().unwrap();
        let second = drbg.next_candidate().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_secp160r1_candidate_width() {
        // qlen = 161, so candidates are the top 161 bits of V
        let curve = lookup(CurveId::SECP160R1).unwrap();
        let mut ctx = Sha256::new();
        let mut scratch = NonceScratch::new();
        let mut drbg =
            Rfc6979::new(curve, &Uint::ONE, &Uint::ONE, &mut ctx, &mut scratch).unwrap();
        for _ in 0..8 {
            assert!(drbg.next_candidate().unwrap().bits() <= 161);
        }
    }

    #[test]
    fn test_rejects_wrong_hash_size() {
        struct Wide(Sha256);
        impl HashContext for Wide {
            fn block_size(&self) -> usize {
                128
            }
            fn output_size(&self) -> usize {
                64
            }
            fn init(&mut self) {
                self.0.init()
            }
            fn update(&mut self, data: &[u8]) {
                self.0.update(data)
            }
            fn finalize(&mut self, out: &mut [u8]) {
                self.0.finalize(out)
            }
        }

        let curve = lookup(CurveId::SECP256R1).unwrap();
        let mut ctx = Wide(Sha256::new());
        let mut scratch = NonceScratch::new();
        assert!(Rfc6979::new(curve, &Uint::ONE, &Uint::ONE, &mut ctx, &mut scratch).is_err());
    }

    #[test]
    fn test_scratch_is_wiped_by_zeroize() {
        let curve = lookup(CurveId::SECP256K1).unwrap();
        let mut ctx = Sha256::new();
        let mut scratch = NonceScratch::new();
        {
            let mut drbg =
                Rfc6979::new(curve, &Uint::ONE, &Uint::ONE, &mut ctx, &mut scratch).unwrap();
            drbg.next_candidate().unwrap();
        }
        assert!(scratch.v.iter().any(|&b| b != 0));
        scratch.zeroize();
        assert!(scratch.v.iter().all(|&b| b == 0));
        assert!(scratch.seed.iter().all(|&b| b == 0));
    }
}
