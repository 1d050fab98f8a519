//! ECDSA over the registered short Weierstrass curves
//!
//! Implements signature generation and verification as in SEC 1 v2,
//! sections 4.1.3 and 4.1.4, with the message digest produced by SHA-256.
//! Keys and signatures use the same fixed-width big-endian encodings on every
//! curve, each integer left-padded with zeros to 32 bytes:
//!
//! * private key: `d`, 32 bytes
//! * public key: `X || Y` without a prefix byte, 64 bytes
//! * signature: `r || s`, 64 bytes
//!
//! Nonces come either from RFC 6979 over a caller [`HashContext`] or from an
//! [`EntropySource`]. Both paths retry until they find a nonce that yields a
//! usable signature, within [`MAX_NONCE_ATTEMPTS`] draws.

use sigengine_algorithms::ec::{Curve, Uint};
use sigengine_algorithms::Error as AlgoError;
use sigengine_api::error::validate;
use sigengine_api::{EntropySource, Error, HashContext, Result, Verification};
use sigengine_params::traditional::ecdsa::{
    ECDSA_COORDINATE_SIZE, ECDSA_PRIVATE_KEY_SIZE, ECDSA_PUBLIC_KEY_SIZE, ECDSA_SIGNATURE_SIZE,
};
use sigengine_params::utils::hash::SHA256_OUTPUT_SIZE;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

mod nonce;
pub use nonce::{NonceScratch, NONCE_SCRATCH_SIZE};
use nonce::Rfc6979;

/// Upper bound on nonce draws per signature or key generation
pub const MAX_NONCE_ATTEMPTS: usize = 64;

/// Leftmost `qlen` bits of `bytes` as an integer (SEC 1, 4.1.3 step 5)
pub(crate) fn bits2int(curve: &Curve, bytes: &[u8]) -> Uint {
    let value = Uint::from_be_slice(bytes);
    let blen = 8 * bytes.len() as u32;
    let qlen = curve.order().bits();
    if blen > qlen {
        value.shr(blen - qlen)
    } else {
        value
    }
}

// e = bits2int(H(m)) mod n
fn digest_scalar(curve: &Curve, digest: &[u8; SHA256_OUTPUT_SIZE]) -> Uint {
    curve.order().reduce(&bits2int(curve, digest))
}

// Parse d and require 1 <= d < n
fn parse_private_key(curve: &Curve, private_key: &[u8]) -> Result<Uint> {
    validate::key_size("ECDSA private key", private_key.len(), ECDSA_PRIVATE_KEY_SIZE)?;
    let d = Uint::from_be_slice(private_key);
    if !curve.order().contains_nonzero(&d) {
        return Err(Error::crypto("ECDSA private key out of range"));
    }
    Ok(d)
}

// One signing attempt with nonce k; None when k must be rejected
fn try_sign(curve: &Curve, d: &Uint, e: &Uint, k: &Uint) -> Option<(Uint, Uint)> {
    let n = curve.order();
    if !n.contains_nonzero(k) {
        return None;
    }

    let point = curve.to_affine(&curve.mul_base(k))?;
    let r = n.reduce(&curve.x_coordinate(&point));
    if r.is_zero() {
        return None;
    }

    // s = k⁻¹ · (e + r·d) mod n
    let mut k_m = n.to_mont(k);
    let mut k_inv = n.invert(&k_m);
    let mut d_m = n.to_mont(d);
    let rd = n.mul(&n.to_mont(&r), &d_m);
    let s = n.from_mont(&n.mul(&k_inv, &n.add(&n.to_mont(e), &rd)));
    k_m.zeroize();
    k_inv.zeroize();
    d_m.zeroize();

    if s.is_zero() {
        return None;
    }
    Some((r, s))
}

fn write_signature(r: &Uint, s: &Uint, signature: &mut [u8]) {
    let (r_out, s_out) = signature[..ECDSA_SIGNATURE_SIZE].split_at_mut(ECDSA_COORDINATE_SIZE);
    r.write_be(r_out);
    s.write_be(s_out);
}

// Walk the RFC 6979 candidate sequence until one yields a signature
fn sign_with_drbg(
    curve: &Curve,
    d: &Uint,
    e: &Uint,
    hash: &mut dyn HashContext,
    scratch: &mut NonceScratch,
) -> core::result::Result<Option<(Uint, Uint)>, AlgoError> {
    let mut drbg = Rfc6979::new(curve, d, e, hash, scratch)?;
    for _ in 0..MAX_NONCE_ATTEMPTS {
        let mut k = drbg.next_candidate()?;
        let attempt = try_sign(curve, d, e, &k);
        k.zeroize();
        if attempt.is_some() {
            return Ok(attempt);
        }
    }
    Ok(None)
}

/// Sign `digest` with a deterministic RFC 6979 nonce
///
/// `hash` drives the HMAC-DRBG and must have a 32-byte output and a block of
/// at most 64 bytes. `signature` receives `r || s` in its first 64 bytes and
/// is left untouched on error.
pub fn sign_deterministic(
    curve: &Curve,
    private_key: &[u8],
    digest: &[u8; SHA256_OUTPUT_SIZE],
    hash: &mut dyn HashContext,
    scratch: &mut NonceScratch,
    signature: &mut [u8],
) -> Result<()> {
    validate::capacity(ECDSA_SIGNATURE_SIZE, signature.len(), 0)?;
    let mut d = parse_private_key(curve, private_key)?;
    let e = digest_scalar(curve, digest);

    let result = sign_with_drbg(curve, &d, &e, hash, scratch);
    d.zeroize();
    scratch.zeroize();

    match result {
        Ok(Some((r, s))) => {
            write_signature(&r, &s, signature);
            Ok(())
        }
        Ok(None) => Err(Error::crypto("ECDSA nonce attempts exhausted")),
        Err(err) => Err(Error::from(err)),
    }
}

// Draw a candidate scalar: rlen bytes, truncated to qlen bits
fn random_candidate(curve: &Curve, source: &mut dyn EntropySource) -> Result<Uint> {
    let mut buf = [0u8; ECDSA_PRIVATE_KEY_SIZE];
    let len = curve.scalar_size();
    if !source.fill(&mut buf[..len]) {
        buf.zeroize();
        return Err(Error::crypto("entropy source failure"));
    }
    let k = bits2int(curve, &buf[..len]);
    buf.zeroize();
    Ok(k)
}

/// Sign `digest` with a nonce drawn from `source`
///
/// Candidates outside `[1, n)` or yielding an unusable signature are redrawn.
/// A source reporting failure aborts with `CryptoFailure`, as does exhausting
/// [`MAX_NONCE_ATTEMPTS`].
pub fn sign_with_entropy(
    curve: &Curve,
    private_key: &[u8],
    digest: &[u8; SHA256_OUTPUT_SIZE],
    source: &mut dyn EntropySource,
    signature: &mut [u8],
) -> Result<()> {
    validate::capacity(ECDSA_SIGNATURE_SIZE, signature.len(), 0)?;
    let mut d = parse_private_key(curve, private_key)?;
    let e = digest_scalar(curve, digest);

    let mut found = None;
    for _ in 0..MAX_NONCE_ATTEMPTS {
        let mut k = match random_candidate(curve, source) {
            Ok(k) => k,
            Err(err) => {
                d.zeroize();
                return Err(err);
            }
        };
        found = try_sign(curve, &d, &e, &k);
        k.zeroize();
        if found.is_some() {
            break;
        }
    }
    d.zeroize();

    let (r, s) = found.ok_or(Error::crypto("ECDSA nonce attempts exhausted"))?;
    write_signature(&r, &s, signature);
    Ok(())
}

/// Length checks shared by every ECDSA verification
///
/// The signature length is reported before the public key length. Neither
/// depends on the curve, so callers may run this before resolving a curve code.
pub fn check_verify_sizes(public_key: &[u8], signature: &[u8]) -> Result<()> {
    validate::signature_size("ECDSA signature", signature.len(), ECDSA_SIGNATURE_SIZE)?;
    validate::key_size("ECDSA public key", public_key.len(), ECDSA_PUBLIC_KEY_SIZE)
}

/// Verify an `r || s` signature over `digest`
///
/// Size errors are reported before any arithmetic: the signature length
/// first, then the public key length. A public key that is not a curve point,
/// or `r`/`s` outside `[1, n)`, is a mismatch rather than an error.
pub fn verify(
    curve: &Curve,
    public_key: &[u8],
    digest: &[u8; SHA256_OUTPUT_SIZE],
    signature: &[u8],
) -> Result<Verification> {
    check_verify_sizes(public_key, signature)?;

    let q = match curve.decode_point(public_key) {
        Some(q) => q,
        None => return Ok(Verification::Invalid),
    };

    let n = curve.order();
    let (r, s) = signature.split_at(ECDSA_COORDINATE_SIZE);
    let r = Uint::from_be_slice(r);
    let s = Uint::from_be_slice(s);
    if !n.contains_nonzero(&r) || !n.contains_nonzero(&s) {
        return Ok(Verification::Invalid);
    }

    // u₁ = e·s⁻¹, u₂ = r·s⁻¹, X = u₁·G + u₂·Q
    let e = digest_scalar(curve, digest);
    let w = n.invert(&n.to_mont(&s));
    let u1 = n.from_mont(&n.mul(&w, &n.to_mont(&e)));
    let u2 = n.from_mont(&n.mul(&w, &n.to_mont(&r)));
    let x = curve.add(&curve.mul_base(&u1), &curve.mul(&u2, &q));

    let point = match curve.to_affine(&x) {
        Some(point) => point,
        None => return Ok(Verification::Invalid),
    };
    let v = n.reduce(&curve.x_coordinate(&point));
    Ok(Verification::from(bool::from(v.ct_eq(&r))))
}

/// Derive the public key `Q = d·G` into `public_key[..64]`
pub fn compute_public_key(curve: &Curve, private_key: &[u8], public_key: &mut [u8]) -> Result<()> {
    validate::capacity(ECDSA_PUBLIC_KEY_SIZE, public_key.len(), 0)?;
    let mut d = parse_private_key(curve, private_key)?;
    let q = curve.to_affine(&curve.mul_base(&d));
    d.zeroize();
    let q = q.ok_or(Error::crypto("ECDSA public key derivation"))?;
    curve.encode_point(&q, public_key);
    Ok(())
}

/// Generate a key pair from `source`
///
/// The private key is drawn by rejection sampling into `[1, n)`. Neither
/// output is written unless generation succeeds.
pub fn generate_keypair(
    curve: &Curve,
    source: &mut dyn EntropySource,
    private_key: &mut [u8],
    public_key: &mut [u8],
) -> Result<()> {
    validate::key_size("ECDSA private key", private_key.len(), ECDSA_PRIVATE_KEY_SIZE)?;
    validate::capacity(ECDSA_PUBLIC_KEY_SIZE, public_key.len(), 0)?;

    for _ in 0..MAX_NONCE_ATTEMPTS {
        let mut d = random_candidate(curve, source)?;
        if !curve.order().contains_nonzero(&d) {
            d.zeroize();
            continue;
        }
        let q = curve.to_affine(&curve.mul_base(&d));
        if let Some(q) = q {
            d.write_be(private_key);
            curve.encode_point(&q, public_key);
            d.zeroize();
            return Ok(());
        }
        d.zeroize();
    }
    Err(Error::crypto("ECDSA key generation attempts exhausted"))
}

/// Does `public_key` encode a point on the curve?
pub fn is_valid_public_key(curve: &Curve, public_key: &[u8]) -> bool {
    curve.decode_point(public_key).is_some()
}
