//! Curve descriptors and the static curve registry
//!
//! Each supported curve is a `static` whose Montgomery constants, coefficients
//! and base point are evaluated at compile time from the byte tables in
//! `sigengine-params`. Lookup by curve code is a bounds-checked array index.

use super::modulus::Modulus;
use super::point::AffinePoint;
use super::uint::Uint;
use sigengine_api::{CurveId, Error as ApiError, Result as ApiResult};
use sigengine_params::traditional::ecdsa::{
    CurveParams, ECDSA_PRIVATE_KEY_SIZE, ECDSA_PUBLIC_KEY_SIZE, ECDSA_SIGNATURE_SIZE, SECP160R1,
    SECP192R1, SECP224R1, SECP256K1, SECP256R1,
};

/// Short Weierstrass curve ready for arithmetic
#[derive(Debug)]
pub struct Curve {
    pub(crate) id: CurveId,
    pub(crate) params: &'static CurveParams,
    /// Field prime p
    pub(crate) p: Modulus,
    /// Group order n
    pub(crate) n: Modulus,
    /// Coefficient a, Montgomery form
    pub(crate) a: Uint,
    /// Coefficient b, Montgomery form
    pub(crate) b: Uint,
    /// Base point G
    pub(crate) g: AffinePoint,
}

impl Curve {
    /// Build a curve descriptor from its domain parameters
    pub const fn new(id: CurveId, params: &'static CurveParams) -> Self {
        let p = Modulus::new(params.p);
        let n = Modulus::new(params.n);
        Curve {
            id,
            params,
            p,
            n,
            a: p.to_mont(&Uint::from_be_slice(params.a)),
            b: p.to_mont(&Uint::from_be_slice(params.b)),
            g: AffinePoint {
                x: p.to_mont(&Uint::from_be_slice(params.g_x)),
                y: p.to_mont(&Uint::from_be_slice(params.g_y)),
            },
        }
    }

    /// Curve code
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// SEC 2 name
    pub fn name(&self) -> &'static str {
        self.params.name
    }

    /// Byte length of a field element
    pub fn field_size(&self) -> usize {
        self.params.field_size
    }

    /// Byte length of the group order, the RFC 6979 `rlen`
    pub fn scalar_size(&self) -> usize {
        self.params.scalar_size
    }

    /// Byte length of an encoded private key
    pub fn private_key_size(&self) -> usize {
        ECDSA_PRIVATE_KEY_SIZE
    }

    /// Byte length of an uncompressed public key without prefix
    pub fn public_key_size(&self) -> usize {
        ECDSA_PUBLIC_KEY_SIZE
    }

    /// Byte length of an `r || s` signature
    pub fn signature_size(&self) -> usize {
        ECDSA_SIGNATURE_SIZE
    }

    /// Field modulus
    pub fn field(&self) -> &Modulus {
        &self.p
    }

    /// Group order modulus
    pub fn order(&self) -> &Modulus {
        &self.n
    }

    /// Base point
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }
}

static CURVE_SECP160R1: Curve = Curve::new(CurveId::SECP160R1, &SECP160R1);
static CURVE_SECP192R1: Curve = Curve::new(CurveId::SECP192R1, &SECP192R1);
static CURVE_SECP224R1: Curve = Curve::new(CurveId::SECP224R1, &SECP224R1);
static CURVE_SECP256R1: Curve = Curve::new(CurveId::SECP256R1, &SECP256R1);
static CURVE_SECP256K1: Curve = Curve::new(CurveId::SECP256K1, &SECP256K1);

// Indexed by curve code
static CURVES: [&Curve; 5] = [
    &CURVE_SECP160R1,
    &CURVE_SECP192R1,
    &CURVE_SECP224R1,
    &CURVE_SECP256R1,
    &CURVE_SECP256K1,
];

/// Look up a curve by code
///
/// Unknown codes yield `UnsupportedAlgorithm`; this never panics.
pub fn lookup(id: CurveId) -> ApiResult<&'static Curve> {
    CURVES
        .get(id.code() as usize)
        .copied()
        .ok_or(ApiError::UnsupportedAlgorithm { code: id.code() })
}

/// Every registered curve, in code order
pub fn all() -> impl Iterator<Item = &'static Curve> {
    CURVES.iter().copied()
}
