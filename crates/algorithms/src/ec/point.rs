//! Elliptic curve point arithmetic
//!
//! Points are kept in Jacobian coordinates (X:Y:Z) with x = X/Z² and
//! y = Y/Z³, every coordinate in Montgomery form over the curve's field.
//! Z = 0 encodes the point at infinity. The group law is complete for the
//! inputs it receives: doubling, inverse pairs and identity operands are
//! resolved with constant-time selection rather than branches.

use super::curve::Curve;
use super::uint::Uint;
use sigengine_params::traditional::ecdsa::ECDSA_COORDINATE_SIZE;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Affine point (x, y), coordinates in Montgomery form; never the identity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    pub(crate) x: Uint,
    pub(crate) y: Uint,
}

/// Jacobian coordinates (X:Y:Z) for efficient arithmetic
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: Uint,
    pub(crate) y: Uint,
    pub(crate) z: Uint,
}

impl ProjectivePoint {
    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: Uint::conditional_select(&a.x, &b.x, choice),
            y: Uint::conditional_select(&a.y, &b.y, choice),
            z: Uint::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Curve {
    /// The point at infinity
    pub fn identity(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.p.one(),
            y: self.p.one(),
            z: Uint::ZERO,
        }
    }

    /// Lift an affine point to Jacobian coordinates with Z = 1
    pub fn to_projective(&self, p: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint {
            x: p.x,
            y: p.y,
            z: self.p.one(),
        }
    }

    /// Point doubling for a general coefficient a
    ///
    /// S = 4·X·Y², M = 3·X² + a·Z⁴, X₃ = M² − 2S,
    /// Y₃ = M·(S − X₃) − 8·Y⁴, Z₃ = 2·Y·Z
    pub fn double(&self, p: &ProjectivePoint) -> ProjectivePoint {
        let f = &self.p;

        let xx = f.square(&p.x);
        let yy = f.square(&p.y);
        let yyyy = f.square(&yy);
        let zz = f.square(&p.z);

        let xyy = f.mul(&p.x, &yy);
        let xyy2 = f.add(&xyy, &xyy);
        let s = f.add(&xyy2, &xyy2);

        let xx3 = f.add(&f.add(&xx, &xx), &xx);
        let m = f.add(&xx3, &f.mul(&self.a, &f.square(&zz)));

        let x3 = f.sub(&f.square(&m), &f.add(&s, &s));

        let yyyy2 = f.add(&yyyy, &yyyy);
        let yyyy4 = f.add(&yyyy2, &yyyy2);
        let yyyy8 = f.add(&yyyy4, &yyyy4);
        let y3 = f.sub(&f.mul(&m, &f.sub(&s, &x3)), &yyyy8);

        let yz = f.mul(&p.y, &p.z);
        let z3 = f.add(&yz, &yz);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition
    ///
    /// U₁ = X₁·Z₂², U₂ = X₂·Z₁², S₁ = Y₁·Z₂³, S₂ = Y₂·Z₁³, H = U₂ − U₁, R = S₂ − S₁,
    /// X₃ = R² − H³ − 2·U₁·H², Y₃ = R·(U₁·H² − X₃) − S₁·H³, Z₃ = Z₁·Z₂·H
    pub fn add(&self, p: &ProjectivePoint, q: &ProjectivePoint) -> ProjectivePoint {
        let f = &self.p;

        let z1z1 = f.square(&p.z);
        let z2z2 = f.square(&q.z);

        let u1 = f.mul(&p.x, &z2z2);
        let u2 = f.mul(&q.x, &z1z1);
        let s1 = f.mul(&f.mul(&p.y, &q.z), &z2z2);
        let s2 = f.mul(&f.mul(&q.y, &p.z), &z1z1);

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);

        let hh = f.square(&h);
        let hhh = f.mul(&h, &hh);
        let u1hh = f.mul(&u1, &hh);

        let x3 = f.sub(&f.sub(&f.square(&r), &hhh), &f.add(&u1hh, &u1hh));
        let y3 = f.sub(&f.mul(&r, &f.sub(&u1hh, &x3)), &f.mul(&s1, &hhh));
        let z3 = f.mul(&f.mul(&p.z, &q.z), &h);

        // Inverse pairs already yield Z₃ = 0; equal inputs need the doubling formula
        let sum = ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        };
        let same = h.ct_eq(&Uint::ZERO) & r.ct_eq(&Uint::ZERO);
        let mut out = ProjectivePoint::conditional_select(&sum, &self.double(p), same);

        let p_is_identity = p.z.ct_eq(&Uint::ZERO);
        let q_is_identity = q.z.ct_eq(&Uint::ZERO);
        out = ProjectivePoint::conditional_select(&out, q, p_is_identity);
        ProjectivePoint::conditional_select(&out, p, q_is_identity)
    }

    /// Scalar multiplication `k·P` for `k < n`
    ///
    /// Double-and-add-always over the bit length of the group order.
    pub fn mul(&self, k: &Uint, p: &AffinePoint) -> ProjectivePoint {
        let base = self.to_projective(p);
        let mut acc = self.identity();
        let mut i = self.n.bits();
        while i > 0 {
            i -= 1;
            acc = self.double(&acc);
            let sum = self.add(&acc, &base);
            acc = ProjectivePoint::conditional_select(&acc, &sum, Choice::from(k.bit(i) as u8));
        }
        acc
    }

    /// Fixed-base scalar multiplication `k·G`
    pub fn mul_base(&self, k: &Uint) -> ProjectivePoint {
        self.mul(k, &self.g)
    }

    /// Convert to affine coordinates; `None` for the point at infinity
    pub fn to_affine(&self, p: &ProjectivePoint) -> Option<AffinePoint> {
        if p.is_identity() {
            return None;
        }
        let f = &self.p;
        let z_inv = f.invert(&p.z);
        let z_inv2 = f.square(&z_inv);
        Some(AffinePoint {
            x: f.mul(&p.x, &z_inv2),
            y: f.mul(&f.mul(&p.y, &z_inv2), &z_inv),
        })
    }

    /// Check `y² = x³ + a·x + b` for Montgomery-form coordinates
    pub fn is_on_curve(&self, p: &AffinePoint) -> bool {
        let f = &self.p;
        let lhs = f.square(&p.y);
        let x3 = f.mul(&f.square(&p.x), &p.x);
        let rhs = f.add(&f.add(&x3, &f.mul(&self.a, &p.x)), &self.b);
        lhs.ct_eq(&rhs).into()
    }

    /// Affine x-coordinate as an integer in `[0, p)`
    pub fn x_coordinate(&self, p: &AffinePoint) -> Uint {
        self.p.from_mont(&p.x)
    }

    /// Decode an uncompressed `X || Y` point (no prefix byte)
    ///
    /// Each coordinate is [`ECDSA_COORDINATE_SIZE`] bytes. `None` unless both
    /// coordinates are below p and the point lies on the curve, so nonzero
    /// padding on the smaller curves is rejected. The identity has no encoding.
    pub fn decode_point(&self, bytes: &[u8]) -> Option<AffinePoint> {
        if bytes.len() != 2 * ECDSA_COORDINATE_SIZE {
            return None;
        }
        let (x, y) = bytes.split_at(ECDSA_COORDINATE_SIZE);
        let x = Uint::from_be_slice(x);
        let y = Uint::from_be_slice(y);
        if !self.p.contains(&x) || !self.p.contains(&y) {
            return None;
        }
        let point = AffinePoint {
            x: self.p.to_mont(&x),
            y: self.p.to_mont(&y),
        };
        if self.is_on_curve(&point) {
            Some(point)
        } else {
            None
        }
    }

    /// Encode `X || Y`, each coordinate big-endian and zero-padded
    pub fn encode_point(&self, p: &AffinePoint, out: &mut [u8]) {
        let (x_out, y_out) =
            out[..2 * ECDSA_COORDINATE_SIZE].split_at_mut(ECDSA_COORDINATE_SIZE);
        self.p.from_mont(&p.x).write_be(x_out);
        self.p.from_mont(&p.y).write_be(y_out);
    }
}
