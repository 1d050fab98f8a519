//! Modular arithmetic in Montgomery form
//!
//! A [`Modulus`] carries the constants for Montgomery multiplication with
//! R = 2²⁵⁶ for any odd modulus below R. Both the field primes and the group
//! orders of every supported curve are handled by the same code; the
//! constants are derived at compile time from the modulus alone.

use super::uint::{Uint, LIMBS};

/// Odd modulus with precomputed Montgomery constants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    /// The modulus m
    pub(crate) m: Uint,
    /// −m⁻¹ mod 2³²
    pub(crate) inv: u32,
    /// R mod m, the Montgomery form of 1
    pub(crate) r: Uint,
    /// R² mod m
    pub(crate) r2: Uint,
    /// Bit length of m
    pub(crate) bits: u32,
}

impl Modulus {
    /// Derive the Montgomery constants for the odd modulus encoded in `be_bytes`
    pub const fn new(be_bytes: &[u8]) -> Self {
        let m = Uint::from_be_slice(be_bytes);
        assert!(m.0[0] & 1 == 1, "Montgomery modulus must be odd");

        // Newton iteration for m⁻¹ mod 2³²; each step doubles the correct bits
        let mut x = 1u32;
        let mut i = 0;
        while i < 5 {
            x = x.wrapping_mul(2u32.wrapping_sub(m.0[0].wrapping_mul(x)));
            i += 1;
        }

        let mut this = Modulus {
            m,
            inv: x.wrapping_neg(),
            r: Uint::ZERO,
            r2: Uint::ZERO,
            bits: m.bits(),
        };

        // R mod m by doubling 1 a total of 256 times, then R² mod m by 256 more
        let mut acc = Uint::ONE;
        let mut i = 0;
        while i < LIMBS * 32 {
            acc = this.add(&acc, &acc);
            i += 1;
        }
        this.r = acc;
        let mut i = 0;
        while i < LIMBS * 32 {
            acc = this.add(&acc, &acc);
            i += 1;
        }
        this.r2 = acc;
        this
    }

    /// The modulus value
    pub const fn value(&self) -> &Uint {
        &self.m
    }

    /// Bit length of the modulus
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Montgomery form of 1
    pub const fn one(&self) -> Uint {
        self.r
    }

    /// Is `x` in `[0, m)`?
    pub const fn contains(&self, x: &Uint) -> bool {
        x.lt(&self.m)
    }

    /// Is `x` in `[1, m)`?
    pub const fn contains_nonzero(&self, x: &Uint) -> bool {
        !x.is_zero() && x.lt(&self.m)
    }

    /// `(a + b) mod m` for `a, b < m`
    #[inline]
    pub const fn add(&self, a: &Uint, b: &Uint) -> Uint {
        let (sum, carry) = a.adc(b);
        let (reduced, borrow) = sum.sbb(&self.m);
        // Subtract when the sum overflowed or is at least m
        Uint::select(&sum, &reduced, carry | (borrow ^ 1))
    }

    /// `(a - b) mod m` for `a, b < m`
    #[inline]
    pub const fn sub(&self, a: &Uint, b: &Uint) -> Uint {
        let (diff, borrow) = a.sbb(b);
        let (corrected, _) = diff.adc(&self.m);
        Uint::select(&diff, &corrected, borrow)
    }

    /// `-a mod m` for `a < m`
    #[inline]
    pub const fn neg(&self, a: &Uint) -> Uint {
        self.sub(&Uint::ZERO, a)
    }

    /// Montgomery product `a·b·R⁻¹ mod m` (CIOS)
    ///
    /// Exact for `a < 2²⁵⁶` and `b < m`; the result is always fully reduced.
    pub const fn mul(&self, a: &Uint, b: &Uint) -> Uint {
        let m = &self.m.0;
        let mut t = [0u32; LIMBS + 2];

        let mut i = 0;
        while i < LIMBS {
            // t += a · b[i]
            let mut carry = 0u64;
            let mut j = 0;
            while j < LIMBS {
                let s = t[j] as u64 + (a.0[j] as u64) * (b.0[i] as u64) + carry;
                t[j] = s as u32;
                carry = s >> 32;
                j += 1;
            }
            let s = t[LIMBS] as u64 + carry;
            t[LIMBS] = s as u32;
            t[LIMBS + 1] = (s >> 32) as u32;

            // t = (t + u·m) / 2³², with u chosen so the low limb vanishes
            let u = t[0].wrapping_mul(self.inv);
            let s = t[0] as u64 + (u as u64) * (m[0] as u64);
            let mut carry = s >> 32;
            let mut j = 1;
            while j < LIMBS {
                let s = t[j] as u64 + (u as u64) * (m[j] as u64) + carry;
                t[j - 1] = s as u32;
                carry = s >> 32;
                j += 1;
            }
            let s = t[LIMBS] as u64 + carry;
            t[LIMBS - 1] = s as u32;
            t[LIMBS] = t[LIMBS + 1] + (s >> 32) as u32;
            i += 1;
        }

        let mut limbs = [0u32; LIMBS];
        let mut k = 0;
        while k < LIMBS {
            limbs[k] = t[k];
            k += 1;
        }
        let res = Uint(limbs);
        let (reduced, borrow) = res.sbb(&self.m);
        Uint::select(&res, &reduced, (t[LIMBS] | (borrow ^ 1)) & 1)
    }

    /// Montgomery square
    #[inline]
    pub const fn square(&self, a: &Uint) -> Uint {
        self.mul(a, a)
    }

    /// Convert into Montgomery form, reducing any `x < 2²⁵⁶` mod m on the way
    #[inline]
    pub const fn to_mont(&self, x: &Uint) -> Uint {
        self.mul(x, &self.r2)
    }

    /// Convert out of Montgomery form
    #[inline]
    pub const fn from_mont(&self, x: &Uint) -> Uint {
        self.mul(x, &Uint::ONE)
    }

    /// `x mod m` for any `x < 2²⁵⁶`
    #[inline]
    pub const fn reduce(&self, x: &Uint) -> Uint {
        self.from_mont(&self.to_mont(x))
    }

    /// `base^exp` with `base` in Montgomery form
    ///
    /// Fixed square-and-multiply schedule over all 256 exponent bits.
    pub fn pow(&self, base: &Uint, exp: &Uint) -> Uint {
        let mut acc = self.r;
        let mut i = (LIMBS * 32) as u32;
        while i > 0 {
            i -= 1;
            acc = self.square(&acc);
            let prod = self.mul(&acc, base);
            acc = Uint::select(&acc, &prod, exp.bit(i));
        }
        acc
    }

    /// Multiplicative inverse of `a` (Montgomery form) via Fermat, m prime
    ///
    /// Maps 0 to 0.
    pub fn invert(&self, a: &Uint) -> Uint {
        let (exp, _) = self.m.sbb(&Uint::from_u32(2));
        self.pow(a, &exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigengine_params::traditional::ecdsa::{SECP160R1, SECP256R1};

    const P256: Modulus = Modulus::new(SECP256R1.p);
    const N160: Modulus = Modulus::new(SECP160R1.n);

    #[test]
    fn test_montgomery_constants() {
        // m · (−m⁻¹) ≡ −1 mod 2³²
        assert_eq!(P256.m.0[0].wrapping_mul(P256.inv), u32::MAX);
        assert_eq!(N160.m.0[0].wrapping_mul(N160.inv), u32::MAX);
        assert_eq!(P256.bits(), 256);
        assert_eq!(N160.bits(), 161);
        assert_eq!(P256.from_mont(&P256.one()), Uint::ONE);
        assert_eq!(N160.from_mont(&N160.one()), Uint::ONE);
    }

    #[test]
    fn test_mul_small_values() {
        for m in [&P256, &N160] {
            let a = m.to_mont(&Uint::from_u32(123_456_789));
            let b = m.to_mont(&Uint::from_u32(1000));
            let prod = m.from_mont(&m.mul(&a, &b));
            // 123456789 · 1000 = 0x1C_BE99_1A08
            assert_eq!(prod, Uint([0xBE99_1A08, 0x1C, 0, 0, 0, 0, 0, 0]));
        }
    }

    #[test]
    fn test_add_sub_wrap() {
        let (m_minus_1, _) = P256.m.sbb(&Uint::ONE);
        assert_eq!(P256.add(&m_minus_1, &Uint::ONE), Uint::ZERO);
        assert_eq!(P256.sub(&Uint::ZERO, &Uint::ONE), m_minus_1);
        assert_eq!(P256.neg(&Uint::ZERO), Uint::ZERO);
        assert_eq!(P256.add(&m_minus_1, &m_minus_1), P256.sub(&m_minus_1, &Uint::ONE));
    }

    #[test]
    fn test_reduce_wide_input() {
        // 2²⁵⁶ − 1 reduced mod the 161-bit order must land below it
        let all_ones = Uint([u32::MAX; LIMBS]);
        let r = N160.reduce(&all_ones);
        assert!(N160.contains(&r));
        // (2²⁵⁶ − 1) + 1 ≡ R mod n
        assert_eq!(N160.add(&r, &Uint::ONE), N160.r);
    }

    #[test]
    fn test_invert() {
        for m in [&P256, &N160] {
            let a = m.to_mont(&Uint::from_u32(0xDEAD_BEEF));
            let inv = m.invert(&a);
            assert_eq!(m.from_mont(&m.mul(&a, &inv)), Uint::ONE);
            assert_eq!(m.invert(&Uint::ZERO), Uint::ZERO);
        }
    }
}
