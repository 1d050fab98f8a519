//! Fixed-width 256-bit unsigned integers
//!
//! Eight little-endian 32-bit limbs. Every curve handled by the engine has a
//! field prime and group order below 2²⁵⁶, so one width serves all of them;
//! smaller values simply leave the top limbs zero.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Number of 32-bit limbs (8 × 32 = 256 bits)
pub const LIMBS: usize = 8;

/// Maximum encoded width in bytes
pub const BYTES: usize = LIMBS * 4;

/// 256-bit unsigned integer, little-endian limbs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Uint(pub(crate) [u32; LIMBS]);

impl Uint {
    /// The value 0
    pub const ZERO: Self = Uint([0; LIMBS]);

    /// The value 1
    pub const ONE: Self = Uint([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Build from a small literal
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = n;
        Uint(limbs)
    }

    /// Parse big-endian bytes; `bytes` must be at most [`BYTES`] long
    pub const fn from_be_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= BYTES);
        let mut limbs = [0u32; LIMBS];
        let mut i = 0;
        while i < bytes.len() {
            let byte = bytes[bytes.len() - 1 - i] as u32;
            limbs[i / 4] |= byte << ((i % 4) * 8);
            i += 1;
        }
        Uint(limbs)
    }

    /// Write the low `out.len()` bytes big-endian; `out` must be at most [`BYTES`] long
    pub fn write_be(&self, out: &mut [u8]) {
        let len = out.len();
        for (i, byte) in out.iter_mut().enumerate() {
            let pos = len - 1 - i;
            *byte = (self.0[pos / 4] >> ((pos % 4) * 8)) as u8;
        }
    }

    /// Add with carry out: `(self + rhs) mod 2²⁵⁶, carry`
    #[inline]
    pub const fn adc(&self, rhs: &Self) -> (Self, u32) {
        let mut out = [0u32; LIMBS];
        let mut carry = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let t = self.0[i] as u64 + rhs.0[i] as u64 + carry;
            out[i] = t as u32;
            carry = t >> 32;
            i += 1;
        }
        (Uint(out), carry as u32)
    }

    /// Subtract with borrow out: `(self - rhs) mod 2²⁵⁶, borrow` where borrow is 0 or 1
    #[inline]
    pub const fn sbb(&self, rhs: &Self) -> (Self, u32) {
        let mut out = [0u32; LIMBS];
        let mut borrow = 0u64;
        let mut i = 0;
        while i < LIMBS {
            let t = (self.0[i] as u64)
                .wrapping_sub(rhs.0[i] as u64)
                .wrapping_sub(borrow);
            out[i] = t as u32;
            borrow = (t >> 63) & 1;
            i += 1;
        }
        (Uint(out), borrow as u32)
    }

    /// Branch-free select: `a` when `flag == 0`, `b` when `flag == 1`
    #[inline]
    pub const fn select(a: &Self, b: &Self, flag: u32) -> Self {
        let mask = 0u32.wrapping_sub(flag & 1);
        let mut out = [0u32; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            out[i] = (a.0[i] & !mask) | (b.0[i] & mask);
            i += 1;
        }
        Uint(out)
    }

    /// `self < rhs`, branch-free on the limbs
    #[inline]
    pub const fn lt(&self, rhs: &Self) -> bool {
        let (_, borrow) = self.sbb(rhs);
        borrow == 1
    }

    /// Is the value zero?
    pub const fn is_zero(&self) -> bool {
        let mut acc = 0u32;
        let mut i = 0;
        while i < LIMBS {
            acc |= self.0[i];
            i += 1;
        }
        acc == 0
    }

    /// Bit `i` (0 = least significant) as 0 or 1
    #[inline]
    pub const fn bit(&self, i: u32) -> u32 {
        (self.0[(i / 32) as usize] >> (i % 32)) & 1
    }

    /// Position of the highest set bit plus one; 0 for zero
    ///
    /// Variable-time; used on public parameters only.
    pub const fn bits(&self) -> u32 {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return (i as u32) * 32 + (32 - self.0[i].leading_zeros());
            }
        }
        0
    }

    /// Logical right shift by `shift < 256` bits
    pub const fn shr(&self, shift: u32) -> Self {
        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;
        let mut out = [0u32; LIMBS];
        let mut i = 0;
        while i + limb_shift < LIMBS {
            let lo = self.0[i + limb_shift] >> bit_shift;
            let hi = if bit_shift != 0 && i + limb_shift + 1 < LIMBS {
                self.0[i + limb_shift + 1] << (32 - bit_shift)
            } else {
                0
            };
            out[i] = lo | hi;
            i += 1;
        }
        Uint(out)
    }
}

impl ConditionallySelectable for Uint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Uint::select(a, b, choice.unwrap_u8() as u32)
    }
}

impl ConstantTimeEq for Uint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}
