//! Elliptic Curve Primitives
//!
//! Generic short Weierstrass arithmetic shared by every supported curve:
//! fixed-width integers, Montgomery-form modular arithmetic, Jacobian point
//! operations and a compile-time curve registry covering secp160r1,
//! secp192r1, secp224r1, secp256r1 and secp256k1.

pub mod curve;
pub mod modulus;
pub mod point;
pub mod uint;

pub use curve::{all, lookup, Curve};
pub use modulus::Modulus;
pub use point::{AffinePoint, ProjectivePoint};
pub use uint::Uint;
