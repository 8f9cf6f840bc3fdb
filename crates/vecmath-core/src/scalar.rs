//! Scalar component types.
//!
//! [`Scalar`] abstracts the two floating-point widths vectors are built
//! from. It carries exactly what the generic vector code needs: constants,
//! the few transcendental functions used by geometry, and widening to `f64`
//! for flat-buffer export.
//!
//! # Supported Types
//!
//! | Type | Suffix | Use |
//! |------|--------|-----|
//! | `f32` | `f` | Vertex data, GPU-facing values |
//! | `f64` | `d` | Transforms, simulation state |
//!
//! # Example
//!
//! ```rust
//! use vecmath_core::Scalar;
//!
//! fn hypot<T: Scalar>(a: T, b: T) -> T {
//!     (a * a + b * b).sqrt()
//! }
//!
//! assert_eq!(hypot(3.0f64, 4.0), 5.0);
//! assert_eq!(<f32 as Scalar>::SUFFIX, "f");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point component type for vectors.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Short type tag used in type labels (`Vector3d`, `Vector3f`).
    const SUFFIX: &'static str;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Arc cosine, in radians.
    fn acos(self) -> Self;

    /// Widens (or passes through) to `f64`.
    fn to_f64(self) -> f64;

    /// Converts from `f64`, rounding for narrower types.
    fn from_f64(v: f64) -> Self;

    /// Raw IEEE-754 bit pattern, zero-extended to 64 bits.
    ///
    /// Used for hashing; `0.0` and `-0.0` hash differently.
    fn to_bits_u64(self) -> u64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const SUFFIX: &'static str = "f";

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn acos(self) -> Self {
        f32::acos(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits() as u64
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const SUFFIX: &'static str = "d";

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn acos(self) -> Self {
        f64::acos(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constants() {
        assert_eq!(<f32 as Scalar>::ZERO, 0.0);
        assert_eq!(<f64 as Scalar>::ONE, 1.0);
        assert_eq!(<f32 as Scalar>::SUFFIX, "f");
        assert_eq!(<f64 as Scalar>::SUFFIX, "d");
    }

    #[test]
    fn test_widening() {
        assert_abs_diff_eq!(Scalar::to_f64(0.1f32), 0.1, epsilon = 1e-7);
        assert_eq!(<f32 as Scalar>::from_f64(2.5), 2.5f32);
    }

    #[test]
    fn test_transcendental() {
        assert_eq!(Scalar::sqrt(16.0f64), 4.0);
        assert_abs_diff_eq!(Scalar::acos(-1.0f64), std::f64::consts::PI, epsilon = 1e-12);
        assert!(Scalar::acos(2.0f32).is_nan());
    }

    #[test]
    fn test_bits_distinguish_signed_zero() {
        assert_ne!(0.0f64.to_bits_u64(), (-0.0f64).to_bits_u64());
        assert_eq!(1.0f32.to_bits_u64(), 0x3f80_0000);
    }
}
