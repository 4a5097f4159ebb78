//! Field engine: `Fp`, its quadratic extension `Fp2` and the `Fp6` / `Fp12`
//! tower the pairing lives in.
//!
//! The tower is
//! * `Fp2  = Fp[i] / (i^2 + 1)`
//! * `Fp6  = Fp2[v] / (v^3 - ξ)`, `ξ = 9 + i`
//! * `Fp12 = Fp6[w] / (w^2 - v)`

/// Implements the `*Assign` operators in terms of the binary ones.
macro_rules! impl_assign_ops {
    ($t:ty) => {
        impl core::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}
pub(crate) use impl_assign_ops;

mod fp;
mod fp12;
mod fp2;
mod fp6;

pub use fp::Fp;
pub(crate) use fp12::Fp12;
pub use fp2::Fp2;
pub(crate) use fp6::Fp6;

use crate::CurveError;
use core::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};

/// Arithmetic shared by every level of the tower.
pub trait Field:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Returns `true` if this is the additive identity.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns `true` if this is the multiplicative identity.
    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// `2 * self`.
    #[inline]
    fn double(&self) -> Self {
        *self + *self
    }

    /// `self^2`.
    #[inline]
    fn square(&self) -> Self {
        *self * *self
    }

    /// `self / rhs`, failing with [`CurveError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    fn checked_div(&self, rhs: &Self) -> Result<Self, CurveError> {
        rhs.inverse()
            .map(|inv| *self * inv)
            .ok_or(CurveError::DivisionByZero)
    }

    /// `self^exp` where `exp` is given as little-endian 64-bit limbs.
    ///
    /// Square-and-multiply from the most significant set bit.
    fn pow(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        let mut started = false;
        for limb in exp.iter().rev() {
            for i in (0..64).rev() {
                if started {
                    res = res.square();
                }
                if (limb >> i) & 1 == 1 {
                    res = res * *self;
                    started = true;
                }
            }
        }
        res
    }
}
