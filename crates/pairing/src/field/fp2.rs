use super::{impl_assign_ops, Field, Fp};
use core::ops::{Add, Mul, Neg, Sub};
use primitives::{U256, XI_C0};

/// Element `c0 + c1 * i` of `Fp2 = Fp[i] / (i^2 + 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Imaginary part
    pub c1: Fp,
}

impl Fp2 {
    /// Creates `c0 + c1 * i`.
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Builds an element from real and imaginary integers, each reduced mod `p`.
    #[inline]
    pub fn from_u256(c0: U256, c1: U256) -> Self {
        Self::new(Fp::new(c0), Fp::new(c1))
    }

    pub(crate) const fn from_u256_unchecked(c0: U256, c1: U256) -> Self {
        Self::new(Fp::from_u256_unchecked(c0), Fp::from_u256_unchecked(c1))
    }

    /// `c0 - c1 * i`, the image under the `p`-power Frobenius.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplies by the sextic non-residue `ξ = 9 + i`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        let nine = Fp::from(XI_C0);
        Self::new(nine * self.c0 - self.c1, nine * self.c1 + self.c0)
    }

    /// Multiplies both coefficients by a base field element.
    #[inline]
    pub fn scale(&self, k: Fp) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// `c0^2 + c1^2`, the norm down to `Fp`.
    #[inline]
    pub fn norm(&self) -> Fp {
        self.c0.square() + self.c1.square()
    }
}

impl From<Fp> for Fp2 {
    #[inline]
    fn from(c0: Fp) -> Self {
        Self::new(c0, Fp::ZERO)
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);
    const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    #[inline]
    fn inverse(&self) -> Option<Self> {
        // (a - bi) / (a^2 + b^2)
        let inv = self.norm().inverse()?;
        Some(self.conjugate().scale(inv))
    }

    #[inline]
    fn square(&self) -> Self {
        // (a + b)(a - b) + 2ab i
        let ab = self.c0 * self.c1;
        Self::new((self.c0 + self.c1) * (self.c0 - self.c1), ab.double())
    }
}

impl Add for Fp2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Mul for Fp2 {
    type Output = Self;

    /// Karatsuba: three base field multiplications.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(v0 - v1, c1)
    }
}

impl Neg for Fp2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl_assign_ops!(Fp2);
