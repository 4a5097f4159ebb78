use super::{impl_assign_ops, Field, Fp2, Fp6};
use core::ops::{Add, Mul, Neg, Sub};

/// Element `c0 + c1 * w` of `Fp12 = Fp6[w] / (w^2 - v)`. The pairing target group
/// lives in its multiplicative group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Fp12 {
    pub(crate) c0: Fp6,
    pub(crate) c1: Fp6,
}

impl Fp12 {
    #[inline]
    pub(crate) const fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
    }

    /// `c0 - c1 * w`, which equals `self^(p^6)`.
    #[inline]
    pub(crate) fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplies by a line value with only the `1`, `w` and `v * w` coefficients set:
    /// `c0 + (c3 + c4 * v) * w`.
    pub(crate) fn mul_by_034(&self, c0: Fp2, c3: Fp2, c4: Fp2) -> Self {
        let a = self.c0.mul_by_fp2(c0);
        let b = self.c1.mul_by_01(c3, c4);
        let e = (self.c0 + self.c1).mul_by_01(c0 + c3, c4);

        Self::new(b.mul_by_nonresidue() + a, e - a - b)
    }
}

impl Field for Fp12 {
    const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
    const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

    fn inverse(&self) -> Option<Self> {
        // (c0 - c1 w) / (c0^2 - v c1^2)
        let t = self.c0.square() - self.c1.square().mul_by_nonresidue();
        let inv = t.inverse()?;
        Some(Self::new(self.c0 * inv, -(self.c1 * inv)))
    }

    /// Complex squaring.
    fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_nonresidue())
            - ab
            - ab.mul_by_nonresidue();
        Self::new(c0, ab.double())
    }
}

impl Add for Fp12 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp12 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Mul for Fp12 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(v0 + v1.mul_by_nonresidue(), c1)
    }
}

impl Neg for Fp12 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl_assign_ops!(Fp12);
