use super::{impl_assign_ops, Field, Fp2};
use core::ops::{Add, Mul, Neg, Sub};

/// Element `c0 + c1 * v + c2 * v^2` of `Fp6 = Fp2[v] / (v^3 - ξ)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Fp6 {
    pub(crate) c0: Fp2,
    pub(crate) c1: Fp2,
    pub(crate) c2: Fp2,
}

impl Fp6 {
    #[inline]
    pub(crate) const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    /// Multiplies by `v`.
    #[inline]
    pub(crate) fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }

    /// Multiplies every coefficient by an `Fp2` element.
    #[inline]
    pub(crate) fn mul_by_fp2(&self, k: Fp2) -> Self {
        Self::new(self.c0 * k, self.c1 * k, self.c2 * k)
    }

    /// Multiplies by the sparse element `b0 + b1 * v`.
    pub(crate) fn mul_by_01(&self, b0: Fp2, b1: Fp2) -> Self {
        let a_a = self.c0 * b0;
        let b_b = self.c1 * b1;

        let t1 = ((self.c1 + self.c2) * b1 - b_b).mul_by_nonresidue() + a_a;
        let t2 = (self.c0 + self.c1) * (b0 + b1) - a_a - b_b;
        let t3 = (self.c0 + self.c2) * b0 - a_a + b_b;

        Self::new(t1, t2, t3)
    }
}

impl Field for Fp6 {
    const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
    const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    fn inverse(&self) -> Option<Self> {
        let t0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let t1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let t2 = self.c1.square() - self.c0 * self.c2;

        let det = self.c0 * t0 + (self.c2 * t1 + self.c1 * t2).mul_by_nonresidue();
        let inv = det.inverse()?;
        Some(Self::new(t0 * inv, t1 * inv, t2 * inv))
    }
}

impl Add for Fp6 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl Sub for Fp6 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl Mul for Fp6 {
    type Output = Self;

    /// Karatsuba over the three coefficients, reducing `v^3` to `ξ`.
    fn mul(self, rhs: Self) -> Self {
        let a_a = self.c0 * rhs.c0;
        let b_b = self.c1 * rhs.c1;
        let c_c = self.c2 * rhs.c2;

        let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - b_b - c_c).mul_by_nonresidue() + a_a;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - a_a - b_b + c_c.mul_by_nonresidue();
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - a_a + b_b - c_c;

        Self::new(c0, c1, c2)
    }
}

impl Neg for Fp6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl_assign_ops!(Fp6);
