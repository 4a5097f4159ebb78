use super::{impl_assign_ops, Field};
use core::ops::{Add, Mul, Neg, Sub};
use primitives::{P, P_MINUS_ONE_DIV_TWO, P_PLUS_ONE_DIV_FOUR, U256};

/// Element of the BN254 base field, always reduced into `[0, p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fp(U256);

impl Fp {
    /// Reduces `value` modulo `p`.
    #[inline]
    pub fn new(value: U256) -> Self {
        Self(value.reduce_mod(P))
    }

    /// Returns `None` if `value` is not below `p`.
    #[inline]
    pub fn from_canonical(value: U256) -> Option<Self> {
        (value < P).then_some(Self(value))
    }

    /// Wraps a value the caller guarantees to be below `p`.
    #[inline]
    pub(crate) const fn from_u256_unchecked(value: U256) -> Self {
        Self(value)
    }

    /// Reads a big-endian, canonical field element.
    #[inline]
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical(U256::from_be_bytes(*bytes))
    }

    /// Big-endian encoding.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// The canonical integer representative.
    #[inline]
    pub const fn into_u256(self) -> U256 {
        self.0
    }

    /// Parity of the canonical representative.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Returns `true` if the element is above `(p - 1) / 2`.
    #[inline]
    pub fn is_lexicographically_largest(&self) -> bool {
        self.0 > P_MINUS_ONE_DIV_TWO
    }

    /// `self^exp`.
    #[inline]
    pub fn pow_u256(&self, exp: &U256) -> Self {
        Self(self.0.pow_mod(*exp, P))
    }

    /// Square root, if one exists.
    ///
    /// Computed as `self^((p + 1) / 4)` and checked by squaring. The result
    /// is one of the two roots, not necessarily the smaller one.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_u256(&P_PLUS_ONE_DIV_FOUR);
        (root.square() == *self).then_some(root)
    }
}

impl From<u64> for Fp {
    #[inline]
    fn from(value: u64) -> Self {
        // every u64 is below p
        Self(U256::from(value))
    }
}

impl Field for Fp {
    const ZERO: Self = Self(U256::ZERO);
    const ONE: Self = Self(U256::from_limbs([1, 0, 0, 0]));

    #[inline]
    fn inverse(&self) -> Option<Self> {
        self.0.inv_mod(P).map(Self)
    }
}

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(rhs.0, P))
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.0.overflowing_sub(rhs.0);
        if borrow {
            Self(diff.wrapping_add(P))
        } else {
            Self(diff)
        }
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul_mod(rhs.0, P))
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0.is_zero() {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl_assign_ops!(Fp);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fq, rng};
    use ark_ff::{Field as _, UniformRand};
    use rstest::rstest;

    #[test]
    fn new_reduces() {
        assert_eq!(Fp::new(P), Fp::ZERO);
        assert_eq!(Fp::new(P + U256::from(5)), Fp::from(5u64));
        assert_eq!(Fp::new(U256::MAX), Fp::new(U256::MAX.reduce_mod(P)));
    }

    #[test]
    fn from_canonical_rejects_modulus() {
        assert_eq!(Fp::from_canonical(P), None);
        assert_eq!(Fp::from_canonical(P - U256::from(1)), Some(-Fp::ONE));
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::one(1, 1)]
    #[case::four(4, 2)]
    #[case::nine(9, 3)]
    fn sqrt_of_small_squares(#[case] value: u64, #[case] root: u64) {
        let r = Fp::from(value).sqrt().unwrap();
        let expected = Fp::from(root);
        assert!(r == expected || r == -expected);
    }

    #[test]
    fn minus_one_has_no_root() {
        // p = 3 mod 4
        assert_eq!((-Fp::ONE).sqrt(), None);
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(Fp::ZERO - Fp::ONE, -Fp::ONE);
        assert_eq!((Fp::ZERO - Fp::ONE).into_u256(), P - U256::from(1));
    }

    #[test]
    fn matches_arkworks() {
        let mut rng = rng();
        for _ in 0..64 {
            let a = ark_bn254::Fq::rand(&mut rng);
            let b = ark_bn254::Fq::rand(&mut rng);
            let (x, y) = (fq(&a), fq(&b));
            assert_eq!(x + y, fq(&(a + b)));
            assert_eq!(x - y, fq(&(a - b)));
            assert_eq!(x * y, fq(&(a * b)));
            assert_eq!(-x, fq(&(-a)));
            assert_eq!(x.inverse(), a.inverse().map(|i| fq(&i)));
            assert_eq!(x.sqrt().map(|r| r.square()), a.sqrt().map(|r| fq(&r.square())));
        }
    }
}
