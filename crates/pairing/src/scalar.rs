//! Scalars of the prime-order groups.
use crate::U256;
use core::ops::Add;
use primitives::R;

/// Integer modulo the group order `r`.
///
/// Out-of-range inputs are folded into `[0, r)`, never rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(U256);

impl Scalar {
    /// Reduces `value` modulo `r`.
    #[inline]
    pub fn new(value: U256) -> Self {
        Self(value.reduce_mod(R))
    }

    /// Reads a big-endian integer and reduces it modulo `r`.
    #[inline]
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// The reduced integer value.
    #[inline]
    pub const fn into_u256(self) -> U256 {
        self.0
    }

    /// Returns `true` for zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Scalar {
    #[inline]
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(rhs.0, R))
    }
}
