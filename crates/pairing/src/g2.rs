//! G2: the sextic twist `y^2 = x^3 + 3 / (9 + i)` over `Fp2`.
use crate::{AffinePoint, CurveConfig, Fp2};
use primitives::{
    G2_B_C0, G2_B_C1, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1, G2_GENERATOR_Y_C0,
    G2_GENERATOR_Y_C1, R,
};

/// Parameters of G2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G2Config;

impl CurveConfig for G2Config {
    type BaseField = Fp2;

    const COEFF_B: Fp2 = Fp2::from_u256_unchecked(G2_B_C0, G2_B_C1);
    const GENERATOR_X: Fp2 = Fp2::from_u256_unchecked(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
    const GENERATOR_Y: Fp2 = Fp2::from_u256_unchecked(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);
}

/// Affine G2 point.
pub type G2Point = AffinePoint<G2Config>;

impl G2Point {
    /// Checks that the point lies in the order-`r` subgroup by testing `[r] Q = O`.
    ///
    /// The twist has a large cofactor, so being on the curve is not enough for
    /// pairing inputs.
    pub fn is_in_subgroup(&self) -> bool {
        self.mul_bigint(&R).is_infinity()
    }
}
