//! G1: `y^2 = x^3 + 3` over `Fp`.
use crate::{AffinePoint, CurveConfig, CurveError, Field, Fp};
use primitives::{G1_B, G1_GENERATOR_X, G1_GENERATOR_Y};

/// Parameters of G1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G1Config;

impl CurveConfig for G1Config {
    type BaseField = Fp;

    const COEFF_B: Fp = Fp::from_u256_unchecked(G1_B);
    const GENERATOR_X: Fp = Fp::from_u256_unchecked(G1_GENERATOR_X);
    const GENERATOR_Y: Fp = Fp::from_u256_unchecked(G1_GENERATOR_Y);
}

/// Affine G1 point.
pub type G1Point = AffinePoint<G1Config>;

/// Returns a `y` with `y^2 = x^3 + 3`, failing with [`CurveError::NotOnCurve`] if `x`
/// is not the x-coordinate of any curve point.
///
/// Which of the two roots is returned is unspecified.
#[inline]
pub fn recover_y(x: &Fp) -> Result<Fp, CurveError> {
    (x.square() * *x + G1Config::COEFF_B)
        .sqrt()
        .ok_or(CurveError::NotOnCurve)
}

impl G1Point {
    /// The point with the given x-coordinate and the smaller of its two y-coordinates.
    pub fn from_x(x: Fp) -> Result<Self, CurveError> {
        let y = recover_y(&x)?;
        let y = if y.is_lexicographically_largest() { -y } else { y };
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn generator_is_on_curve() {
        assert!(G1Point::generator().is_on_curve());
        assert!(G1Point::Infinity.is_on_curve());
    }

    #[rstest]
    #[case::one_one(1, 1)]
    #[case::one_three(1, 3)]
    #[case::zero_zero(0, 0)]
    fn off_curve_points(#[case] x: u64, #[case] y: u64) {
        assert!(!G1Point::new(Fp::from(x), Fp::from(y)).is_on_curve());
        assert_eq!(
            G1Point::checked_new(Fp::from(x), Fp::from(y)),
            Err(CurveError::NotOnCurve)
        );
    }

    #[test]
    fn from_x_picks_smaller_root() {
        // y = 2 and p - 2 both lie over x = 1
        assert_eq!(G1Point::from_x(Fp::ONE), Ok(G1Point::generator()));

        let Some((x, y)) = G1Point::generator().double().coordinates() else {
            panic!("2G is finite");
        };
        let p = G1Point::from_x(x).unwrap();
        assert!(p == G1Point::new(x, y) || p == G1Point::new(x, -y));
        assert!(!p.coordinates().unwrap().1.is_lexicographically_largest());
    }

    #[rstest]
    #[case::zero(0)]
    #[case::four(4)]
    #[case::ten(10)]
    fn from_x_without_root(#[case] x: u64) {
        assert_eq!(G1Point::from_x(Fp::from(x)), Err(CurveError::NotOnCurve));
        assert_eq!(recover_y(&Fp::from(x)), Err(CurveError::NotOnCurve));
    }
}
