//! 32-byte G1 point compression.
//!
//! Layout: the big-endian x-coordinate fills the low 254 bits. In the first byte,
//! bit 7 is set when y is odd and bit 6 marks the point at infinity, in which
//! case every other bit must be zero.
use crate::{g1::recover_y, CurveError, Fp, G1Point, U256};

const Y_ODD_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;
const FLAGS_MASK: u8 = Y_ODD_FLAG | INFINITY_FLAG;

/// Compressed G1 point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompressedPoint(pub [u8; 32]);

impl CompressedPoint {
    /// Encoding of the point at infinity.
    pub const INFINITY: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = INFINITY_FLAG;
        Self(bytes)
    };

    /// Raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Decodes the point.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidEncoding`] for contradictory flags or an x-coordinate not
    /// below `p`, [`CurveError::NotOnCurve`] if no curve point has that x-coordinate.
    pub fn decompress(&self) -> Result<G1Point, CurveError> {
        let flags = self.0[0] & FLAGS_MASK;
        let mut x_bytes = self.0;
        x_bytes[0] &= !FLAGS_MASK;

        if flags & INFINITY_FLAG != 0 {
            if flags != INFINITY_FLAG || x_bytes != [0u8; 32] {
                return Err(CurveError::InvalidEncoding);
            }
            return Ok(G1Point::Infinity);
        }

        let x = Fp::from_canonical(U256::from_be_bytes(x_bytes))
            .ok_or(CurveError::InvalidEncoding)?;
        let mut y = recover_y(&x)?;
        let odd = flags & Y_ODD_FLAG != 0;
        if y.is_odd() != odd {
            y = -y;
            if y.is_odd() != odd {
                // y = 0 has no odd counterpart
                return Err(CurveError::InvalidEncoding);
            }
        }
        Ok(G1Point::new(x, y))
    }
}

impl From<[u8; 32]> for CompressedPoint {
    #[inline]
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<CompressedPoint> for [u8; 32] {
    #[inline]
    fn from(point: CompressedPoint) -> Self {
        point.0
    }
}

impl G1Point {
    /// Compresses the point to 32 bytes. Curve membership is not checked.
    pub fn compress(&self) -> CompressedPoint {
        let Some((x, y)) = self.coordinates() else {
            return CompressedPoint::INFINITY;
        };
        let mut bytes = x.to_be_bytes();
        if y.is_odd() {
            bytes[0] |= Y_ODD_FLAG;
        }
        CompressedPoint(bytes)
    }

    /// Inverse of [`G1Point::compress`]. See [`CompressedPoint::decompress`].
    #[inline]
    pub fn decompress(point: &CompressedPoint) -> Result<Self, CurveError> {
        point.decompress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::rng, Scalar};
    use ark_std::rand::Rng;
    use primitives::{hex, P};
    use rstest::rstest;

    #[test]
    fn generator_encoding() {
        let c = G1Point::generator().compress();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        // y = 2 is even
        assert_eq!(c.0, expected);
        assert_eq!(c.decompress(), Ok(G1Point::generator()));

        let neg = (-G1Point::generator()).compress();
        expected[0] = Y_ODD_FLAG;
        assert_eq!(neg.0, expected);
        assert_eq!(neg.decompress(), Ok(-G1Point::generator()));
    }

    #[test]
    fn infinity_round_trip() {
        assert_eq!(G1Point::Infinity.compress(), CompressedPoint::INFINITY);
        assert_eq!(
            G1Point::decompress(&CompressedPoint::INFINITY),
            Ok(G1Point::Infinity)
        );
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rng();
        for _ in 0..32 {
            let k = Scalar::from(rng.gen::<u64>());
            let p = G1Point::generator() * k;
            assert_eq!(p.compress().decompress(), Ok(p));
            assert_eq!((-p).compress().decompress(), Ok(-p));
        }
    }

    #[rstest]
    #[case::infinity_with_odd_flag("c000000000000000000000000000000000000000000000000000000000000000")]
    #[case::infinity_with_x("4000000000000000000000000000000000000000000000000000000000000001")]
    #[case::x_equal_modulus("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47")]
    #[case::x_above_modulus("3fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")]
    fn invalid_encoding(#[case] input: &str) {
        let bytes: [u8; 32] = hex::decode(input).unwrap().try_into().unwrap();
        assert_eq!(
            CompressedPoint(bytes).decompress(),
            Err(CurveError::InvalidEncoding)
        );
    }

    #[test]
    fn x_without_curve_point() {
        // 0^3 + 3 is not a square
        assert_eq!(
            CompressedPoint([0u8; 32]).decompress(),
            Err(CurveError::NotOnCurve)
        );
        let mut four = [0u8; 32];
        four[31] = 4;
        four[0] = Y_ODD_FLAG;
        assert_eq!(CompressedPoint(four).decompress(), Err(CurveError::NotOnCurve));
    }

    #[test]
    fn modulus_fits_in_254_bits() {
        assert!(P.bit_len() <= 254);
    }
}
