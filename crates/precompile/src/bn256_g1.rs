//! G1 operations and pairing checks over 256-bit words.
//!
//! Coordinates are reduced modulo `p` and scalars modulo `r` on input. A point
//! whose two coordinates are zero is the point at infinity.
use crate::{bn256_g2::read_g2, PrecompileError, PrecompileResult};
use pairing::{CompressedPoint, CurveError, Field, Fp, G1Point, PairingTerm, Scalar};
use primitives::U256;
use std::vec::Vec;
use tracing::debug;

/// Words per pairing term: one G1 point and one G2 point.
pub const PAIR_WORDS: usize = 6;

/// Reads a G1 point, with `(0, 0)` after reduction as infinity. Not checked to be on
/// the curve.
#[inline]
pub(crate) fn read_g1(x: U256, y: U256) -> G1Point {
    let (x, y) = (Fp::new(x), Fp::new(y));
    if x.is_zero() && y.is_zero() {
        G1Point::Infinity
    } else {
        G1Point::new(x, y)
    }
}

/// Encodes a G1 point, with infinity as `(0, 0)`.
#[inline]
pub(crate) fn write_g1(point: &G1Point) -> [U256; 2] {
    match point.coordinates() {
        None => [U256::ZERO; 2],
        Some((x, y)) => [x.into_u256(), y.into_u256()],
    }
}

fn read_checked_g1(x: U256, y: U256) -> PrecompileResult<G1Point> {
    let point = read_g1(x, y);
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve.into());
    }
    Ok(point)
}

/// `[x1, y1] + [x2, y2]`.
pub fn add(input: &[U256; 4]) -> PrecompileResult<[U256; 2]> {
    let sum = read_checked_g1(input[0], input[1])
        .and_then(|p1| Ok(p1 + read_checked_g1(input[2], input[3])?))
        .inspect_err(|err| debug!(%err, "bn256 g1 add: rejected input"))?;
    Ok(write_g1(&sum))
}

/// `k * [x, y]` for input `[x, y, k]`.
pub fn multiply(input: &[U256; 3]) -> PrecompileResult<[U256; 2]> {
    let point = read_checked_g1(input[0], input[1])
        .inspect_err(|err| debug!(%err, "bn256 g1 multiply: rejected input"))?;
    Ok(write_g1(&(point * Scalar::new(input[2]))))
}

/// Returns `true` if `[x, y]` is on the curve or is `(0, 0)`.
pub fn is_on_curve(point: &[U256; 2]) -> bool {
    read_g1(point[0], point[1]).is_on_curve()
}

/// Compresses an on-curve point to 32 bytes.
pub fn to_compressed(point: &[U256; 2]) -> PrecompileResult<[u8; 32]> {
    let point = read_checked_g1(point[0], point[1])
        .inspect_err(|err| debug!(%err, "bn256 g1 compress: rejected input"))?;
    Ok(point.compress().into())
}

/// Decompresses 32 bytes into `[x, y]`.
pub fn from_compressed(bytes: &[u8; 32]) -> PrecompileResult<[U256; 2]> {
    let point = CompressedPoint(*bytes)
        .decompress()
        .inspect_err(|err| debug!(%err, "bn256 g1 decompress: rejected input"))?;
    Ok(write_g1(&point))
}

/// Hashes `message` to a G1 point with try-and-increment.
pub fn hash_to_try_and_increment(message: &[u8]) -> PrecompileResult<[U256; 2]> {
    let point = pairing::hash_to_curve(message)?;
    Ok(write_g1(&point))
}

/// Two-term pairing check `e(P1, Q1) * e(P2, Q2) == 1`.
///
/// Each term is `[x, y, x_im, x_re, y_im, y_re]`: the G1 point, then the G2 point
/// with the imaginary part of each coordinate first, as the EVM pairing precompile
/// expects.
pub fn check_pairing(input: &[U256; 12]) -> PrecompileResult<bool> {
    check_pairing_batch(input)
}

/// Pairing check over any number of terms, laid out as in [`check_pairing`].
///
/// # Errors
///
/// [`PrecompileError::Bn128PairLength`] if the input is not a multiple of
/// [`PAIR_WORDS`] words, [`CurveError::InvalidPoint`] if a point fails validation.
pub fn check_pairing_batch(input: &[U256]) -> PrecompileResult<bool> {
    if input.len() % PAIR_WORDS != 0 {
        debug!(len = input.len(), "bn256 pairing: input is not a whole number of terms");
        return Err(PrecompileError::Bn128PairLength);
    }
    let terms: Vec<PairingTerm> = input
        .chunks_exact(PAIR_WORDS)
        .map(|w| PairingTerm::new(read_g1(w[0], w[1]), read_g2(w[3], w[2], w[5], w[4])))
        .collect();
    pairing::check_pairing(&terms)
        .inspect_err(|err| debug!(%err, terms = terms.len(), "bn256 pairing: rejected input"))
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{uint, P};

    #[test]
    fn zero_words_are_infinity() {
        assert_eq!(read_g1(U256::ZERO, U256::ZERO), G1Point::Infinity);
        assert_eq!(write_g1(&G1Point::Infinity), [U256::ZERO; 2]);
        assert!(is_on_curve(&[U256::ZERO; 2]));
    }

    #[test]
    fn coordinates_are_reduced() {
        let one = uint!(1_U256);
        let two = uint!(2_U256);
        assert!(is_on_curve(&[P + one, two]));
        assert_eq!(add(&[P + one, two, U256::ZERO, U256::ZERO]), Ok([one, two]));
    }

    #[test]
    fn reduced_zero_is_infinity() {
        let one = uint!(1_U256);
        let two = uint!(2_U256);
        for zero in [[P, U256::ZERO], [U256::ZERO, P], [P, P]] {
            assert_eq!(read_g1(zero[0], zero[1]), G1Point::Infinity);
            assert!(is_on_curve(&zero));
            assert_eq!(add(&[zero[0], zero[1], one, two]), Ok([one, two]));
            assert_eq!(multiply(&[zero[0], zero[1], two]), Ok([U256::ZERO; 2]));
        }

        let g2 = [
            primitives::G2_GENERATOR_X_C1,
            primitives::G2_GENERATOR_X_C0,
            primitives::G2_GENERATOR_Y_C1,
            primitives::G2_GENERATOR_Y_C0,
        ];
        let term = |x: U256, y: U256| [x, y, g2[0], g2[1], g2[2], g2[3]];
        let mut input = term(one, two).to_vec();
        input.extend_from_slice(&term(P, U256::ZERO));
        assert_eq!(check_pairing_batch(&input), Ok(false));
        let zero_only = term(P, U256::ZERO);
        assert_eq!(check_pairing_batch(&zero_only), Ok(true));
    }

    #[test]
    fn generator_plus_negation_is_zero() {
        let one = uint!(1_U256);
        let two = uint!(2_U256);
        assert_eq!(add(&[one, two, one, P - two]), Ok([U256::ZERO; 2]));
    }

    #[test]
    fn off_curve_input() {
        let one = uint!(1_U256);
        assert_eq!(
            add(&[one, one, U256::ZERO, U256::ZERO]),
            Err(PrecompileError::Curve(CurveError::NotOnCurve))
        );
        assert_eq!(
            multiply(&[one, one, one]),
            Err(PrecompileError::Curve(CurveError::NotOnCurve))
        );
        assert_eq!(
            to_compressed(&[one, one]),
            Err(PrecompileError::Curve(CurveError::NotOnCurve))
        );
    }

    #[test]
    fn batch_length() {
        assert_eq!(check_pairing_batch(&[]), Ok(true));
        assert_eq!(
            check_pairing_batch(&[U256::ZERO; 5]),
            Err(PrecompileError::Bn128PairLength)
        );
        assert_eq!(check_pairing_batch(&[U256::ZERO; 6]), Ok(true));
    }

    #[test]
    fn compression_round_trip() {
        let point = multiply(&[uint!(1_U256), uint!(2_U256), uint!(12345_U256)]).unwrap();
        let compressed = to_compressed(&point).unwrap();
        assert_eq!(from_compressed(&compressed), Ok(point));
    }
}
