//! Twist (G2) arithmetic over 256-bit words.
//!
//! Every Fp2 coordinate is a `(real, imaginary)` pair of words and `(0, 0, 0, 0)`
//! is the point at infinity. Note that [`crate::bn256_g1::check_pairing`] takes
//! G2 coordinates imaginary part first instead.
use crate::PrecompileResult;
use pairing::{CurveError, Field, Fp2, G2Point, Scalar};
use primitives::U256;
use tracing::debug;

/// Reads a twist point from `(re, im)` coordinate words, with all zeros after reduction
/// as infinity. Not checked to be on the twist.
#[inline]
pub(crate) fn read_g2(x_re: U256, x_im: U256, y_re: U256, y_im: U256) -> G2Point {
    let (x, y) = (Fp2::from_u256(x_re, x_im), Fp2::from_u256(y_re, y_im));
    if x.is_zero() && y.is_zero() {
        G2Point::Infinity
    } else {
        G2Point::new(x, y)
    }
}

#[inline]
pub(crate) fn write_g2(point: &G2Point) -> [U256; 4] {
    match point.coordinates() {
        None => [U256::ZERO; 4],
        Some((x, y)) => [
            x.c0.into_u256(),
            x.c1.into_u256(),
            y.c0.into_u256(),
            y.c1.into_u256(),
        ],
    }
}

fn read_checked_g2(words: &[U256]) -> PrecompileResult<G2Point> {
    let point = read_g2(words[0], words[1], words[2], words[3]);
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve.into());
    }
    Ok(point)
}

/// Sum of the twist points `input[0..4]` and `input[4..8]`.
pub fn ec_twist_add(input: &[U256; 8]) -> PrecompileResult<[U256; 4]> {
    let sum = read_checked_g2(&input[..4])
        .and_then(|q1| Ok(q1 + read_checked_g2(&input[4..])?))
        .inspect_err(|err| debug!(%err, "bn256 g2 add: rejected input"))?;
    Ok(write_g2(&sum))
}

/// `k * Q` for input `[k, x_re, x_im, y_re, y_im]`.
pub fn ec_twist_mul(input: &[U256; 5]) -> PrecompileResult<[U256; 4]> {
    let point = read_checked_g2(&input[1..])
        .inspect_err(|err| debug!(%err, "bn256 g2 multiply: rejected input"))?;
    Ok(write_g2(&(point * Scalar::new(input[0]))))
}

/// Returns `true` if the point is on the twist or is all zeros.
///
/// Membership in the order-`r` subgroup is not checked.
pub fn is_on_curve(point: &[U256; 4]) -> bool {
    read_g2(point[0], point[1], point[2], point[3]).is_on_curve()
}
