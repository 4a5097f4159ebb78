//! Try-and-increment hashing of arbitrary bytes onto G1.
use crate::{CurveError, Fp, G1Point, U256};
use sha2::{Digest, Sha256};

/// Number of counter values tried before giving up.
pub const MAX_ATTEMPTS: usize = 256;

/// Hashes `message` to a point of G1.
///
/// For each one-byte counter `c = 0, 1, ..., 255` the candidate is
/// `x = SHA-256(message || c) mod p`. The first `x` with `x^3 + 3` a square wins,
/// paired with the smaller of its two y-coordinates. The output is never infinity.
///
/// # Errors
///
/// [`CurveError::HashToCurveExhausted`] if no counter value hits the curve.
pub fn hash_to_curve(message: &[u8]) -> Result<G1Point, CurveError> {
    try_and_increment(message, MAX_ATTEMPTS)
}

fn try_and_increment(message: &[u8], attempts: usize) -> Result<G1Point, CurveError> {
    for counter in (0..=u8::MAX).take(attempts) {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(message)
            .chain_update([counter])
            .finalize()
            .into();
        let x = Fp::new(U256::from_be_bytes(digest));
        if let Ok(point) = G1Point::from_x(x) {
            return Ok(point);
        }
    }
    Err(CurveError::HashToCurveExhausted)
}
