//! EVM `ecAdd`, `ecMul` and `ecPairing` input formats (EIP-196 and EIP-197).
//!
//! Unlike the word interface, every 32-byte field element must be below `p`.
use crate::{
    utilities::{read_words, right_pad},
    PrecompileError, PrecompileResult,
};
use pairing::{Field, Fp, Fp2, G1Point, G2Point, PairingTerm, Scalar};
use primitives::{FQ_LEN, G1_LEN, G2_LEN, SCALAR_LEN};
use std::vec::Vec;
use tracing::debug;

/// Input length for the add operation.
/// `ADD` takes two uncompressed G1 points (64 bytes each).
pub const ADD_INPUT_LEN: usize = G1_LEN + G1_LEN;

/// Input length for the multiplication operation.
/// `MUL` takes an uncompressed G1 point (64 bytes) and scalar (32 bytes).
pub const MUL_INPUT_LEN: usize = G1_LEN + SCALAR_LEN;

/// Pair element length.
/// `PAIR` elements are composed of an uncompressed G1 point (64 bytes) and an uncompressed G2 point
/// (128 bytes).
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;

/// Reads a single `Fp` from the input slice.
///
/// # Panics
///
/// Panics if the input is not at least 32 bytes long.
#[inline]
pub fn read_fq(input: &[u8]) -> PrecompileResult<Fp> {
    let [word] = read_words::<1>(input);
    Fp::from_be_bytes(&word).ok_or(PrecompileError::Bn128FieldPointNotAMember)
}

/// Reads the `x` and `y` coordinates from the input slice and checks the curve equation.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
pub fn read_point(input: &[u8]) -> PrecompileResult<G1Point> {
    let px = read_fq(&input[..FQ_LEN])?;
    let py = read_fq(&input[FQ_LEN..G1_LEN])?;
    new_g1_point(px, py)
}

/// Creates a new `G1` point from the given `x` and `y` coordinates.
pub fn new_g1_point(px: Fp, py: Fp) -> PrecompileResult<G1Point> {
    if px.is_zero() && py.is_zero() {
        Ok(G1Point::Infinity)
    } else {
        Ok(G1Point::checked_new(px, py)?)
    }
}

/// Reads one pairing element. Validation is left to the pairing check.
fn read_pair_element(element: &[u8]) -> PrecompileResult<PairingTerm> {
    let read_fq_at = |n: usize| read_fq(&element[n * FQ_LEN..]);
    let (ax, ay) = (read_fq_at(0)?, read_fq_at(1)?);
    // imaginary part first
    let bx = Fp2::new(read_fq_at(3)?, read_fq_at(2)?);
    let by = Fp2::new(read_fq_at(5)?, read_fq_at(4)?);

    let a = if ax.is_zero() && ay.is_zero() {
        G1Point::Infinity
    } else {
        G1Point::new(ax, ay)
    };
    let b = if bx.is_zero() && by.is_zero() {
        G2Point::Infinity
    } else {
        G2Point::new(bx, by)
    };
    Ok(PairingTerm::new(a, b))
}

fn encode_point(point: &G1Point) -> [u8; G1_LEN] {
    let mut output = [0u8; G1_LEN];
    if let Some((x, y)) = point.coordinates() {
        output[..FQ_LEN].copy_from_slice(&x.to_be_bytes());
        output[FQ_LEN..].copy_from_slice(&y.to_be_bytes());
    }
    output
}

/// `ecAdd`: sum of two G1 points. Short input is right-padded with zeroes.
pub fn run_add(input: &[u8]) -> PrecompileResult<[u8; G1_LEN]> {
    let input = right_pad::<ADD_INPUT_LEN>(input);

    let p1 = read_point(&input[..G1_LEN]);
    let p2 = read_point(&input[G1_LEN..]);
    let (p1, p2) = p1
        .and_then(|p1| Ok((p1, p2?)))
        .inspect_err(|err| debug!(%err, "ecAdd: rejected input"))?;

    Ok(encode_point(&(p1 + p2)))
}

/// `ecMul`: G1 point times a 256-bit scalar. Short input is right-padded with zeroes.
pub fn run_mul(input: &[u8]) -> PrecompileResult<[u8; G1_LEN]> {
    let input = right_pad::<MUL_INPUT_LEN>(input);

    let p = read_point(&input[..G1_LEN])
        .inspect_err(|err| debug!(%err, "ecMul: rejected input"))?;
    let [k] = read_words::<1>(&input[G1_LEN..]);

    Ok(encode_point(&(p * Scalar::from_be_bytes(&k))))
}

/// `ecPairing`: checks that the product of the pairings of all elements is one.
///
/// # Errors
///
/// [`PrecompileError::Bn128PairLength`] if the input is not a multiple of
/// [`PAIR_ELEMENT_LEN`], [`PrecompileError::Bn128FieldPointNotAMember`] for a
/// non-canonical field element, and an invalid point error from the pairing check.
pub fn run_pair(input: &[u8]) -> PrecompileResult<bool> {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        debug!(len = input.len(), "ecPairing: input is not a whole number of elements");
        return Err(PrecompileError::Bn128PairLength);
    }

    let terms = input
        .chunks_exact(PAIR_ELEMENT_LEN)
        .map(read_pair_element)
        .collect::<PrecompileResult<Vec<_>>>()
        .inspect_err(|err| debug!(%err, "ecPairing: rejected input"))?;

    pairing::check_pairing(&terms)
        .inspect_err(|err| debug!(%err, elements = terms.len(), "ecPairing: rejected input"))
        .map_err(Into::into)
}
