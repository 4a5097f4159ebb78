use crate::field::{Field, Fp12};
use primitives::{Uint, P, R, U256};

type U1536 = Uint<1536, 24>;

/// `(p^6 + 1) / r` as little-endian limbs.
fn hard_part_exponent() -> [u64; 24] {
    let widen = |x: U256| {
        let mut limbs = [0u64; 24];
        limbs[..4].copy_from_slice(x.as_limbs());
        U1536::from_limbs(limbs)
    };
    let p = widen(P);
    let p3 = p * p * p;
    let exp = (p3 * p3 + U1536::from(1u64)) / widen(R);
    exp.into_limbs()
}

/// Raises a Miller loop output to `(p^12 - 1) / r`.
///
/// The easy part `f^(p^6 - 1)` is a conjugation and an inversion. What remains
/// is the exponent `(p^6 + 1) / r`. `None` if `f` is zero.
pub(crate) fn final_exponentiation(f: &Fp12) -> Option<Fp12> {
    let f = f.conjugate() * f.inverse()?;
    Some(f.pow(&hard_part_exponent()))
}
