//! Pairing product check.
//!
//! The engine never hands out target group elements. It only answers whether
//! `e(P_1, Q_1) * ... * e(P_n, Q_n)` is the identity, which is all BLS
//! verification needs.
mod final_exp;
mod miller_loop;

use crate::{field::Field, CurveError, G1Point, G2Point};
use final_exp::final_exponentiation;
use miller_loop::multi_miller_loop;

/// A `(G1, G2)` input pair of the pairing product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingTerm {
    /// First argument
    pub g1: G1Point,
    /// Second argument
    pub g2: G2Point,
}

impl PairingTerm {
    /// Creates a new term.
    #[inline]
    pub const fn new(g1: G1Point, g2: G2Point) -> Self {
        Self { g1, g2 }
    }

    /// Checks that `g1` is on the curve and `g2` is on the twist and of order `r`.
    ///
    /// G1 has cofactor one, so the curve equation is enough there.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.g1.is_on_curve() || !self.g2.is_on_curve() || !self.g2.is_in_subgroup() {
            return Err(CurveError::InvalidPoint);
        }
        Ok(())
    }
}

impl From<(G1Point, G2Point)> for PairingTerm {
    #[inline]
    fn from((g1, g2): (G1Point, G2Point)) -> Self {
        Self::new(g1, g2)
    }
}

/// Returns `true` iff the product of the pairings of all terms is one.
///
/// Terms with an infinity component contribute one. An empty input is `true`.
///
/// # Errors
///
/// [`CurveError::InvalidPoint`] if any term fails [`PairingTerm::validate`]. Malformed
/// input is never reported as `false`.
pub fn check_pairing(terms: &[PairingTerm]) -> Result<bool, CurveError> {
    for term in terms {
        term.validate()?;
    }
    let f = multi_miller_loop(terms).ok_or(CurveError::InvalidPoint)?;
    Ok(final_exponentiation(&f).is_some_and(|f| f.is_one()))
}
