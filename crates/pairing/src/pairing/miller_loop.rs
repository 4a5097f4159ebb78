use super::PairingTerm;
use crate::{
    field::{Field, Fp12},
    Fp, Fp2,
};
use primitives::BN_X;
use std::vec::Vec;

/// Ate loop parameter `6u^2`, the trace of Frobenius minus one.
pub(crate) const ATE_LOOP_COUNT: u128 = 6 * (BN_X as u128) * (BN_X as u128);

/// Coefficients of a line evaluated at a G1 point, in the sparse shape accepted by
/// [`Fp12::mul_by_034`].
#[derive(Clone, Copy, Debug)]
struct Line {
    c0: Fp2,
    c3: Fp2,
    c4: Fp2,
}

/// One factor of the product: a G1 point and the running multiple `T` of its G2 point.
#[derive(Clone, Copy, Debug)]
struct MillerTerm {
    p: (Fp, Fp),
    q: (Fp2, Fp2),
    t: (Fp2, Fp2),
}

impl MillerTerm {
    /// Line with slope `lambda` through `T`, evaluated at `P` through the untwist
    /// `(x, y) -> (x w^2, y w^3)`:
    /// `yP - lambda xP w + (lambda xT - yT) w^3`.
    ///
    /// The vertical part of the Miller function lands in `Fp6` and is removed by the
    /// final exponentiation, so it is never computed.
    #[inline]
    fn line(&self, lambda: Fp2) -> Line {
        let (px, py) = self.p;
        let (tx, ty) = self.t;
        Line {
            c0: Fp2::from(py),
            c3: -lambda.scale(px),
            c4: lambda * tx - ty,
        }
    }

    /// Tangent at `T`, then `T <- 2T`.
    fn doubling_step(&mut self) -> Option<Line> {
        let (tx, ty) = self.t;
        let xx = tx.square();
        let lambda = (xx.double() + xx) * ty.double().inverse()?;
        let line = self.line(lambda);
        let x3 = lambda.square() - tx.double();
        self.t = (x3, lambda * (tx - x3) - ty);
        Some(line)
    }

    /// Chord through `T` and `Q`, then `T <- T + Q`.
    fn addition_step(&mut self) -> Option<Line> {
        let (tx, ty) = self.t;
        let (qx, qy) = self.q;
        let lambda = (qy - ty) * (qx - tx).inverse()?;
        let line = self.line(lambda);
        let x3 = lambda.square() - tx - qx;
        self.t = (x3, lambda * (tx - x3) - ty);
        Some(line)
    }
}

/// Shared accumulator of a multi-Miller loop. Every term squares the same `f`, so
/// the cost of the squarings is paid once for the whole product.
#[derive(Clone, Debug)]
pub(crate) struct MillerAccumulator {
    f: Fp12,
    terms: Vec<MillerTerm>,
}

impl MillerAccumulator {
    /// Starts the loop at `f = 1`, `T = Q`. Terms with an infinity component
    /// contribute a factor of one and are left out.
    pub(crate) fn new(terms: &[PairingTerm]) -> Self {
        let terms = terms
            .iter()
            .filter_map(|term| {
                let p = term.g1.coordinates()?;
                let q = term.g2.coordinates()?;
                Some(MillerTerm { p, q, t: q })
            })
            .collect();
        Self {
            f: Fp12::ONE,
            terms,
        }
    }

    /// Processes one bit of the loop parameter.
    ///
    /// Returns `None` if a slope is undefined, which cannot happen for points of order `r`.
    pub(crate) fn step(mut self, bit: bool) -> Option<Self> {
        self.f = self.f.square();
        for term in self.terms.iter_mut() {
            let line = term.doubling_step()?;
            self.f = self.f.mul_by_034(line.c0, line.c3, line.c4);
            if bit {
                let line = term.addition_step()?;
                self.f = self.f.mul_by_034(line.c0, line.c3, line.c4);
            }
        }
        Some(self)
    }

    pub(crate) fn finish(self) -> Fp12 {
        self.f
    }
}

/// Bits of [`ATE_LOOP_COUNT`] below the leading one, most significant first.
fn loop_bits() -> impl Iterator<Item = bool> {
    let len = u128::BITS - ATE_LOOP_COUNT.leading_zeros();
    (0..len - 1).rev().map(|i| (ATE_LOOP_COUNT >> i) & 1 == 1)
}

/// Product of the ate Miller functions `f_{6u^2, Q}(P)` over all terms.
pub(crate) fn multi_miller_loop(terms: &[PairingTerm]) -> Option<Fp12> {
    loop_bits()
        .try_fold(MillerAccumulator::new(terms), MillerAccumulator::step)
        .map(MillerAccumulator::finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{G1Point, G2Point, Scalar};

    #[test]
    fn loop_count_fits() {
        assert_eq!(ATE_LOOP_COUNT % 6, 0);
        assert_eq!(loop_bits().count(), 126);
    }

    #[test]
    fn empty_and_infinity_terms_give_one() {
        assert_eq!(multi_miller_loop(&[]), Some(Fp12::ONE));
        let terms = [
            PairingTerm::new(G1Point::Infinity, G2Point::generator()),
            PairingTerm::new(G1Point::generator(), G2Point::Infinity),
        ];
        assert_eq!(multi_miller_loop(&terms), Some(Fp12::ONE));
    }

    #[test]
    fn product_of_terms() {
        let a = PairingTerm::new(G1Point::generator(), G2Point::generator());
        let b = PairingTerm::new(
            G1Point::generator() * Scalar::from(3u64),
            G2Point::generator(),
        );
        let fa = multi_miller_loop(&[a]).unwrap();
        let fb = multi_miller_loop(&[b]).unwrap();
        assert_eq!(multi_miller_loop(&[a, b]), Some(fa * fb));
        assert_eq!(multi_miller_loop(&[b, a]), Some(fa * fb));
    }
}
