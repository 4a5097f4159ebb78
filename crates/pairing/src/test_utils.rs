//! Conversions to and from arkworks, which serves as the reference implementation
//! in tests.
use crate::{
    field::{Fp12, Fp6},
    AffinePoint, Fp, Fp2, G1Point, G2Point, U256,
};
use ark_ff::{BigInt, PrimeField};
use ark_std::rand::{rngs::StdRng, SeedableRng};

pub(crate) fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

pub(crate) fn fq(a: &ark_bn254::Fq) -> Fp {
    Fp::new(U256::from_limbs(a.into_bigint().0))
}

pub(crate) fn fq2(a: &ark_bn254::Fq2) -> Fp2 {
    Fp2::new(fq(&a.c0), fq(&a.c1))
}

pub(crate) fn fq6(a: &ark_bn254::Fq6) -> Fp6 {
    Fp6::new(fq2(&a.c0), fq2(&a.c1), fq2(&a.c2))
}

pub(crate) fn fq12(a: &ark_bn254::Fq12) -> Fp12 {
    Fp12::new(fq6(&a.c0), fq6(&a.c1))
}

pub(crate) fn to_fq(a: &Fp) -> ark_bn254::Fq {
    ark_bn254::Fq::from_bigint(BigInt::new(a.into_u256().into_limbs())).unwrap()
}

pub(crate) fn to_fq2(a: &Fp2) -> ark_bn254::Fq2 {
    ark_bn254::Fq2::new(to_fq(&a.c0), to_fq(&a.c1))
}

pub(crate) fn g1(p: &ark_bn254::G1Affine) -> G1Point {
    if p.infinity {
        AffinePoint::Infinity
    } else {
        AffinePoint::new(fq(&p.x), fq(&p.y))
    }
}

pub(crate) fn g2(p: &ark_bn254::G2Affine) -> G2Point {
    if p.infinity {
        AffinePoint::Infinity
    } else {
        AffinePoint::new(fq2(&p.x), fq2(&p.y))
    }
}

pub(crate) fn ark_g1(p: &G1Point) -> ark_bn254::G1Affine {
    match p {
        AffinePoint::Infinity => ark_bn254::G1Affine::identity(),
        AffinePoint::Finite { x, y } => ark_bn254::G1Affine::new_unchecked(to_fq(x), to_fq(y)),
    }
}

pub(crate) fn ark_g2(p: &G2Point) -> ark_bn254::G2Affine {
    match p {
        AffinePoint::Infinity => ark_bn254::G2Affine::identity(),
        AffinePoint::Finite { x, y } => {
            ark_bn254::G2Affine::new_unchecked(to_fq2(x), to_fq2(y))
        }
    }
}

/// Random scalar as a `U256` below the group order.
pub(crate) fn ark_scalar(rng: &mut StdRng) -> (ark_bn254::Fr, U256) {
    let k = <ark_bn254::Fr as ark_std::UniformRand>::rand(rng);
    (k, U256::from_limbs(k.into_bigint().0))
}
