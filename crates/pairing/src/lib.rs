//! # bn254-pairing
//!
//! Arithmetic over the BN254 (alt_bn128) curve: the `Fp` / `Fp2` fields, the
//! G1 and G2 groups, point compression, try-and-increment hashing to G1 and
//! the pairing product check used by BLS-style signature verification.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod compressed;
pub mod curve;
pub mod error;
pub mod field;
pub mod g1;
pub mod g2;
pub mod hash_to_curve;
pub mod pairing;
pub mod scalar;

#[cfg(test)]
pub(crate) mod test_utils;

pub use compressed::CompressedPoint;
pub use curve::{AffinePoint, CurveConfig};
pub use error::CurveError;
pub use field::{Field, Fp, Fp2};
pub use g1::{G1Config, G1Point};
pub use g2::{G2Config, G2Point};
pub use hash_to_curve::hash_to_curve;
pub use pairing::{check_pairing, PairingTerm};
pub use primitives::U256;
pub use scalar::Scalar;
