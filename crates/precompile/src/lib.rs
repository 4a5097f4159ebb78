//! # bn254-precompile
//!
//! External interfaces of the BN254 pairing engine:
//! * [`bn256_g1`] and [`bn256_g2`] take and return 256-bit words, the way
//!   on-chain BLS libraries do.
//! * [`bn128`] runs the EVM `ecAdd`, `ecMul` and `ecPairing` byte formats.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bn128;
pub mod bn256_g1;
pub mod bn256_g2;
pub mod interface;
pub mod utilities;

pub use interface::*;
pub use primitives::U256;
pub use pairing::CurveError;
