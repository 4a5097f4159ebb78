//! # bn254-primitives
//!
//! Curve parameters of BN254 (alt_bn128) and the numeric types shared by the
//! pairing engine and the precompile interface.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;

pub use alloy_primitives::{self, hex, uint, Uint, U256};
pub use constants::*;
