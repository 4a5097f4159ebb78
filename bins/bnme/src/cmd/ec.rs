//! EVM precompile byte formats.
use super::{decode_hex, Errors};
use clap::Parser;
use precompile::{bn128, utilities::bool_to_bytes32};
use primitives::hex;
use tracing::debug;

/// EVM byte-format operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `ecAdd`
    Add,
    /// `ecMul`
    Mul,
    /// `ecPairing`
    Pair,
}

/// Runs an `ecAdd`, `ecMul` or `ecPairing` input and prints the 32 or 64 byte output.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded input bytes. Short `ecAdd` and `ecMul` input is right-padded with zeroes
    input: String,
}

impl Cmd {
    /// Runs `op` on the input.
    pub fn run(&self, op: Operation) -> Result<(), Errors> {
        let input = decode_hex(&self.input)?;
        debug!(?op, len = input.len(), "running");
        let output = match op {
            Operation::Add => bn128::run_add(&input)?.to_vec(),
            Operation::Mul => bn128::run_mul(&input)?.to_vec(),
            Operation::Pair => bool_to_bytes32(bn128::run_pair(&input)?).to_vec(),
        };
        println!("{}", hex::encode_prefixed(output));
        Ok(())
    }
}
