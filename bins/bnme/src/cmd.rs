//! `bnme` subcommands.
pub mod codec;
pub mod ec;
pub mod hash;

use clap::{Parser, Subcommand};
use precompile::PrecompileError;
use primitives::hex;

/// BN254 curve arithmetic, pairing checks and hashing from the command line.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true, version)]
pub struct MainCmd {
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Adds two G1 points given in the `ecAdd` byte format
    Add(ec::Cmd),
    /// Multiplies a G1 point by a scalar given in the `ecMul` byte format
    Mul(ec::Cmd),
    /// Runs a pairing check given in the `ecPairing` byte format
    Pair(ec::Cmd),
    /// Hashes a message to a G1 point
    Hash(hash::Cmd),
    /// Compresses a 64-byte G1 point to 32 bytes
    Compress(codec::Cmd),
    /// Decompresses a 32-byte G1 point to 64 bytes
    Decompress(codec::Cmd),
}

/// Errors reported by `bnme`.
#[derive(Debug, thiserror::Error)]
pub enum Errors {
    /// Argument is not valid hex
    #[error("Invalid hex input")]
    InvalidHex,
    /// Argument has the wrong length
    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Length given
        actual: usize,
    },
    /// Operation rejected the input
    #[error(transparent)]
    Precompile(#[from] PrecompileError),
}

impl MainCmd {
    /// Runs the selected subcommand and prints its result to stdout.
    pub fn run(&self) -> Result<(), Errors> {
        match &self.command {
            Command::Add(cmd) => cmd.run(ec::Operation::Add),
            Command::Mul(cmd) => cmd.run(ec::Operation::Mul),
            Command::Pair(cmd) => cmd.run(ec::Operation::Pair),
            Command::Hash(cmd) => cmd.run(),
            Command::Compress(cmd) => cmd.compress(),
            Command::Decompress(cmd) => cmd.decompress(),
        }
    }
}

/// Decodes a hex argument with or without the `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, Errors> {
    hex::decode(input.trim().trim_start_matches("0x")).map_err(|_| Errors::InvalidHex)
}

/// Decodes a hex argument of exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(input: &str) -> Result<[u8; N], Errors> {
    let bytes = decode_hex(input)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Errors::InvalidLength {
        expected: N,
        actual,
    })
}
