//! Hash-to-curve.
use super::{decode_hex, Errors};
use clap::Parser;
use precompile::bn256_g1;
use primitives::hex;
use tracing::debug;

/// Hashes a message to G1 with try-and-increment and prints `x` and `y`.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Message to hash
    message: String,
    /// Treat the message as hex-encoded bytes instead of UTF-8 text
    #[arg(long)]
    hex: bool,
}

impl Cmd {
    /// Runs the hash command.
    pub fn run(&self) -> Result<(), Errors> {
        let message = if self.hex {
            decode_hex(&self.message)?
        } else {
            self.message.as_bytes().to_vec()
        };
        debug!(len = message.len(), "hashing message");
        let [x, y] = bn256_g1::hash_to_try_and_increment(&message)?;
        println!("{}", hex::encode_prefixed(x.to_be_bytes::<32>()));
        println!("{}", hex::encode_prefixed(y.to_be_bytes::<32>()));
        Ok(())
    }
}
