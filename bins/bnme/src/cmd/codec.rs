//! Point compression.
use super::{decode_hex_array, Errors};
use clap::Parser;
use precompile::{bn256_g1, U256};
use primitives::hex;

/// Converts between the 64-byte and the 32-byte encoding of a G1 point.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded point: `x || y` to compress, 32 compressed bytes to decompress
    point: String,
}

impl Cmd {
    /// Compresses `x || y`.
    pub fn compress(&self) -> Result<(), Errors> {
        let bytes = decode_hex_array::<64>(&self.point)?;
        let point = [
            U256::from_be_slice(&bytes[..32]),
            U256::from_be_slice(&bytes[32..]),
        ];
        let compressed = bn256_g1::to_compressed(&point)?;
        println!("{}", hex::encode_prefixed(compressed));
        Ok(())
    }

    /// Decompresses 32 bytes into `x || y`.
    pub fn decompress(&self) -> Result<(), Errors> {
        let bytes = decode_hex_array::<32>(&self.point)?;
        let [x, y] = bn256_g1::from_compressed(&bytes)?;
        let mut output = [0u8; 64];
        output[..32].copy_from_slice(&x.to_be_bytes::<32>());
        output[32..].copy_from_slice(&y.to_be_bytes::<32>());
        println!("{}", hex::encode_prefixed(output));
        Ok(())
    }
}
