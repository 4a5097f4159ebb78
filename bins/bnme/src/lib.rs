//! Command line interface to the BN254 pairing engine.
pub mod cmd;
