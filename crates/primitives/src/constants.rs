//! BN254 curve parameters.
use crate::{uint, U256};

/// Base field modulus `p`.
pub const P: U256 =
    uint!(0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47_U256);

/// Order `r` of the prime-order groups G1 and G2.
pub const R: U256 =
    uint!(0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001_U256);

/// `(p + 1) / 4`, the square root exponent. Valid since `p ≡ 3 (mod 4)`.
pub const P_PLUS_ONE_DIV_FOUR: U256 =
    uint!(0x0c19139cb84c680a6e14116da060561765e05aa45a1c72a34f082305b61f3f52_U256);

/// `(p - 1) / 2`. Square roots above this bound are the "odd half" of the field.
pub const P_MINUS_ONE_DIV_TWO: U256 =
    uint!(0x183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3_U256);

/// BN parameter `u` the curve is generated from.
pub const BN_X: u64 = 4965661367192848881;

/// Coefficient `b` of G1: `y^2 = x^3 + 3`.
pub const G1_B: U256 = uint!(3_U256);

/// G1 generator x-coordinate.
pub const G1_GENERATOR_X: U256 = uint!(1_U256);

/// G1 generator y-coordinate.
pub const G1_GENERATOR_Y: U256 = uint!(2_U256);

/// Real part of the sextic non-residue `ξ = 9 + i`.
pub const XI_C0: u64 = 9;

/// Real part of the twist coefficient `b' = 3 / (9 + i)`.
pub const G2_B_C0: U256 =
    uint!(0x2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5_U256);

/// Imaginary part of the twist coefficient `b' = 3 / (9 + i)`.
pub const G2_B_C1: U256 =
    uint!(0x009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2_U256);

/// G2 generator, real part of x.
pub const G2_GENERATOR_X_C0: U256 =
    uint!(0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed_U256);

/// G2 generator, imaginary part of x.
pub const G2_GENERATOR_X_C1: U256 =
    uint!(0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2_U256);

/// G2 generator, real part of y.
pub const G2_GENERATOR_Y_C0: U256 =
    uint!(0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa_U256);

/// G2 generator, imaginary part of y.
pub const G2_GENERATOR_Y_C1: U256 =
    uint!(0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b_U256);

/// Length of a serialized field element.
pub const FQ_LEN: usize = 32;

/// Length of a serialized scalar.
pub const SCALAR_LEN: usize = 32;

/// Length of a serialized `Fp2` element.
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// Length of an uncompressed G1 point.
pub const G1_LEN: usize = 2 * FQ_LEN;

/// Length of an uncompressed G2 point.
pub const G2_LEN: usize = 2 * FQ2_LEN;
