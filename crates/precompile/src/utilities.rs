//! Input padding and output encoding helpers.
use std::borrow::Cow;

/// Right-pads the given slice with zeroes until `LEN`.
///
/// Returns the first `LEN` bytes if it does not need padding.
#[inline]
pub fn right_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    if let Some(data) = data.first_chunk::<LEN>() {
        Cow::Borrowed(data)
    } else {
        let mut padded = [0; LEN];
        padded[..data.len()].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

/// Splits `N * 32` bytes into `N` big-endian words.
#[inline]
pub fn read_words<const N: usize>(data: &[u8]) -> [[u8; 32]; N] {
    core::array::from_fn(|i| {
        let mut word = [0u8; 32];
        word.copy_from_slice(&data[i * 32..(i + 1) * 32]);
        word
    })
}

/// Encodes a boolean as a left-padded 32-byte word.
#[inline]
pub const fn bool_to_bytes32(value: bool) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[31] = value as u8;
    word
}
