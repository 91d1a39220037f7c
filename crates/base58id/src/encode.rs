use crate::alphabet::{ALPHABET, ENCODED_LEN, ZERO};
use crate::b58_str::Base58Str;

/// Encodes a value as 11 base-58 digits, most significant first,
/// left-padded with the zero symbol `'1'`. Total for all of `u64`.
pub fn encode64(mut value: u64) -> Base58Str {
    let mut buf = [ZERO; ENCODED_LEN];
    let mut i = ENCODED_LEN;

    // at most 11 iterations, since 58^11 > u64::MAX
    while value != 0 {
        i -= 1;
        buf[i] = ALPHABET[(value % 58) as usize];
        value /= 58;
    }

    Base58Str(buf)
}
