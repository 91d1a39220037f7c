/// Failure to decode a base-58 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty base58 string")]
    Empty,

    #[error("invalid base58 character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    #[error("base58 value does not fit in 64 bits")]
    Overflow,
}

/// Failure to cross the signed 64-bit boundary in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("negative value has no base58 id representation")]
    NegativeValue,

    #[error("value out of range for a signed 64-bit integer")]
    ExceedsSignedRange,
}
