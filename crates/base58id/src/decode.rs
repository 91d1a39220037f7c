use crate::alphabet;
use crate::error::DecodeError;

/// Decodes a base-58 string of any length. Leading zero symbols carry no
/// magnitude, so padded input is fine; values past `u64::MAX` are an
/// error, never a silent wrap.
pub fn decode64(text: &str) -> Result<u64, DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut acc: u64 = 0;

    for (position, &byte) in text.as_bytes().iter().enumerate() {
        let digit = match alphabet::value_of(byte) {
            Some(digit) => digit as u64,
            None => return Err(DecodeError::InvalidCharacter { byte, position }),
        };

        acc = match acc.checked_mul(58).and_then(|acc| acc.checked_add(digit)) {
            Some(acc) => acc,
            None => return Err(DecodeError::Overflow),
        };
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode64;

    #[test]
    fn test_round_trip() {
        let values = [0, 1, 57, 58, 12345, u32::MAX as u64, 1 << 63, u64::MAX];

        for v in values {
            assert_eq!(decode64(encode64(v).as_ref()), Ok(v));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode64(""), Err(DecodeError::Empty));
    }

    #[test]
    fn test_ambiguous_glyphs_rejected() {
        for s in ["0", "O", "I", "l"] {
            assert_eq!(
                decode64(s),
                Err(DecodeError::InvalidCharacter {
                    byte: s.as_bytes()[0],
                    position: 0,
                })
            );
        }
    }

    #[test]
    fn test_invalid_character_position() {
        assert_eq!(
            decode64("11111O11111"),
            Err(DecodeError::InvalidCharacter { byte: b'O', position: 5 })
        );

        // multi-byte characters fail on their first byte
        assert!(matches!(
            decode64("11é11"),
            Err(DecodeError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_leading_pad_is_magnitude_free() {
        assert_eq!(decode64("1"), Ok(0));
        assert_eq!(decode64("11111111111"), Ok(0));
        assert_eq!(decode64(&"1".repeat(40)), Ok(0));

        assert_eq!(decode64("4fr"), Ok(12345));
        assert_eq!(decode64("111111114fr"), Ok(12345));
        assert_eq!(decode64(&format!("{}4fr", "1".repeat(30))), Ok(12345));
    }

    #[test]
    fn test_overflow_rejected() {
        // one past u64::MAX ("jpXCZedGfVQ" is the maximum)
        assert_eq!(decode64("jpXCZedGfVR"), Err(DecodeError::Overflow));

        // 58^11
        assert_eq!(decode64("211111111111"), Err(DecodeError::Overflow));

        assert_eq!(decode64(&"z".repeat(11)), Err(DecodeError::Overflow));
        assert_eq!(decode64(&"z".repeat(12)), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_case_sensitive() {
        let a = decode64("1111111111a").unwrap();
        let upper_a = decode64("1111111111A").unwrap();

        assert_ne!(a, upper_a);
        assert_eq!(upper_a, 9);
        assert_eq!(a, 33);
    }
}
