//! Base-36 rendering of integers and identifiers.
//!
//! Lowercase digits `0-9a-z`, most significant digit first. Useful for
//! compact, URL-safe surrogate identifiers. Independent of the iteration
//! core.

use uuid::Uuid;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders an unsigned value in base 36; zero renders as `"0"`.
pub fn encode_u64(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Renders a signed value in base 36, with a leading `-` when negative.
pub fn encode_i64(value: i64) -> String {
    let magnitude = encode_u64(value.unsigned_abs());
    if value < 0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Renders a UUID as four base-36 groups joined by `-`.
///
/// The 16 bytes are split into four little-endian `u32` words; the nil
/// UUID renders as `"0-0-0-0"`.
pub fn encode_uuid(id: Uuid) -> String {
    let b = id.as_bytes();
    let word = |i: usize| u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);

    format!(
        "{}-{}-{}-{}",
        encode_u64(word(0) as u64),
        encode_u64(word(4) as u64),
        encode_u64(word(8) as u64),
        encode_u64(word(12) as u64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_values_render_in_base36() {
        assert_eq!(encode_u64(0), "0");
        assert_eq!(encode_u64(10), "a");
        assert_eq!(encode_u64(35), "z");
        assert_eq!(encode_u64(36), "10");
        assert_eq!(encode_u64(1296), "100");
        assert_eq!(encode_u64(3600), "2s0");
    }

    #[test]
    fn signed_values_carry_their_sign() {
        assert_eq!(encode_i64(0), "0");
        assert_eq!(encode_i64(10), "a");
        assert_eq!(encode_i64(-1), "-1");
        assert_eq!(encode_i64(-10), "-a");
        assert_eq!(encode_i64(-35), "-z");
        assert_eq!(encode_i64(-36), "-10");
    }

    #[test]
    fn extreme_signed_values_do_not_overflow() {
        assert!(encode_i64(i64::MIN).starts_with('-'));
        assert_eq!(encode_i64(i64::MAX), encode_u64(i64::MAX as u64));
    }

    #[test]
    fn uuids_render_as_four_groups() {
        assert_eq!(encode_uuid(Uuid::nil()), "0-0-0-0");

        let id = Uuid::from_bytes([
            1, 0, 0, 0, // word 0: 1
            36, 0, 0, 0, // word 1: 36
            35, 0, 0, 0, // word 2: 35
            16, 14, 0, 0, // word 3: 3600
        ]);
        assert_eq!(encode_uuid(id), "1-10-z-2s0");
    }
}
