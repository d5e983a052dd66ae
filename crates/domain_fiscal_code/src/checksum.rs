//! Check character computation
//!
//! Each of the 15 payload characters is mapped to a number through one of two
//! fixed tables, chosen by its 1-based position: odd positions use
//! `ODD_VALUES`, even positions use `EVEN_VALUES`. The sum modulo 26 selects
//! the check letter. The odd table has no closed form and is transcribed as
//! published by the Agenzia delle Entrate.

use crate::error::FiscalCodeError;

/// Number of characters covered by the check character
pub const PAYLOAD_LEN: usize = 15;

/// Alphabet indexed by the checksum remainder
pub const CHECK_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character order shared by both value tables
pub const TABLE_KEYS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Values for characters at odd positions (1st, 3rd, ..., 15th)
pub const ODD_VALUES: [u32; 36] = [
    // 0   1   2   3   4   5   6   7   8   9
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21,
    // A   B   C   D   E   F   G   H   I   J
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21,
    // K   L   M   N   O   P   Q   R   S   T
    2, 4, 18, 20, 11, 3, 6, 8, 12, 14,
    // U   V   W   X   Y   Z
    16, 10, 22, 25, 24, 23,
];

/// Values for characters at even positions (2nd, 4th, ..., 14th)
pub const EVEN_VALUES: [u32; 36] = [
    // 0   1   2   3   4   5   6   7   8   9
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    // A   B   C   D   E   F   G   H   I   J
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    // K   L   M   N   O   P   Q   R   S   T
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    // U   V   W   X   Y   Z
    20, 21, 22, 23, 24, 25,
];

fn table_index(c: char) -> Option<usize> {
    let upper = u8::try_from(c.to_ascii_uppercase()).ok()?;
    TABLE_KEYS.iter().position(|&key| key == upper)
}

/// Value of `c` at an odd (1-based) position
pub fn odd_position_value(c: char) -> Option<u32> {
    table_index(c).map(|i| ODD_VALUES[i])
}

/// Value of `c` at an even (1-based) position
pub fn even_position_value(c: char) -> Option<u32> {
    table_index(c).map(|i| EVEN_VALUES[i])
}

/// Computes the 16th character of a fiscal code from its first 15
///
/// # Arguments
///
/// * `payload` - Exactly 15 characters from `[0-9A-Z]`; lowercase letters are
///   treated as uppercase
///
/// # Errors
///
/// Returns `FiscalCodeError::InvalidInput` if the payload has the wrong length
/// or contains a character outside the tables
///
/// # Examples
///
/// ```
/// use domain_fiscal_code::checksum::compute_check_character;
///
/// assert_eq!(compute_check_character("RSSMRA85C15F205").unwrap(), 'U');
/// ```
pub fn compute_check_character(payload: &str) -> Result<char, FiscalCodeError> {
    let len = payload.chars().count();
    if len != PAYLOAD_LEN {
        return Err(FiscalCodeError::invalid(
            "payload",
            format!("expected {} characters, got {}", PAYLOAD_LEN, len),
        ));
    }

    let mut sum = 0u32;
    for (i, c) in payload.chars().enumerate() {
        // i is 0-based, so even i is an odd 1-based position
        let value = if i % 2 == 0 {
            odd_position_value(c)
        } else {
            even_position_value(c)
        };
        sum += value.ok_or_else(|| {
            FiscalCodeError::invalid(
                "payload",
                format!("character {:?} at position {} is not in [0-9A-Z]", c, i + 1),
            )
        })?;
    }

    Ok(CHECK_ALPHABET[(sum % 26) as usize] as char)
}
