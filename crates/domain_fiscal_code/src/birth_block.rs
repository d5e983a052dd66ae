//! Birth date and sex encoding
//!
//! The five-character block is `YY` + month letter + `DD`, where `DD` is the
//! day of month plus 40 for the second sex category. The month letters skip
//! F, G, I, J, K, N, O and Q.

use chrono::{Datelike, NaiveDate};

use core_kernel::{checked_date, two_digit_year};

use crate::error::FiscalCodeError;
use crate::person::Sex;

/// Month letters, January first
pub const MONTH_LETTERS: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Length of the encoded block
pub const BLOCK_LEN: usize = 5;

/// Letter for a 1-based month number
pub fn month_letter(month: u32) -> Option<char> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_LETTERS.get(index).copied()
}

/// 1-based month number for a month letter
pub fn month_from_letter(letter: char) -> Option<u32> {
    let letter = letter.to_ascii_uppercase();
    MONTH_LETTERS
        .iter()
        .position(|&l| l == letter)
        .map(|i| i as u32 + 1)
}

/// Encodes a birth date and sex into the five-character block
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use domain_fiscal_code::birth_block::encode;
/// use domain_fiscal_code::Sex;
///
/// let date = NaiveDate::from_ymd_opt(1985, 3, 15).unwrap();
/// assert_eq!(encode(&date, Sex::Male), "85C15");
/// assert_eq!(encode(&date, Sex::Female), "85C55");
/// ```
pub fn encode(birth_date: &NaiveDate, sex: Sex) -> String {
    let letter = MONTH_LETTERS[birth_date.month0() as usize];
    format!(
        "{:02}{}{:02}",
        two_digit_year(birth_date),
        letter,
        birth_date.day() + sex.day_offset()
    )
}

/// Encodes raw year/month/day parts, rejecting impossible dates
///
/// # Errors
///
/// Returns `FiscalCodeError::InvalidInput` on `birth_date` for a month outside
/// 1-12 or a day that does not exist in that month
pub fn encode_parts(year: i32, month: u32, day: u32, sex: Sex) -> Result<String, FiscalCodeError> {
    let date = checked_date(year, month, day)?;
    Ok(encode(&date, sex))
}
