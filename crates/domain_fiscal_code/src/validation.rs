//! Fiscal code validation
//!
//! Two kinds of checks live here:
//!
//! ## Identifier checks
//! - Exactly 16 characters
//! - Layout: 6 letters, 2 digits, 1 letter, 2 digits, 1 letter, 3 digits, 1 letter
//!   (compared after uppercasing)
//! - The 16th character equals the check character recomputed over the first 15
//!
//! `IdentifierValidator::validate` answers with a plain boolean and never says
//! which check failed. `IdentifierValidator::inspect` reports the first defect
//! and backs `PersonalIdentifier` parsing.
//!
//! ## Input checks
//! - Given name and surname contain at least one letter A-Z
//! - Birthplace code is 1 letter + 3 digits (either case)

use std::borrow::Cow;

use thiserror::Error;
use tracing::{debug, warn};
use validator::{Validate, ValidationError};

use crate::checksum::{compute_check_character, PAYLOAD_LEN};
use crate::error::FiscalCodeError;
use crate::person::PersonalIdentifierInput;
use crate::transliteration::has_letters;

/// Length of a complete fiscal code
pub const IDENTIFIER_LEN: usize = 16;

/// Character classes by position: `L` letter, `D` digit
const LAYOUT: &[u8; IDENTIFIER_LEN] = b"LLLLLLDDLDDLDDDL";

/// Order in which input field errors are reported
const FIELD_ORDER: [&str; 3] = ["surname", "given_name", "birthplace_cadastral_code"];

/// The first reason a candidate is not a valid fiscal code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierDefect {
    #[error("expected {len} characters, got {0}", len = IDENTIFIER_LEN)]
    WrongLength(usize),

    #[error("characters do not follow the fiscal code layout")]
    BadLayout,

    #[error("check character is {found}, expected {expected}")]
    CheckMismatch { expected: char, found: char },
}

/// Validator for fiscal codes and generation input
pub struct IdentifierValidator;

impl IdentifierValidator {
    /// Returns true iff `candidate` is a well-formed fiscal code with a correct
    /// check character
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_fiscal_code::validation::IdentifierValidator;
    ///
    /// assert!(IdentifierValidator::validate("RSSMRA85C15F205U"));
    /// assert!(IdentifierValidator::validate("rssmra85c15f205u"));
    /// assert!(!IdentifierValidator::validate("RSSMRA85C15F205X"));
    /// ```
    pub fn validate(candidate: &str) -> bool {
        let valid = Self::inspect(candidate).is_ok();
        debug!(valid, "Fiscal code checked");
        valid
    }

    /// Runs the identifier checks in order and reports the first defect
    ///
    /// # Returns
    ///
    /// The uppercased candidate when every check passes
    pub fn inspect(candidate: &str) -> Result<String, IdentifierDefect> {
        let len = candidate.chars().count();
        if len != IDENTIFIER_LEN {
            return Err(IdentifierDefect::WrongLength(len));
        }

        let upper = candidate.to_ascii_uppercase();
        if !Self::has_valid_layout(&upper) {
            return Err(IdentifierDefect::BadLayout);
        }

        // Layout guarantees 16 ASCII bytes from here on
        let (payload, check) = upper.split_at(PAYLOAD_LEN);
        let expected = compute_check_character(payload).map_err(|_| IdentifierDefect::BadLayout)?;
        let found = check.chars().next().ok_or(IdentifierDefect::BadLayout)?;
        if expected != found {
            return Err(IdentifierDefect::CheckMismatch { expected, found });
        }

        Ok(upper)
    }

    /// Structural check only: letters and digits in the expected positions
    pub fn has_valid_layout(candidate: &str) -> bool {
        candidate.len() == IDENTIFIER_LEN
            && candidate
                .bytes()
                .zip(LAYOUT.iter())
                .all(|(b, kind)| match *kind {
                    b'L' => b.is_ascii_uppercase(),
                    _ => b.is_ascii_digit(),
                })
    }

    /// Validates generation input
    ///
    /// # Errors
    ///
    /// Returns `FiscalCodeError::InvalidInput` naming the first offending field,
    /// checked in the order surname, given name, birthplace code
    pub fn validate_input(input: &PersonalIdentifierInput) -> Result<(), FiscalCodeError> {
        let errors = match input.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };

        let mut found: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                (field.to_string(), reason)
            })
            .collect();

        found.sort_by_key(|(field, _)| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == field.as_str())
                .unwrap_or(FIELD_ORDER.len())
        });

        let (field, reason) = found
            .into_iter()
            .next()
            .unwrap_or_else(|| ("input".to_string(), "validation failed".to_string()));

        warn!(field = %field, "Rejected fiscal code input");
        Err(FiscalCodeError::invalid(field, reason))
    }
}

/// Returns true iff `candidate` is a valid fiscal code
pub fn validate_identifier(candidate: &str) -> bool {
    IdentifierValidator::validate(candidate)
}

/// Returns true if `code` is 1 letter followed by 3 digits (either case)
pub fn is_cadastral_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 4 && bytes[0].is_ascii_alphabetic() && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Field validator: the name must contain at least one letter A-Z
pub fn validate_name_letters(value: &str) -> Result<(), ValidationError> {
    if has_letters(value) {
        return Ok(());
    }
    let mut error = ValidationError::new("no_letters");
    error.message = Some(Cow::from("must contain at least one letter A-Z"));
    Err(error)
}

/// Field validator: the value must be a cadastral code
pub fn validate_cadastral_code(value: &str) -> Result<(), ValidationError> {
    if is_cadastral_code(value) {
        return Ok(());
    }
    let mut error = ValidationError::new("cadastral_code");
    error.message = Some(Cow::from("must be 1 letter followed by 3 digits"));
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;
    use chrono::NaiveDate;

    fn create_valid_input() -> PersonalIdentifierInput {
        PersonalIdentifierInput::new(
            "Mario",
            "Rossi",
            NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            Sex::Male,
            "F205",
        )
    }

    #[test]
    fn test_valid_identifier() {
        assert!(IdentifierValidator::validate("RSSMRA85C15F205U"));
        assert!(IdentifierValidator::validate("BNCGLI90L44H501Q"));
    }

    #[test]
    fn test_lowercase_identifier_is_valid() {
        assert!(validate_identifier("bncgli90l44h501q"));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            IdentifierValidator::inspect("RSSMRA85C15F205"),
            Err(IdentifierDefect::WrongLength(15))
        );
        assert!(!validate_identifier(""));
        assert!(!validate_identifier("RSSMRA85C15F205UU"));
    }

    #[test]
    fn test_bad_layout() {
        // digit where a letter belongs
        assert_eq!(
            IdentifierValidator::inspect("RSSMR185C15F205U"),
            Err(IdentifierDefect::BadLayout)
        );
        // non-ASCII letter keeps the char count at 16
        assert_eq!(
            IdentifierValidator::inspect("RSSMRÀ85C15F205U"),
            Err(IdentifierDefect::BadLayout)
        );
    }

    #[test]
    fn test_defect_messages() {
        assert_eq!(
            IdentifierDefect::WrongLength(15).to_string(),
            "expected 16 characters, got 15"
        );
        assert_eq!(
            IdentifierDefect::CheckMismatch { expected: 'U', found: 'X' }.to_string(),
            "check character is X, expected U"
        );
    }

    #[test]
    fn test_check_mismatch() {
        assert_eq!(
            IdentifierValidator::inspect("RSSMRA85C15F205X"),
            Err(IdentifierDefect::CheckMismatch { expected: 'U', found: 'X' })
        );
    }

    #[test]
    fn test_every_other_check_letter_fails() {
        for c in b'A'..=b'Z' {
            let candidate = format!("RSSMRA85C15F205{}", c as char);
            assert_eq!(validate_identifier(&candidate), c == b'U', "check letter {}", c as char);
        }
    }

    #[test]
    fn test_is_cadastral_code() {
        assert!(is_cadastral_code("F205"));
        assert!(is_cadastral_code("h501"));
        assert!(!is_cadastral_code("F20"));
        assert!(!is_cadastral_code("205F"));
        assert!(!is_cadastral_code("FF05"));
    }

    #[test]
    fn test_validate_input_ok() {
        assert!(IdentifierValidator::validate_input(&create_valid_input()).is_ok());
    }

    #[test]
    fn test_validate_input_empty_surname() {
        let mut input = create_valid_input();
        input.surname = "  ".to_string();
        let err = IdentifierValidator::validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("surname"));
    }

    #[test]
    fn test_validate_input_reports_surname_first() {
        let mut input = create_valid_input();
        input.surname = "".to_string();
        input.given_name = "".to_string();
        input.birthplace_cadastral_code = "".to_string();
        let err = IdentifierValidator::validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("surname"));
    }

    #[test]
    fn test_validate_input_bad_cadastral_code() {
        let mut input = create_valid_input();
        input.birthplace_cadastral_code = "MILANO".to_string();
        let err = IdentifierValidator::validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("birthplace_cadastral_code"));
        assert!(err.to_string().contains("1 letter followed by 3 digits"));
    }
}
