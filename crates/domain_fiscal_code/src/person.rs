//! Personal data needed to derive a fiscal code
//!
//! `PersonalIdentifierInput` is a transient value object: it is built from
//! form fields, passed to the generator, and dropped. Field checks are
//! declared with `validator` and enforced by the generator before any
//! encoding happens.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::checked_date;

use crate::error::FiscalCodeError;
use crate::validation::{validate_cadastral_code, validate_name_letters};

/// Sex as encoded in the fiscal code
///
/// `Male` is the first category (day unchanged), `Female` the second
/// (day of month + 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M", alias = "m")]
    Male,
    #[serde(rename = "F", alias = "f")]
    Female,
}

impl Sex {
    /// Offset added to the day of month for this category
    pub fn day_offset(&self) -> u32 {
        match self {
            Sex::Male => 0,
            Sex::Female => 40,
        }
    }

    /// Single-letter code, `M` or `F`
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Sex {
    type Err = FiscalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Sex::Male),
            "F" | "f" => Ok(Sex::Female),
            other => Err(FiscalCodeError::invalid(
                "sex",
                format!("expected M or F, got {:?}", other),
            )),
        }
    }
}

/// Input for fiscal code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonalIdentifierInput {
    /// Given name(s), free text
    #[validate(custom(function = "validate_name_letters"))]
    pub given_name: String,
    /// Surname(s), free text
    #[validate(custom(function = "validate_name_letters"))]
    pub surname: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Sex category
    pub sex: Sex,
    /// Cadastral code of the birth municipality, e.g. `F205`
    #[validate(custom(function = "validate_cadastral_code"))]
    pub birthplace_cadastral_code: String,
}

impl PersonalIdentifierInput {
    /// Creates a new input from already-typed fields
    pub fn new(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: NaiveDate,
        sex: Sex,
        birthplace_cadastral_code: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            birth_date,
            sex,
            birthplace_cadastral_code: birthplace_cadastral_code.into(),
        }
    }

    /// Creates an input from a raw year/month/day triple
    ///
    /// # Errors
    ///
    /// Returns `FiscalCodeError::InvalidInput` on `birth_date` if the triple is
    /// not a real calendar day (e.g. 31 April)
    pub fn from_parts(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        (year, month, day): (i32, u32, u32),
        sex: Sex,
        birthplace_cadastral_code: impl Into<String>,
    ) -> Result<Self, FiscalCodeError> {
        let birth_date = checked_date(year, month, day)?;
        Ok(Self::new(given_name, surname, birth_date, sex, birthplace_cadastral_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_day_offset() {
        assert_eq!(Sex::Male.day_offset(), 0);
        assert_eq!(Sex::Female.day_offset(), 40);
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_serde() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"F\"");
        let sex: Sex = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(sex, Sex::Male);
    }

    #[test]
    fn test_from_parts_valid() {
        let input = PersonalIdentifierInput::from_parts("Mario", "Rossi", (1985, 3, 15), Sex::Male, "F205")
            .unwrap();
        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1985, 3, 15).unwrap());
    }

    #[test]
    fn test_from_parts_rejects_impossible_date() {
        let err = PersonalIdentifierInput::from_parts("Mario", "Rossi", (1985, 4, 31), Sex::Male, "F205")
            .unwrap_err();
        assert_eq!(err.field(), Some("birth_date"));
    }

    #[test]
    fn test_validate_accepts_good_input() {
        let input = PersonalIdentifierInput::new(
            "Mario",
            "Rossi",
            NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            Sex::Male,
            "f205",
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_flags_each_bad_field() {
        let input = PersonalIdentifierInput::new(
            "123",
            "'",
            NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            Sex::Male,
            "F20",
        );
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
    }
}
