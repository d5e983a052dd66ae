//! The fiscal code value type
//!
//! A `PersonalIdentifier` always holds 16 uppercase ASCII characters whose
//! last character is the correct check character for the first 15. It can
//! only be obtained from the generator or by parsing, so holders never need
//! to re-validate it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::birth_block::{month_from_letter, BLOCK_LEN};
use crate::checksum::PAYLOAD_LEN;
use crate::error::FiscalCodeError;
use crate::person::Sex;
use crate::validation::IdentifierValidator;

/// A validated 16-character fiscal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalIdentifier(String);

impl PersonalIdentifier {
    /// Joins a well-formed payload and its check character
    pub(crate) fn from_payload(mut payload: String, check: char) -> Self {
        payload.push(check);
        Self(payload)
    }

    /// Parses and validates a fiscal code, accepting lowercase input
    ///
    /// # Errors
    ///
    /// Returns `FiscalCodeError::MalformedIdentifier` with the first failed check
    pub fn parse(candidate: &str) -> Result<Self, FiscalCodeError> {
        IdentifierValidator::inspect(candidate)
            .map(Self)
            .map_err(|defect| FiscalCodeError::malformed(defect.to_string()))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first 15 characters covered by the check character
    pub fn payload(&self) -> &str {
        &self.0[..PAYLOAD_LEN]
    }

    /// Characters 1-3
    pub fn surname_code(&self) -> &str {
        &self.0[0..3]
    }

    /// Characters 4-6
    pub fn given_name_code(&self) -> &str {
        &self.0[3..6]
    }

    /// Characters 7-11: year, month letter, sex-encoded day
    pub fn birth_block(&self) -> &str {
        &self.0[6..6 + BLOCK_LEN]
    }

    /// Characters 12-15
    pub fn municipality_code(&self) -> &str {
        &self.0[11..15]
    }

    /// Character 16
    pub fn check_character(&self) -> char {
        self.0.as_bytes()[PAYLOAD_LEN] as char
    }

    /// Two-digit birth year
    pub fn birth_year_digits(&self) -> u32 {
        self.digits(6)
    }

    /// Birth month, or `None` if the month letter is not in the month table
    pub fn birth_month(&self) -> Option<u32> {
        month_from_letter(self.0.as_bytes()[8] as char)
    }

    /// Day field as written, including the +40 offset for the second category
    pub fn encoded_day(&self) -> u32 {
        self.digits(9)
    }

    /// Sex category decoded from the day field
    pub fn sex(&self) -> Sex {
        if self.encoded_day() > Sex::Female.day_offset() {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Day of month with the sex offset removed
    pub fn birth_day(&self) -> u32 {
        self.encoded_day() - self.sex().day_offset()
    }

    /// Would derive the omocodia variant of this code for the given level
    ///
    /// Disambiguating two people who share a code is done by the issuing
    /// authority by replacing digits with letters. It is not implemented and
    /// always fails.
    ///
    /// # Errors
    ///
    /// Always returns `FiscalCodeError::CollisionResolutionUnsupported`
    pub fn resolve_collision(&self, _level: u8) -> Result<Self, FiscalCodeError> {
        Err(FiscalCodeError::CollisionResolutionUnsupported)
    }

    fn digits(&self, at: usize) -> u32 {
        let bytes = self.0.as_bytes();
        u32::from(bytes[at] - b'0') * 10 + u32::from(bytes[at + 1] - b'0')
    }
}

/// Omocodia variant of `identifier`; see [`PersonalIdentifier::resolve_collision`]
///
/// # Errors
///
/// Always returns `FiscalCodeError::CollisionResolutionUnsupported`
pub fn resolve_collision(identifier: &PersonalIdentifier, level: u8) -> Result<PersonalIdentifier, FiscalCodeError> {
    identifier.resolve_collision(level)
}

impl fmt::Display for PersonalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PersonalIdentifier {
    type Err = FiscalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PersonalIdentifier {
    type Error = FiscalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonalIdentifier> for String {
    fn from(id: PersonalIdentifier) -> String {
        id.0
    }
}

impl AsRef<str> for PersonalIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
