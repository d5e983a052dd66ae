//! Test Data Builders
//!
//! Provides a builder for generation input with sensible defaults, so tests
//! only spell out the field under test.

use chrono::NaiveDate;
use domain_fiscal_code::{PersonalIdentifierInput, Sex};

use crate::fixtures::PersonFixtures;

/// Builder for constructing `PersonalIdentifierInput`
///
/// Defaults to Mario Rossi, male, born 1985-03-15 in Milano (F205).
#[derive(Debug, Clone)]
pub struct PersonalIdentifierInputBuilder {
    given_name: String,
    surname: String,
    birth_date: NaiveDate,
    sex: Sex,
    birthplace_cadastral_code: String,
}

impl Default for PersonalIdentifierInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalIdentifierInputBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let person = PersonFixtures::mario_rossi();
        let input = person.input();
        Self {
            given_name: input.given_name,
            surname: input.surname,
            birth_date: input.birth_date,
            sex: input.sex,
            birthplace_cadastral_code: input.birthplace_cadastral_code,
        }
    }

    /// Sets the given name
    pub fn with_given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = given_name.into();
        self
    }

    /// Sets the surname
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Sets the birth date from a year/month/day triple
    ///
    /// # Panics
    ///
    /// Panics if the triple is not a real date
    pub fn born_on(self, year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("{}-{}-{} is not a real date", year, month, day));
        self.with_birth_date(date)
    }

    /// Sets the sex category
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Sets the birthplace cadastral code
    pub fn with_birthplace(mut self, code: impl Into<String>) -> Self {
        self.birthplace_cadastral_code = code.into();
        self
    }

    /// Builds the input
    pub fn build(self) -> PersonalIdentifierInput {
        PersonalIdentifierInput::new(
            self.given_name,
            self.surname,
            self.birth_date,
            self.sex,
            self.birthplace_cadastral_code,
        )
    }
}
