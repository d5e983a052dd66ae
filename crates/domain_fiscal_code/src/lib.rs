//! Italian Fiscal Code Domain
//!
//! This crate derives and checks the codice fiscale, the 16-character
//! personal identifier issued to every Italian resident.
//!
//! # Layout of a Fiscal Code
//!
//! ```text
//! RSS MRA 85C15 F205 U
//! |   |   |     |    +-- check character over the first 15
//! |   |   |     +------- cadastral code of the birth municipality
//! |   |   +------------- year, month letter, day (+40 for the second sex category)
//! |   +----------------- given-name code
//! +--------------------- surname code
//! ```
//!
//! # Pipeline
//!
//! - **Transliteration**: names reduced to 3 letters (consonants, then vowels, then `X`)
//! - **Birth block**: date and sex encoded in 5 characters
//! - **Assembly**: the four parts joined into a 15-character payload
//! - **Checksum**: odd/even position tables summed modulo 26
//!
//! The municipality registry backs the birthplace autocomplete and
//! name-to-code resolution. Omocodia (collision) variants are not produced.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_fiscal_code::{
//!     generate_identifier, search_municipalities, validate_identifier,
//!     PersonalIdentifierInput, Sex,
//! };
//!
//! let milano = &search_municipalities("Milano")[0];
//!
//! let input = PersonalIdentifierInput::new(
//!     "Mario",
//!     "Rossi",
//!     NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
//!     Sex::Male,
//!     milano.cadastral_code.to_string(),
//! );
//!
//! let code = generate_identifier(&input).unwrap();
//! assert_eq!(code.as_str(), "RSSMRA85C15F205U");
//! assert!(validate_identifier(code.as_str()));
//! ```

pub mod assembler;
pub mod birth_block;
pub mod checksum;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod municipality;
pub mod person;
pub mod ports;
pub mod service;
pub mod transliteration;
pub mod validation;

pub use checksum::compute_check_character;
pub use error::FiscalCodeError;
pub use generator::generate_identifier;
pub use identifier::{resolve_collision, PersonalIdentifier};
pub use municipality::{
    lookup_by_code, lookup_by_exact_name, lookup_by_name, search_municipalities,
    MunicipalityEntry, MunicipalityRegistry,
};
pub use person::{PersonalIdentifierInput, Sex};
pub use ports::MunicipalityLookup;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockMunicipalityLookup;
pub use service::FiscalCodeService;
pub use transliteration::{reduce_given_name, reduce_surname};
pub use validation::{validate_identifier, IdentifierDefect, IdentifierValidator};
