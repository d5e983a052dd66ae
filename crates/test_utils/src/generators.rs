//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use domain_fiscal_code::municipality::entries;
use domain_fiscal_code::{generate_identifier, PersonalIdentifier, PersonalIdentifierInput, Sex};
use proptest::prelude::*;
use proptest::sample::select;

/// Strategy for names that contain at least one letter A-Z
///
/// May include spaces, apostrophes and accented vowels, which reduction
/// ignores.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z' àèéìòù]{0,20}"
}

/// Strategy for text with no letters A-Z at all
pub fn letterless_strategy() -> impl Strategy<Value = String> {
    "[0-9 '\\-.]{0,12}"
}

/// Strategy for birth dates between 1900-01-01 and 2099-12-31
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid start date");
    (0u64..73_048).prop_map(move |offset| {
        start
            .checked_add_days(Days::new(offset))
            .expect("offset stays in range")
    })
}

/// Strategy for the sex category
pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

/// Strategy for cadastral codes present in the built-in registry
pub fn registry_code_strategy() -> impl Strategy<Value = String> {
    select(entries()).prop_map(|entry| entry.cadastral_code.to_string())
}

/// Strategy for any well-formed cadastral code, in either case
pub fn cadastral_code_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][0-9]{3}"
}

/// Strategy for valid generation input
pub fn personal_input_strategy() -> impl Strategy<Value = PersonalIdentifierInput> {
    (
        name_strategy(),
        name_strategy(),
        birth_date_strategy(),
        sex_strategy(),
        prop_oneof![registry_code_strategy(), cadastral_code_strategy()],
    )
        .prop_map(|(given_name, surname, birth_date, sex, code)| {
            PersonalIdentifierInput::new(given_name, surname, birth_date, sex, code)
        })
}

/// Strategy for generated, valid fiscal codes
pub fn identifier_strategy() -> impl Strategy<Value = PersonalIdentifier> {
    personal_input_strategy()
        .prop_map(|input| generate_identifier(&input).expect("strategy input is valid"))
}
