//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for fiscal codes that give
//! more meaningful error messages than standard assertions.

use domain_fiscal_code::{FiscalCodeError, IdentifierValidator, PersonalIdentifier};

/// Asserts that a string is a valid fiscal code
///
/// # Panics
///
/// Panics with the first failed check if the code is not valid
pub fn assert_valid_identifier(candidate: &str) {
    if let Err(defect) = IdentifierValidator::inspect(candidate) {
        panic!("Expected valid fiscal code, got {:?}: {}", candidate, defect);
    }
}

/// Asserts that a string is not a valid fiscal code
pub fn assert_invalid_identifier(candidate: &str) {
    assert!(
        !IdentifierValidator::validate(candidate),
        "Expected {:?} to be rejected",
        candidate
    );
}

/// Asserts each segment of a fiscal code
///
/// # Arguments
///
/// * `id` - The code under test
/// * `surname_code` - Expected characters 1-3
/// * `given_name_code` - Expected characters 4-6
/// * `birth_block` - Expected characters 7-11
/// * `municipality_code` - Expected characters 12-15
pub fn assert_identifier_layout(
    id: &PersonalIdentifier,
    surname_code: &str,
    given_name_code: &str,
    birth_block: &str,
    municipality_code: &str,
) {
    assert_eq!(id.surname_code(), surname_code, "surname code of {}", id);
    assert_eq!(id.given_name_code(), given_name_code, "given-name code of {}", id);
    assert_eq!(id.birth_block(), birth_block, "birth block of {}", id);
    assert_eq!(id.municipality_code(), municipality_code, "municipality code of {}", id);
}

/// Asserts that a result failed with `InvalidInput` on the given field
pub fn assert_invalid_input<T: std::fmt::Debug>(result: Result<T, FiscalCodeError>, field: &str) {
    match result {
        Err(FiscalCodeError::InvalidInput { field: actual, .. }) => {
            assert_eq!(actual, field, "InvalidInput reported the wrong field");
        }
        other => panic!("Expected InvalidInput on {}, got {:?}", field, other),
    }
}
