//! Fiscal code generation
//!
//! Runs the full pipeline: input checks, surname and given-name reduction,
//! birth block, payload assembly and check character. Deterministic and
//! stateless.

use tracing::{debug, instrument};

use crate::assembler::assemble;
use crate::birth_block;
use crate::checksum::compute_check_character;
use crate::error::FiscalCodeError;
use crate::identifier::PersonalIdentifier;
use crate::person::PersonalIdentifierInput;
use crate::transliteration::{reduce_given_name, reduce_surname};
use crate::validation::IdentifierValidator;

/// Generates the fiscal code for a person
///
/// The birthplace code is accepted in either case and written uppercase.
///
/// # Errors
///
/// Returns `FiscalCodeError::InvalidInput` if a name has no letters A-Z or
/// the birthplace code is not 1 letter followed by 3 digits
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use domain_fiscal_code::{generate_identifier, PersonalIdentifierInput, Sex};
///
/// let input = PersonalIdentifierInput::new(
///     "Mario",
///     "Rossi",
///     NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
///     Sex::Male,
///     "F205",
/// );
/// assert_eq!(generate_identifier(&input).unwrap().as_str(), "RSSMRA85C15F205U");
/// ```
#[instrument(skip(input), fields(municipality = %input.birthplace_cadastral_code))]
pub fn generate_identifier(input: &PersonalIdentifierInput) -> Result<PersonalIdentifier, FiscalCodeError> {
    IdentifierValidator::validate_input(input)?;

    let surname_code = reduce_surname(&input.surname);
    let name_code = reduce_given_name(&input.given_name);
    let date_sex_block = birth_block::encode(&input.birth_date, input.sex);
    let municipality_code = input.birthplace_cadastral_code.to_ascii_uppercase();

    let payload = assemble(&surname_code, &name_code, &date_sex_block, &municipality_code);
    let check = compute_check_character(&payload)?;

    debug!(check = %check, "Fiscal code generated");
    Ok(PersonalIdentifier::from_payload(payload, check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;
    use crate::validation::validate_identifier;
    use chrono::NaiveDate;

    fn input(given: &str, surname: &str, (y, m, d): (i32, u32, u32), sex: Sex, code: &str) -> PersonalIdentifierInput {
        PersonalIdentifierInput::new(given, surname, NaiveDate::from_ymd_opt(y, m, d).unwrap(), sex, code)
    }

    #[test]
    fn test_known_codes() {
        let cases = [
            (input("Mario", "Rossi", (1985, 3, 15), Sex::Male, "F205"), "RSSMRA85C15F205U"),
            (input("Giulia", "Bianchi", (1990, 7, 4), Sex::Female, "H501"), "BNCGLI90L44H501Q"),
            (input("Ada", "Lo", (2001, 12, 31), Sex::Female, "L219"), "LOXDAA01T71L219E"),
            (input("Francesco", "De Luca", (1978, 6, 1), Sex::Male, "F839"), "DLCFNC78H01F839K"),
            (input("Anna", "Fo", (1960, 1, 9), Sex::Female, "A944"), "FOXNNA60A49A944E"),
            (input("Gianfranco", "D'Angelo", (1999, 10, 20), Sex::Male, "D612"), "DNGGFR99R20D612G"),
            (input("Luca", "Verdi", (2000, 2, 29), Sex::Male, "L736"), "VRDLCU00B29L736K"),
        ];
        for (input, expected) in cases {
            let id = generate_identifier(&input).unwrap();
            assert_eq!(id.as_str(), expected);
            assert!(validate_identifier(id.as_str()));
        }
    }

    #[test]
    fn test_lowercase_code_is_uppercased() {
        let id = generate_identifier(&input("Mario", "Rossi", (1985, 3, 15), Sex::Male, "f205")).unwrap();
        assert_eq!(id.as_str(), "RSSMRA85C15F205U");
    }

    #[test]
    fn test_deterministic() {
        let input = input("Giulia", "Bianchi", (1990, 7, 4), Sex::Female, "H501");
        assert_eq!(generate_identifier(&input).unwrap(), generate_identifier(&input).unwrap());
    }

    #[test]
    fn test_rejects_name_without_letters() {
        let err = generate_identifier(&input("Mario", "123", (1985, 3, 15), Sex::Male, "F205")).unwrap_err();
        assert_eq!(err.field(), Some("surname"));

        let err = generate_identifier(&input("", "Rossi", (1985, 3, 15), Sex::Male, "F205")).unwrap_err();
        assert_eq!(err.field(), Some("given_name"));
    }

    #[test]
    fn test_rejects_bad_municipality_code() {
        let err = generate_identifier(&input("Mario", "Rossi", (1985, 3, 15), Sex::Male, "F2O5")).unwrap_err();
        assert_eq!(err.field(), Some("birthplace_cadastral_code"));
    }
}
