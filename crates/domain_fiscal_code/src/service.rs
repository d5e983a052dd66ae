//! Fiscal code service facade
//!
//! Bundles generation, validation and municipality search behind one value
//! that carries the loaded configuration and a `MunicipalityLookup`. The
//! free functions at the crate root use the built-in registry and default
//! limits; the service honours `FiscalCodeConfig` instead.

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use core_kernel::FiscalCodeConfig;

use crate::error::FiscalCodeError;
use crate::generator::generate_identifier;
use crate::identifier::PersonalIdentifier;
use crate::municipality::{MunicipalityEntry, MunicipalityRegistry};
use crate::person::{PersonalIdentifierInput, Sex};
use crate::ports::MunicipalityLookup;
use crate::validation::IdentifierValidator;

/// Entry point for applications embedding the fiscal code domain
#[derive(Debug, Clone)]
pub struct FiscalCodeService<L = MunicipalityRegistry> {
    config: FiscalCodeConfig,
    municipalities: L,
}

impl FiscalCodeService<MunicipalityRegistry> {
    /// Creates a service over the built-in registry
    ///
    /// # Errors
    ///
    /// Returns `FiscalCodeError::Core` if the configuration is unusable
    pub fn new(config: FiscalCodeConfig) -> Result<Self, FiscalCodeError> {
        Self::with_lookup(config, MunicipalityRegistry)
    }

    /// Creates a service from `FISCAL_*` environment variables
    pub fn from_env() -> Result<Self, FiscalCodeError> {
        Self::new(FiscalCodeConfig::from_env()?)
    }
}

impl<L: MunicipalityLookup> FiscalCodeService<L> {
    /// Creates a service over a custom municipality source
    pub fn with_lookup(config: FiscalCodeConfig, municipalities: L) -> Result<Self, FiscalCodeError> {
        config.validate()?;
        Ok(Self { config, municipalities })
    }

    /// The active configuration
    pub fn config(&self) -> &FiscalCodeConfig {
        &self.config
    }

    /// Generates a fiscal code; see [`generate_identifier`]
    pub fn generate(&self, input: &PersonalIdentifierInput) -> Result<PersonalIdentifier, FiscalCodeError> {
        generate_identifier(input)
    }

    /// Generates a fiscal code, resolving the birthplace by exact name
    ///
    /// # Errors
    ///
    /// Returns `FiscalCodeError::UnknownMunicipality` if no entry has that
    /// name, otherwise the errors of [`generate_identifier`]
    #[instrument(skip(self, given_name, surname, birth_date))]
    pub fn generate_for_municipality(
        &self,
        given_name: &str,
        surname: &str,
        birth_date: NaiveDate,
        sex: Sex,
        municipality_name: &str,
    ) -> Result<PersonalIdentifier, FiscalCodeError> {
        let municipality = self
            .municipalities
            .find_by_exact_name(municipality_name)
            .ok_or_else(|| {
                warn!("Birthplace not in municipality registry");
                FiscalCodeError::UnknownMunicipality(municipality_name.to_string())
            })?;

        debug!(code = %municipality.cadastral_code, "Birthplace resolved");
        let input = PersonalIdentifierInput::new(
            given_name,
            surname,
            birth_date,
            sex,
            municipality.cadastral_code.into_owned(),
        );
        generate_identifier(&input)
    }

    /// Returns true iff `candidate` is a valid fiscal code
    pub fn validate(&self, candidate: &str) -> bool {
        IdentifierValidator::validate(candidate)
    }

    /// Searches municipalities with the configured limits
    pub fn search(&self, query: &str) -> Vec<MunicipalityEntry> {
        self.municipalities
            .search(query, self.config.search_limit, self.config.min_query_length)
    }

    /// The birthplace entry encoded in a fiscal code, if it is in the dataset
    pub fn municipality_for(&self, identifier: &PersonalIdentifier) -> Option<MunicipalityEntry> {
        self.municipalities.find_by_code(identifier.municipality_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockMunicipalityLookup;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 3, 15).unwrap()
    }

    fn mock_service() -> FiscalCodeService<MockMunicipalityLookup> {
        let lookup = MockMunicipalityLookup::default()
            .with_entry(MunicipalityEntry::owned("Milano", "F205", "MI"))
            .with_entry(MunicipalityEntry::owned("Milazzo", "F206", "ME"))
            .with_entry(MunicipalityEntry::owned("Rimini", "H294", "RN"));
        FiscalCodeService::with_lookup(FiscalCodeConfig::default(), lookup).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_limit() {
        let config = FiscalCodeConfig {
            search_limit: 0,
            ..FiscalCodeConfig::default()
        };
        assert!(matches!(
            FiscalCodeService::new(config),
            Err(FiscalCodeError::Core(_))
        ));
    }

    #[test]
    fn test_generate_for_municipality() {
        let service = mock_service();
        let id = service
            .generate_for_municipality("Mario", "Rossi", birth_date(), Sex::Male, "milano")
            .unwrap();
        assert_eq!(id.as_str(), "RSSMRA85C15F205U");
    }

    #[test]
    fn test_generate_for_unknown_municipality() {
        let service = mock_service();
        let err = service
            .generate_for_municipality("Mario", "Rossi", birth_date(), Sex::Male, "Atlantide")
            .unwrap_err();
        assert!(matches!(err, FiscalCodeError::UnknownMunicipality(ref name) if name == "Atlantide"));
    }

    #[test]
    fn test_search_uses_configured_limits() {
        let lookup = MockMunicipalityLookup::default()
            .with_entry(MunicipalityEntry::owned("Milano", "F205", "MI"))
            .with_entry(MunicipalityEntry::owned("Milazzo", "F206", "ME"));
        let config = FiscalCodeConfig {
            search_limit: 1,
            min_query_length: 3,
            ..FiscalCodeConfig::default()
        };
        let service = FiscalCodeService::with_lookup(config, lookup).unwrap();

        assert!(service.search("MI").is_empty());
        let found = service.search("mil");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "MILANO");
    }

    #[test]
    fn test_municipality_for() {
        let service = mock_service();
        let id = PersonalIdentifier::parse("RSSMRA85C15F205U").unwrap();
        assert_eq!(service.municipality_for(&id).unwrap().name, "MILANO");

        let id = PersonalIdentifier::parse("BNCGLI90L44H501Q").unwrap();
        assert!(service.municipality_for(&id).is_none());
    }

    #[test]
    fn test_default_registry_service() {
        let service = FiscalCodeService::new(FiscalCodeConfig::default()).unwrap();
        assert!(service.validate("RSSMRA85C15F205U"));
        assert_eq!(service.search("MI").len(), 4);
        let id = service
            .generate_for_municipality("Giulia", "Bianchi", NaiveDate::from_ymd_opt(1990, 7, 4).unwrap(), Sex::Female, "Roma")
            .unwrap();
        assert_eq!(id.as_str(), "BNCGLI90L44H501Q");
    }
}
