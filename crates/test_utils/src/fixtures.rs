//! Pre-built Test Fixtures
//!
//! Provides people with known fiscal codes, plus valid and invalid code
//! strings. Every code here has been checked against the published
//! algorithm, so tests can compare generated output byte for byte.

use chrono::NaiveDate;
use domain_fiscal_code::{MockMunicipalityLookup, MunicipalityEntry, PersonalIdentifierInput, Sex};

/// A person whose fiscal code is known in advance
#[derive(Debug, Clone, Copy)]
pub struct KnownPerson {
    pub given_name: &'static str,
    pub surname: &'static str,
    pub birth_date: (i32, u32, u32),
    pub sex: Sex,
    pub cadastral_code: &'static str,
    pub fiscal_code: &'static str,
}

impl KnownPerson {
    /// Builds the generation input for this person
    pub fn input(&self) -> PersonalIdentifierInput {
        let (y, m, d) = self.birth_date;
        PersonalIdentifierInput::new(
            self.given_name,
            self.surname,
            NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid"),
            self.sex,
            self.cadastral_code,
        )
    }
}

/// People covering the main reduction and encoding cases
pub const KNOWN_PEOPLE: [KnownPerson; 7] = [
    KnownPerson {
        given_name: "Mario",
        surname: "Rossi",
        birth_date: (1985, 3, 15),
        sex: Sex::Male,
        cadastral_code: "F205",
        fiscal_code: "RSSMRA85C15F205U",
    },
    KnownPerson {
        given_name: "Giulia",
        surname: "Bianchi",
        birth_date: (1990, 7, 4),
        sex: Sex::Female,
        cadastral_code: "H501",
        fiscal_code: "BNCGLI90L44H501Q",
    },
    // short surname padded with X, vowel-heavy given name
    KnownPerson {
        given_name: "Ada",
        surname: "Lo",
        birth_date: (2001, 12, 31),
        sex: Sex::Female,
        cadastral_code: "L219",
        fiscal_code: "LOXDAA01T71L219E",
    },
    KnownPerson {
        given_name: "Francesco",
        surname: "De Luca",
        birth_date: (1978, 6, 1),
        sex: Sex::Male,
        cadastral_code: "F839",
        fiscal_code: "DLCFNC78H01F839K",
    },
    KnownPerson {
        given_name: "Anna",
        surname: "Fo",
        birth_date: (1960, 1, 9),
        sex: Sex::Female,
        cadastral_code: "A944",
        fiscal_code: "FOXNNA60A49A944E",
    },
    // 1st/3rd/4th consonant rule, apostrophe in surname
    KnownPerson {
        given_name: "Gianfranco",
        surname: "D'Angelo",
        birth_date: (1999, 10, 20),
        sex: Sex::Male,
        cadastral_code: "D612",
        fiscal_code: "DNGGFR99R20D612G",
    },
    // leap day, year 00
    KnownPerson {
        given_name: "Luca",
        surname: "Verdi",
        birth_date: (2000, 2, 29),
        sex: Sex::Male,
        cadastral_code: "L736",
        fiscal_code: "VRDLCU00B29L736K",
    },
];

/// Fixture for people and their inputs
pub struct PersonFixtures;

impl PersonFixtures {
    /// Mario Rossi, born in Milano on 1985-03-15
    pub fn mario_rossi() -> KnownPerson {
        KNOWN_PEOPLE[0]
    }

    /// Giulia Bianchi, born in Roma on 1990-07-04
    pub fn giulia_bianchi() -> KnownPerson {
        KNOWN_PEOPLE[1]
    }

    /// Ada Lo, born in Torino on 2001-12-31
    pub fn ada_lo() -> KnownPerson {
        KNOWN_PEOPLE[2]
    }

    /// Gianfranco D'Angelo, born in Firenze on 1999-10-20
    pub fn gianfranco_dangelo() -> KnownPerson {
        KNOWN_PEOPLE[5]
    }

    /// Every known person
    pub fn all() -> &'static [KnownPerson] {
        &KNOWN_PEOPLE
    }
}

/// Fixture for fiscal code strings
pub struct IdentifierFixtures;

impl IdentifierFixtures {
    /// A valid code
    pub fn valid() -> &'static str {
        "RSSMRA85C15F205U"
    }

    /// The valid code in lowercase, still valid
    pub fn valid_lowercase() -> &'static str {
        "rssmra85c15f205u"
    }

    /// Strings that must never validate
    pub fn invalid() -> Vec<&'static str> {
        vec![
            "",
            "RSSMRA85C15F205",
            "RSSMRA85C15F205UU",
            "RSSMRA85C15F205X",
            "RSSMR185C15F205U",
            "RSSMRA85C15F2O5U",
            "RSSMRA85C15F205-",
            "RSSMRÀ85C15F205U",
        ]
    }
}

/// Fixture for municipality data
pub struct MunicipalityFixtures;

impl MunicipalityFixtures {
    /// A small lookup with two names sharing the `MIL` prefix
    pub fn mock_lookup() -> MockMunicipalityLookup {
        MockMunicipalityLookup::new(vec![
            MunicipalityEntry::owned("Milano", "F205", "MI"),
            MunicipalityEntry::owned("Milazzo", "F206", "ME"),
            MunicipalityEntry::owned("Roma", "H501", "RM"),
        ])
    }
}
