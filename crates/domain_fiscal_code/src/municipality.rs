//! Municipality registry
//!
//! A static table of Italian municipalities (provincial capitals) with their
//! cadastral codes. The table is built at compile time, sorted by name, and
//! never mutated, so lookups need no synchronization.
//!
//! Foreign-country codes (`Z***`) are not part of the dataset.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::MunicipalityLookup;

/// Default maximum number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default minimum query length for searches
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

/// A municipality and its cadastral code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MunicipalityEntry {
    /// Uppercase place name
    pub name: Cow<'static, str>,
    /// 1 letter + 3 digits, e.g. `F205`
    pub cadastral_code: Cow<'static, str>,
    /// 2-letter province abbreviation
    pub province: Cow<'static, str>,
}

impl MunicipalityEntry {
    /// Creates a borrowed entry for the static table
    pub const fn new(name: &'static str, cadastral_code: &'static str, province: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            cadastral_code: Cow::Borrowed(cadastral_code),
            province: Cow::Borrowed(province),
        }
    }

    /// Creates an owned entry; values are uppercased
    pub fn owned(name: &str, cadastral_code: &str, province: &str) -> Self {
        Self {
            name: Cow::Owned(name.to_uppercase()),
            cadastral_code: Cow::Owned(cadastral_code.to_uppercase()),
            province: Cow::Owned(province.to_uppercase()),
        }
    }

    /// Case-insensitive substring match against name or province
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_uppercase();
        self.name.contains(query.as_str()) || self.province.contains(query.as_str())
    }
}

static MUNICIPALITIES: &[MunicipalityEntry] = &[
    MunicipalityEntry::new("AGRIGENTO", "A089", "AG"),
    MunicipalityEntry::new("ALESSANDRIA", "A182", "AL"),
    MunicipalityEntry::new("ANCONA", "A271", "AN"),
    MunicipalityEntry::new("AOSTA", "A326", "AO"),
    MunicipalityEntry::new("AREZZO", "A390", "AR"),
    MunicipalityEntry::new("ASCOLI PICENO", "A462", "AP"),
    MunicipalityEntry::new("ASTI", "A479", "AT"),
    MunicipalityEntry::new("AVELLINO", "A509", "AV"),
    MunicipalityEntry::new("BARI", "A662", "BA"),
    MunicipalityEntry::new("BARLETTA", "A669", "BT"),
    MunicipalityEntry::new("BELLUNO", "A757", "BL"),
    MunicipalityEntry::new("BENEVENTO", "A783", "BN"),
    MunicipalityEntry::new("BERGAMO", "A794", "BG"),
    MunicipalityEntry::new("BIELLA", "A859", "BI"),
    MunicipalityEntry::new("BOLOGNA", "A944", "BO"),
    MunicipalityEntry::new("BOLZANO", "A952", "BZ"),
    MunicipalityEntry::new("BRESCIA", "B157", "BS"),
    MunicipalityEntry::new("BRINDISI", "B180", "BR"),
    MunicipalityEntry::new("CAGLIARI", "B354", "CA"),
    MunicipalityEntry::new("CALTANISSETTA", "B429", "CL"),
    MunicipalityEntry::new("CAMPOBASSO", "B519", "CB"),
    MunicipalityEntry::new("CASERTA", "B963", "CE"),
    MunicipalityEntry::new("CATANIA", "C351", "CT"),
    MunicipalityEntry::new("CATANZARO", "C352", "CZ"),
    MunicipalityEntry::new("CESENA", "C573", "FC"),
    MunicipalityEntry::new("CHIETI", "C632", "CH"),
    MunicipalityEntry::new("COMO", "C933", "CO"),
    MunicipalityEntry::new("COSENZA", "D086", "CS"),
    MunicipalityEntry::new("CREMONA", "D150", "CR"),
    MunicipalityEntry::new("CROTONE", "D122", "KR"),
    MunicipalityEntry::new("CUNEO", "D205", "CN"),
    MunicipalityEntry::new("ENNA", "C342", "EN"),
    MunicipalityEntry::new("FERMO", "D542", "FM"),
    MunicipalityEntry::new("FERRARA", "D548", "FE"),
    MunicipalityEntry::new("FIRENZE", "D612", "FI"),
    MunicipalityEntry::new("FOGGIA", "D643", "FG"),
    MunicipalityEntry::new("FORLI", "D704", "FC"),
    MunicipalityEntry::new("FROSINONE", "D810", "FR"),
    MunicipalityEntry::new("GENOVA", "D969", "GE"),
    MunicipalityEntry::new("GORIZIA", "E098", "GO"),
    MunicipalityEntry::new("GROSSETO", "E202", "GR"),
    MunicipalityEntry::new("IMPERIA", "E290", "IM"),
    MunicipalityEntry::new("ISERNIA", "E335", "IS"),
    MunicipalityEntry::new("L'AQUILA", "A345", "AQ"),
    MunicipalityEntry::new("LA SPEZIA", "E463", "SP"),
    MunicipalityEntry::new("LATINA", "E472", "LT"),
    MunicipalityEntry::new("LECCE", "E506", "LE"),
    MunicipalityEntry::new("LECCO", "E507", "LC"),
    MunicipalityEntry::new("LIVORNO", "E625", "LI"),
    MunicipalityEntry::new("LODI", "E648", "LO"),
    MunicipalityEntry::new("LUCCA", "E715", "LU"),
    MunicipalityEntry::new("MACERATA", "E783", "MC"),
    MunicipalityEntry::new("MANTOVA", "E897", "MN"),
    MunicipalityEntry::new("MASSA", "F023", "MS"),
    MunicipalityEntry::new("MATERA", "F052", "MT"),
    MunicipalityEntry::new("MESSINA", "F158", "ME"),
    MunicipalityEntry::new("MILANO", "F205", "MI"),
    MunicipalityEntry::new("MODENA", "F257", "MO"),
    MunicipalityEntry::new("MONZA", "F704", "MB"),
    MunicipalityEntry::new("NAPOLI", "F839", "NA"),
    MunicipalityEntry::new("NOVARA", "F952", "NO"),
    MunicipalityEntry::new("NUORO", "F979", "NU"),
    MunicipalityEntry::new("ORISTANO", "G113", "OR"),
    MunicipalityEntry::new("PADOVA", "G224", "PD"),
    MunicipalityEntry::new("PALERMO", "G273", "PA"),
    MunicipalityEntry::new("PARMA", "G337", "PR"),
    MunicipalityEntry::new("PAVIA", "G388", "PV"),
    MunicipalityEntry::new("PERUGIA", "G478", "PG"),
    MunicipalityEntry::new("PESARO", "G479", "PU"),
    MunicipalityEntry::new("PESCARA", "G482", "PE"),
    MunicipalityEntry::new("PIACENZA", "G535", "PC"),
    MunicipalityEntry::new("PISA", "G702", "PI"),
    MunicipalityEntry::new("PISTOIA", "G713", "PT"),
    MunicipalityEntry::new("PORDENONE", "G888", "PN"),
    MunicipalityEntry::new("POTENZA", "G942", "PZ"),
    MunicipalityEntry::new("PRATO", "G999", "PO"),
    MunicipalityEntry::new("RAGUSA", "H163", "RG"),
    MunicipalityEntry::new("RAVENNA", "H199", "RA"),
    MunicipalityEntry::new("REGGIO CALABRIA", "H224", "RC"),
    MunicipalityEntry::new("REGGIO EMILIA", "H223", "RE"),
    MunicipalityEntry::new("REGGIO NELL'EMILIA", "H223", "RE"),
    MunicipalityEntry::new("RIETI", "H282", "RI"),
    MunicipalityEntry::new("RIMINI", "H294", "RN"),
    MunicipalityEntry::new("ROMA", "H501", "RM"),
    MunicipalityEntry::new("ROVIGO", "H620", "RO"),
    MunicipalityEntry::new("SALERNO", "H703", "SA"),
    MunicipalityEntry::new("SASSARI", "I452", "SS"),
    MunicipalityEntry::new("SAVONA", "I480", "SV"),
    MunicipalityEntry::new("SIENA", "I726", "SI"),
    MunicipalityEntry::new("SIRACUSA", "I754", "SR"),
    MunicipalityEntry::new("SONDRIO", "I829", "SO"),
    MunicipalityEntry::new("TARANTO", "L049", "TA"),
    MunicipalityEntry::new("TERAMO", "L103", "TE"),
    MunicipalityEntry::new("TERNI", "L117", "TR"),
    MunicipalityEntry::new("TORINO", "L219", "TO"),
    MunicipalityEntry::new("TRAPANI", "L331", "TP"),
    MunicipalityEntry::new("TRENTO", "L378", "TN"),
    MunicipalityEntry::new("TREVISO", "L407", "TV"),
    MunicipalityEntry::new("TRIESTE", "L424", "TS"),
    MunicipalityEntry::new("UDINE", "L483", "UD"),
    MunicipalityEntry::new("VARESE", "L682", "VA"),
    MunicipalityEntry::new("VENEZIA", "L736", "VE"),
    MunicipalityEntry::new("VERBANIA", "L746", "VB"),
    MunicipalityEntry::new("VERCELLI", "L750", "VC"),
    MunicipalityEntry::new("VERONA", "L781", "VR"),
    MunicipalityEntry::new("VIBO VALENTIA", "F537", "VV"),
    MunicipalityEntry::new("VICENZA", "L840", "VI"),
    MunicipalityEntry::new("VITERBO", "M082", "VT"),
];

/// Returns the whole table in name order
pub fn entries() -> &'static [MunicipalityEntry] {
    MUNICIPALITIES
}

/// Searches names and provinces with the default limits
///
/// At most 10 entries; queries under 2 characters return nothing.
pub fn lookup_by_name(query: &str) -> Vec<&'static MunicipalityEntry> {
    lookup_with_limits(query, DEFAULT_SEARCH_LIMIT, DEFAULT_MIN_QUERY_LENGTH)
}

/// Searches names and provinces with explicit limits
pub fn lookup_with_limits(
    query: &str,
    limit: usize,
    min_query_length: usize,
) -> Vec<&'static MunicipalityEntry> {
    if query.chars().count() < min_query_length {
        return Vec::new();
    }

    let needle = query.to_uppercase();
    let matches: Vec<_> = MUNICIPALITIES
        .iter()
        .filter(|e| e.name.contains(needle.as_str()) || e.province.contains(needle.as_str()))
        .take(limit)
        .collect();

    debug!(query_len = query.len(), results = matches.len(), "Municipality search");
    matches
}

/// Finds a municipality by its exact name, ignoring case
pub fn lookup_by_exact_name(name: &str) -> Option<&'static MunicipalityEntry> {
    let name = name.to_uppercase();
    MUNICIPALITIES.iter().find(|e| e.name == name.as_str())
}

/// Finds a municipality by cadastral code, ignoring case
pub fn lookup_by_code(code: &str) -> Option<&'static MunicipalityEntry> {
    let code = code.to_uppercase();
    MUNICIPALITIES.iter().find(|e| e.cadastral_code == code.as_str())
}

/// Searches municipalities for a form's autocomplete
///
/// Never fails: short or empty queries and zero matches all give an empty list.
pub fn search_municipalities(query: &str) -> Vec<MunicipalityEntry> {
    lookup_by_name(query).into_iter().cloned().collect()
}

/// The built-in static table behind the `MunicipalityLookup` port
#[derive(Debug, Clone, Copy, Default)]
pub struct MunicipalityRegistry;

impl MunicipalityRegistry {
    /// Number of entries in the table
    pub fn len(&self) -> usize {
        MUNICIPALITIES.len()
    }

    /// True if the table is empty
    pub fn is_empty(&self) -> bool {
        MUNICIPALITIES.is_empty()
    }
}

impl MunicipalityLookup for MunicipalityRegistry {
    fn search(&self, query: &str, limit: usize, min_query_length: usize) -> Vec<MunicipalityEntry> {
        lookup_with_limits(query, limit, min_query_length)
            .into_iter()
            .cloned()
            .collect()
    }

    fn find_by_exact_name(&self, name: &str) -> Option<MunicipalityEntry> {
        lookup_by_exact_name(name).cloned()
    }

    fn find_by_code(&self, code: &str) -> Option<MunicipalityEntry> {
        lookup_by_code(code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_cadastral_code;

    #[test]
    fn test_table_size() {
        assert_eq!(entries().len(), 108);
        assert_eq!(MunicipalityRegistry.len(), 108);
    }

    #[test]
    fn test_table_is_sorted_by_name() {
        assert!(entries().windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_table_entries_are_well_formed() {
        for entry in entries() {
            assert!(is_cadastral_code(&entry.cadastral_code), "bad code for {}", entry.name);
            assert_eq!(entry.cadastral_code.to_uppercase(), entry.cadastral_code, "code not uppercase: {}", entry.name);
            assert_eq!(entry.province.len(), 2, "bad province for {}", entry.name);
            assert_eq!(entry.name.to_uppercase(), entry.name, "name not uppercase: {}", entry.name);
        }
    }

    #[test]
    fn test_lookup_by_code() {
        let entry = lookup_by_code("f205").unwrap();
        assert_eq!(entry.name, "MILANO");
        assert_eq!(entry.province, "MI");
        assert!(lookup_by_code("Z999").is_none());
    }

    #[test]
    fn test_lookup_by_code_shared_code_returns_first() {
        assert_eq!(lookup_by_code("H223").unwrap().name, "REGGIO EMILIA");
    }

    #[test]
    fn test_lookup_by_exact_name() {
        assert_eq!(lookup_by_exact_name("Roma").unwrap().cadastral_code, "H501");
        assert_eq!(lookup_by_exact_name("l'aquila").unwrap().cadastral_code, "A345");
        assert!(lookup_by_exact_name("ROM").is_none());
    }

    #[test]
    fn test_lookup_by_name_matches_name_and_province() {
        let names: Vec<&str> = lookup_by_name("mi").into_iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, vec!["MILANO", "REGGIO EMILIA", "REGGIO NELL'EMILIA", "RIMINI"]);
    }

    #[test]
    fn test_lookup_by_province_only() {
        let results = lookup_by_name("FC");
        let names: Vec<&str> = results.iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, vec!["CESENA", "FORLI"]);
    }

    #[test]
    fn test_lookup_by_name_caps_results() {
        let results = lookup_by_name("IA");
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].name, "ALESSANDRIA");
        assert_eq!(results[9].name, "PAVIA");
    }

    #[test]
    fn test_short_query_returns_nothing() {
        assert!(lookup_by_name("").is_empty());
        assert!(lookup_by_name("M").is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(search_municipalities("QQQ").is_empty());
    }

    #[test]
    fn test_custom_limits() {
        assert_eq!(lookup_with_limits("IA", 3, 2).len(), 3);
        assert_eq!(lookup_with_limits("M", 10, 1).first().unwrap().name, "BERGAMO");
    }

    #[test]
    fn test_registry_port() {
        let registry = MunicipalityRegistry;
        assert_eq!(registry.find_by_code("h501").unwrap().name, "ROMA");
        assert_eq!(registry.search("TORINO", 10, 2).len(), 1);
    }

    #[test]
    fn test_entry_serialization() {
        let json = serde_json::to_string(lookup_by_code("F205").unwrap()).unwrap();
        assert_eq!(json, r#"{"name":"MILANO","cadastral_code":"F205","province":"MI"}"#);
        let back: MunicipalityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, lookup_by_code("F205").unwrap());
    }
}
