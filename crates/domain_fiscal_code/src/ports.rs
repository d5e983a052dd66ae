//! Municipality Lookup Port
//!
//! The generator and the service facade read municipalities through the
//! `MunicipalityLookup` trait so that the built-in static table can be swapped
//! for another source (a fuller national dataset, a fixture in tests).
//!
//! # Usage
//!
//! ```rust
//! use domain_fiscal_code::ports::MunicipalityLookup;
//! use domain_fiscal_code::municipality::MunicipalityRegistry;
//!
//! let registry = MunicipalityRegistry;
//! let milano = registry.find_by_exact_name("milano").unwrap();
//! assert_eq!(milano.cadastral_code, "F205");
//! ```

use crate::municipality::MunicipalityEntry;

/// Read-only access to a municipality dataset
///
/// Implementations must be safe to share between threads and must never
/// mutate the dataset observed by callers.
pub trait MunicipalityLookup: Send + Sync {
    /// Case-insensitive substring search over name and province
    ///
    /// Returns an empty list for queries shorter than `min_query_length`
    /// characters and at most `limit` entries, in dataset order.
    fn search(&self, query: &str, limit: usize, min_query_length: usize) -> Vec<MunicipalityEntry>;

    /// Case-insensitive exact match on the municipality name
    fn find_by_exact_name(&self, name: &str) -> Option<MunicipalityEntry>;

    /// Case-insensitive exact match on the cadastral code
    fn find_by_code(&self, code: &str) -> Option<MunicipalityEntry>;
}

/// Mock lookup for tests
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;

    /// Lookup over a caller-supplied list of entries
    #[derive(Debug, Clone, Default)]
    pub struct MockMunicipalityLookup {
        entries: Vec<MunicipalityEntry>,
    }

    impl MockMunicipalityLookup {
        /// Creates a lookup over the given entries, kept in the given order
        pub fn new(entries: Vec<MunicipalityEntry>) -> Self {
            Self { entries }
        }

        /// Adds an entry at the end
        pub fn with_entry(mut self, entry: MunicipalityEntry) -> Self {
            self.entries.push(entry);
            self
        }
    }

    impl MunicipalityLookup for MockMunicipalityLookup {
        fn search(&self, query: &str, limit: usize, min_query_length: usize) -> Vec<MunicipalityEntry> {
            if query.chars().count() < min_query_length {
                return Vec::new();
            }
            self.entries
                .iter()
                .filter(|e| e.matches(query))
                .take(limit)
                .cloned()
                .collect()
        }

        fn find_by_exact_name(&self, name: &str) -> Option<MunicipalityEntry> {
            let name = name.to_uppercase();
            self.entries.iter().find(|e| e.name == name).cloned()
        }

        fn find_by_code(&self, code: &str) -> Option<MunicipalityEntry> {
            let code = code.to_uppercase();
            self.entries.iter().find(|e| e.cadastral_code == code).cloned()
        }
    }
}
