//! Name reduction
//!
//! Surnames and given names are reduced to three letters. Both rules work on
//! the letters A-Z only: input is uppercased with full Unicode case mapping
//! and anything outside A-Z is then dropped. `ß` becomes `SS` and survives;
//! `È` stays non-ASCII and is dropped, like apostrophes and spaces.
//!
//! - Surname: consonants, then vowels, then `X` padding; first three.
//! - Given name: as the surname, except that with more than three consonants
//!   the 1st, 3rd and 4th consonant are taken.

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Padding appended when a name has fewer than three letters
pub const PADDING: &str = "XXX";

/// Length of a reduced name code
pub const CODE_LEN: usize = 3;

/// Consonants and vowels of a name, each in original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLetters {
    pub consonants: Vec<char>,
    pub vowels: Vec<char>,
}

impl NameLetters {
    /// Splits `text` into its A-Z consonants and vowels
    pub fn from_text(text: &str) -> Self {
        let mut letters = NameLetters::default();
        for c in uppercase_letters(text) {
            if VOWELS.contains(&c) {
                letters.vowels.push(c);
            } else {
                letters.consonants.push(c);
            }
        }
        letters
    }

    /// True when the name has no letters left after stripping
    pub fn is_empty(&self) -> bool {
        self.consonants.is_empty() && self.vowels.is_empty()
    }

    fn padded_code(&self) -> String {
        self.consonants
            .iter()
            .chain(self.vowels.iter())
            .copied()
            .chain(PADDING.chars())
            .take(CODE_LEN)
            .collect()
    }
}

/// Uppercased characters of `text` that fall in A-Z
fn uppercase_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
}

/// Returns true if `text` has at least one letter A-Z after uppercasing
pub fn has_letters(text: &str) -> bool {
    uppercase_letters(text).next().is_some()
}

/// Reduces a surname to its three-letter code
///
/// # Examples
///
/// ```
/// use domain_fiscal_code::transliteration::reduce_surname;
///
/// assert_eq!(reduce_surname("Rossi"), "RSS");
/// assert_eq!(reduce_surname("Fo"), "FOX");
/// ```
pub fn reduce_surname(text: &str) -> String {
    NameLetters::from_text(text).padded_code()
}

/// Reduces a given name to its three-letter code
///
/// # Examples
///
/// ```
/// use domain_fiscal_code::transliteration::reduce_given_name;
///
/// assert_eq!(reduce_given_name("Mario"), "MRA");
/// assert_eq!(reduce_given_name("Gianfranco"), "GFR");
/// ```
pub fn reduce_given_name(text: &str) -> String {
    let letters = NameLetters::from_text(text);
    match letters.consonants.as_slice() {
        [first, _, third, fourth, ..] => [*first, *third, *fourth].iter().collect(),
        _ => letters.padded_code(),
    }
}
