//! Payload assembly
//!
//! Pure concatenation of the four upstream codes. Lengths are guaranteed by
//! the components that produce them; nothing is checked here.

/// Joins surname code, given-name code, birth block and municipality code
/// into the 15-character payload
pub fn assemble(
    surname_code: &str,
    name_code: &str,
    date_sex_block: &str,
    municipality_code: &str,
) -> String {
    let mut payload = String::with_capacity(
        surname_code.len() + name_code.len() + date_sex_block.len() + municipality_code.len(),
    );
    payload.push_str(surname_code);
    payload.push_str(name_code);
    payload.push_str(date_sex_block);
    payload.push_str(municipality_code);
    payload
}
