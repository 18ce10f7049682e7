// Character classification and case forms
//
// Positions in a word are Unicode scalar values. Case mappings follow the
// full Unicode tables, so a single character may lower- or upper-case to
// more than one character (e.g. 'ß' -> "SS").

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Returns `true` if the character takes part in case expansion.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

// ---------------------------------------------------------------------------
// Case forms
// ---------------------------------------------------------------------------

/// Full lowercase form of a character.
pub fn lower_form(c: char) -> String {
    c.to_lowercase().collect()
}

/// Full uppercase form of a character.
pub fn upper_form(c: char) -> String {
    c.to_uppercase().collect()
}

/// Lowercase a character when the mapping yields exactly one character.
///
/// Used as the lookup key for substitution pools: characters whose lowercase
/// form expands to several characters have no key and fall back to themselves.
pub fn single_lower(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// The case pool for one character: `[lower, upper]` for letters, `[c]`
/// otherwise.
///
/// Letters always get two entries, even when both forms are identical
/// (e.g. letters of caseless scripts), so the expansion size is exactly
/// `2^letters`.
pub fn case_pool(c: char) -> Vec<String> {
    if is_letter(c) {
        vec![lower_form(c), upper_form(c)]
    } else {
        vec![c.to_string()]
    }
}
