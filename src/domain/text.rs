//! Pure string transforms performed by the workers.
//!
//! Both operate on Unicode scalar values, never on bytes.

/// Character substituted for every vowel by [`mask_vowels`].
pub const PLACEHOLDER: char = '*';

const VOWELS: &str = "AEIOUaeiou";

/// Reverse the character sequence, then uppercase it.
///
/// Uppercasing uses the full Unicode mapping, so a single character may
/// expand (`'ß'` becomes `"SS"`).
pub fn reverse_upper(content: &str) -> String {
    content.chars().rev().collect::<String>().to_uppercase()
}

/// Replace each ASCII vowel with [`PLACEHOLDER`]; everything else passes through.
pub fn mask_vowels(content: &str) -> String {
    content
        .chars()
        .map(|c| if is_vowel(c) { PLACEHOLDER } else { c })
        .collect()
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}
