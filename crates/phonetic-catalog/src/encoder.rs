//! Text-to-phonetic encoder
//!
//! Expands input text one character per output line, sampling a group
//! member uniformly (with replacement) for every character.

use crate::entry::CatalogEntry;
use crate::error::WordListError;
use crate::word_list::fold_case;
use rand::Rng;

/// Phrase prepended to digits
pub const NUMBER_PREFIX: &str = "The number ";

/// Literal between a letter and its substitute word
pub const SEPARATOR: &str = "  -  ";

/// Encode text against a set of entries
///
/// Per character, one entry is sampled and exactly one
/// newline-terminated line is emitted:
/// - space: empty line
/// - digit: [`NUMBER_PREFIX`] followed by the digit
/// - other non-letter: the character unchanged
/// - uppercase letter: `LETTER  -  WORD` fully uppercased
/// - lowercase letter: `letter  -  word` fully lowercased
///
/// An empty entry set short-circuits to empty output.
///
/// # Errors
/// [`WordListError::NotAlphabetic`] for alphabetic characters with no
/// matching word.
pub fn encode<R: Rng + ?Sized>(
    text: &str,
    entries: &[&CatalogEntry],
    rng: &mut R,
) -> Result<String, WordListError> {
    if entries.is_empty() {
        return Ok(String::new());
    }

    let mut output = String::new();
    for c in text.chars() {
        let entry = entries[rng.random_range(0..entries.len())];

        if c == ' ' {
            // newline only
        } else if c.is_numeric() {
            output.push_str(NUMBER_PREFIX);
            output.push(c);
        } else if !c.is_alphabetic() {
            output.push(c);
        } else {
            let lower = fold_case(c);
            let word = entry.words().get(lower)?;
            let upper = c.to_uppercase().next().unwrap_or(c);
            if c == upper {
                output.push(upper);
                output.push_str(SEPARATOR);
                output.push_str(&word.to_uppercase());
            } else {
                output.push(lower);
                output.push_str(SEPARATOR);
                output.push_str(&word.to_lowercase());
            }
        }
        output.push('\n');
    }
    Ok(output)
}
