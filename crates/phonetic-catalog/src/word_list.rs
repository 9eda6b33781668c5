//! Fixed 26-slot alphabet-ordered word list
//!
//! A [`WordList`] holds one substitute word per letter a–z, in strict
//! alphabet order. An empty list is a valid lifecycle stage of its own
//! (a never-initialized list), not an error state.

use crate::error::WordListError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The alphabet every word list is bound to
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of slots in a populated word list
pub const ALPHABET_LEN: usize = 26;

/// Case-fold a character the way slot matching does
#[inline]
pub(crate) fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Ordered word list with one word per letter
///
/// Either empty (default stage) or exactly [`ALPHABET_LEN`] words where
/// slot *i* leads with the *i*-th letter of [`ALPHABET`],
/// case-insensitively. Bulk replacement validates both; mutation is by
/// letter only. Serializes as a bare JSON string array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a validated word list
    ///
    /// # Errors
    /// [`WordListError::WrongLength`] or
    /// [`WordListError::LeadingLetterMismatch`] on an invalid list.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        let mut list = Self::default();
        list.replace_all(words)?;
        Ok(list)
    }

    /// The placeholder list, `"<letter>_default"` per slot
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            words: ALPHABET.chars().map(|c| format!("{c}_default")).collect(),
        }
    }

    /// Check if the list is still in its never-initialized stage
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get number of words held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Get the words as a slice
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the word for a letter
    ///
    /// Scans for the word whose leading character case-insensitively
    /// matches `letter`.
    ///
    /// # Errors
    /// [`WordListError::NotAlphabetic`] if no word matches.
    pub fn get(&self, letter: char) -> Result<&str, WordListError> {
        let folded = fold_case(letter);
        self.words
            .iter()
            .find(|word| word.chars().next().map(fold_case) == Some(folded))
            .map(String::as_str)
            .ok_or(WordListError::NotAlphabetic(letter))
    }

    /// Set the word for a letter
    ///
    /// A never-initialized list is populated with the placeholder words
    /// first, then the letter's fixed slot is overwritten.
    ///
    /// # Errors
    /// [`WordListError::NotAlphabetic`] if the letter is outside the
    /// alphabet.
    pub fn set(&mut self, letter: char, word: impl Into<String>) -> Result<(), WordListError> {
        let folded = fold_case(letter);
        let slot = ALPHABET
            .chars()
            .position(|c| c == folded)
            .ok_or(WordListError::NotAlphabetic(letter))?;
        if self.words.is_empty() {
            *self = Self::defaults();
        }
        self.words[slot] = word.into();
        Ok(())
    }

    /// Replace the whole list after validating it
    ///
    /// On violation the list is left unchanged; the caller decides the
    /// recovery policy.
    ///
    /// # Errors
    /// - [`WordListError::WrongLength`] if not exactly 26 words
    /// - [`WordListError::LeadingLetterMismatch`] if any word does not
    ///   lead with its slot's letter
    pub fn replace_all(&mut self, words: Vec<String>) -> Result<(), WordListError> {
        if words.len() != ALPHABET_LEN {
            return Err(WordListError::WrongLength(words.len()));
        }
        for (word, expected) in words.iter().zip(ALPHABET.chars()) {
            if word.chars().next().map(fold_case) != Some(expected) {
                return Err(WordListError::LeadingLetterMismatch {
                    word: word.clone(),
                    expected,
                });
            }
        }
        self.words = words;
        Ok(())
    }
}

impl Display for WordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.words.join(", "))
    }
}
