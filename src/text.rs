//! Text preparation: normalization and the pre-split form the scorer consumes.

use crate::alphabet::{self, Symbol};
use std::ops::Range;

/// Lowercases and strips acute accents and diaeresis. `ñ` is kept, and
/// punctuation, digits and whitespace are untouched.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Alphabet letters of `text`, in order.
pub fn only_letters(text: &str) -> String {
    text.chars().filter(|&c| alphabet::index_of(c).is_some()).collect()
}

/// First `limit` characters, with `...` appended when something was cut.
pub fn preview(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// A normalized text split once into the pieces the scorer looks at.
///
/// `letters` is the letter-only projection as symbols. `words` holds, for
/// every whitespace-delimited token made only of letters, its span inside
/// `letters`. Tokens with any other character can never equal a lexicon word,
/// before or after substitution, so they are dropped here.
#[derive(Debug, Clone)]
pub struct Ciphertext {
    text: String,
    letters: Vec<Symbol>,
    words: Vec<Range<usize>>,
}

impl Ciphertext {
    /// `text` is expected to be normalized already.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut letters = Vec::with_capacity(text.len());
        let mut words = Vec::new();

        for token in text.split_whitespace() {
            let start = letters.len();
            let mut pure = true;
            for c in token.chars() {
                match alphabet::index_of(c) {
                    Some(s) => letters.push(s),
                    None => pure = false,
                }
            }
            if pure && letters.len() > start {
                words.push(start..letters.len());
            }
        }

        Self {
            text,
            letters,
            words,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[Symbol] {
        &self.letters
    }

    pub fn words(&self) -> &[Range<usize>] {
        &self.words
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_accents_but_keeps_enye() {
        assert_eq!(normalize("ÁRBOL Pingüino Niño"), "arbol pinguino niño");
        assert_eq!(normalize("¿Qué tal? 123"), "¿que tal? 123");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview("hola", 10), "hola");
        assert_eq!(preview("hola mundo", 4), "hola...");
        assert_eq!(preview("ñañaña", 3), "ñañ...");
    }

    #[test]
    fn ciphertext_tracks_pure_letter_words() {
        let ct = Ciphertext::new("la casa, de\tel 3 sol");
        assert_eq!(ct.letter_count(), 13);
        let words: Vec<String> = ct
            .words()
            .iter()
            .map(|r| ct.letters()[r.clone()].iter().map(|&s| alphabet::char_of(s)).collect())
            .collect();
        assert_eq!(words, vec!["la", "de", "el", "sol"]);
    }
}
