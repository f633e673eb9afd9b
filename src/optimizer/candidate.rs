use crate::key::Key;
use crate::scorer::Scorer;
use crate::text::Ciphertext;
use serde::Serialize;

/// One point of the search: a key together with the text it decodes to and
/// that text's score. The three are only ever produced together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    key: Key,
    plaintext: String,
    score: f64,
}

impl Candidate {
    pub fn evaluate(key: Key, cipher: &Ciphertext, scorer: &Scorer) -> Self {
        let score = scorer.score_with_key(cipher, &key);
        Self::scored(key, score, cipher)
    }

    /// `score` must be the score of `key` on `cipher`.
    pub(crate) fn scored(key: Key, score: f64, cipher: &Ciphertext) -> Self {
        Self {
            plaintext: key.apply(cipher.text()),
            key,
            score,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_parts(self) -> (Key, String, f64) {
        (self.key, self.plaintext, self.score)
    }
}
