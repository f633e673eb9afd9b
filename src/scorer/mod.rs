pub mod engine;
pub mod loader;
pub mod tables;
pub mod types;

pub use self::tables::ScoreTables;
pub use self::types::ScoreDetails;
use crate::alphabet::{self, ALPHABET_LEN};
use crate::config::ScoringWeights;
use crate::consts::MAX_WORD_LEN;
use crate::error::CipherResult;
use crate::key::Key;
use crate::text::Ciphertext;
use fnv::FnvHashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Fitness of candidate Spanish plaintexts. Higher is better.
///
/// The score is a plain sum over the text, so it grows with text length.
/// Only scores of decodings of the same ciphertext are comparable.
#[derive(Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,

    // Dense lookups, unseen n-grams pre-filled with their penalty.
    // bigram index: a * 27 + b, trigram index: (a * 27 + b) * 27 + c
    pub(crate) bigram_scores: Vec<f64>,
    pub(crate) trigram_scores: Vec<f64>,

    pub(crate) lexicon: FnvHashSet<u64>,
}

impl Scorer {
    pub fn new(tables: &ScoreTables, weights: ScoringWeights) -> Self {
        let mut bigram_scores = vec![-weights.penalty_unseen_bigram; ALPHABET_LEN.pow(2)];
        for (gram, w) in &tables.bigrams {
            match alphabet::symbols_of(gram).as_deref() {
                Some(&[a, b]) => {
                    bigram_scores[a as usize * ALPHABET_LEN + b as usize] = *w;
                }
                _ => warn!("Ignoring bigram entry '{}': not two letters", gram),
            }
        }

        let mut trigram_scores = vec![-weights.penalty_unseen_trigram; ALPHABET_LEN.pow(3)];
        for (gram, w) in &tables.trigrams {
            match alphabet::symbols_of(gram).as_deref() {
                Some(&[a, b, c]) => {
                    let idx = (a as usize * ALPHABET_LEN + b as usize) * ALPHABET_LEN + c as usize;
                    trigram_scores[idx] = *w;
                }
                _ => warn!("Ignoring trigram entry '{}': not three letters", gram),
            }
        }

        let mut lexicon = FnvHashSet::default();
        for word in &tables.lexicon {
            match alphabet::symbols_of(word) {
                Some(symbols) if !symbols.is_empty() && symbols.len() <= MAX_WORD_LEN => {
                    lexicon.insert(engine::pack_word(symbols.into_iter()));
                }
                // Accented or uppercase words can never occur in normalized text.
                _ => debug!("Lexicon word '{}' can never match, skipped", word),
            }
        }

        Self {
            weights,
            bigram_scores,
            trigram_scores,
            lexicon,
        }
    }

    /// Built-in Spanish tables with default weights.
    pub fn spanish() -> Self {
        Self::new(&ScoreTables::spanish(), ScoringWeights::default())
    }

    /// Tables from `dir` (see [`loader::load_tables`]).
    pub fn from_dir<P: AsRef<Path>>(dir: P, weights: ScoringWeights) -> CipherResult<Self> {
        let tables = loader::load_tables(dir)?;
        Ok(Self::new(&tables, weights))
    }

    /// Scores an already normalized plaintext.
    pub fn score(&self, plaintext: &str) -> f64 {
        self.score_details(plaintext).total
    }

    pub fn score_details(&self, plaintext: &str) -> ScoreDetails {
        engine::score_details(self, &Ciphertext::new(plaintext), &Key::identity())
    }

    /// Same value as `score(&key.apply(cipher.text()))`, without building the string.
    #[inline]
    pub fn score_with_key(&self, cipher: &Ciphertext, key: &Key) -> f64 {
        engine::score_details(self, cipher, key).total
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::spanish()
    }
}
