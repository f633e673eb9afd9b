//! Frequency-based initial keys.

use crate::alphabet::{self, Symbol, ALPHABET_LEN};
use crate::key::Key;
use itertools::Itertools;

const E: Symbol = 4;

/// Letter counts of a text, remembering where each letter first showed up so
/// that equal counts keep a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [usize; ALPHABET_LEN],
    first_seen: [usize; ALPHABET_LEN],
}

impl LetterCounts {
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = [0; ALPHABET_LEN];
        let mut first_seen = [usize::MAX; ALPHABET_LEN];
        for (pos, &s) in symbols.iter().enumerate() {
            let idx = s as usize;
            if counts[idx] == 0 {
                first_seen[idx] = pos;
            }
            counts[idx] += 1;
        }
        Self { counts, first_seen }
    }

    pub fn from_text(text: &str) -> Self {
        let symbols: Vec<Symbol> = text.chars().filter_map(alphabet::index_of).collect();
        Self::from_symbols(&symbols)
    }

    pub fn count(&self, s: Symbol) -> usize {
        self.counts[s as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Every symbol, most frequent first. Symbols that never occur come last
    /// in alphabet order.
    pub fn ranked(&self) -> Vec<Symbol> {
        let seen = (0..ALPHABET_LEN as Symbol)
            .filter(|&s| self.counts[s as usize] > 0)
            .sorted_by(|&a, &b| {
                self.counts[b as usize]
                    .cmp(&self.counts[a as usize])
                    .then(self.first_seen[a as usize].cmp(&self.first_seen[b as usize]))
            });
        let unseen = (0..ALPHABET_LEN as Symbol).filter(|&s| self.counts[s as usize] == 0);
        seen.chain(unseen).collect()
    }
}

/// Pairs the i-th most frequent cipher symbol with the i-th letter of the
/// Spanish reference order. With `force_e`, `e` leads the target order.
pub fn seed_key(counts: &LetterCounts, force_e: bool) -> Key {
    let cipher_order = counts.ranked();

    let mut target = alphabet::reference_order();
    if force_e {
        target.retain(|&s| s != E);
        target.insert(0, E);
    }

    let mut proposal = [None; ALPHABET_LEN];
    for (i, &cipher) in cipher_order.iter().enumerate() {
        proposal[cipher as usize] = Some(target[i % target.len()]);
    }

    Key::from_proposal(&proposal)
}
