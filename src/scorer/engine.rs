use super::Scorer;
use crate::alphabet::{self, ALPHABET_LEN};
use crate::consts::{EMPTY_TEXT_SCORE, MAX_WORD_LEN};
use crate::key::Key;
use crate::scorer::types::ScoreDetails;
use crate::text::Ciphertext;

/// Scores `cipher` as it reads once decoded with `key`.
///
/// Works on the symbol projection directly: letters go through `key.image`
/// one by one, so no decoded string is built.
#[inline]
pub fn score_details(scorer: &Scorer, cipher: &Ciphertext, key: &Key) -> ScoreDetails {
    let letters = cipher.letters();
    let n = letters.len();
    if n == 0 {
        return ScoreDetails {
            total: EMPTY_TEXT_SCORE,
            ..Default::default()
        };
    }

    let mut bigram = 0.0;
    let mut trigram = 0.0;
    let mut vowels = 0usize;

    // Decoded symbols of the previous two positions.
    let mut p2 = 0usize;
    let mut p1 = 0usize;

    for (i, &c) in letters.iter().enumerate() {
        let p0 = key.image(c) as usize;
        if alphabet::is_vowel(p0 as u8) {
            vowels += 1;
        }
        if i >= 1 {
            bigram += scorer.bigram_scores[p1 * ALPHABET_LEN + p0];
        }
        if i >= 2 {
            trigram += scorer.trigram_scores[(p2 * ALPHABET_LEN + p1) * ALPHABET_LEN + p0];
        }
        p2 = p1;
        p1 = p0;
    }

    let mut lexicon_hits = 0;
    for span in cipher.words() {
        if span.len() > MAX_WORD_LEN {
            continue;
        }
        let packed = pack_word(letters[span.clone()].iter().map(|&c| key.image(c)));
        if scorer.lexicon.contains(&packed) {
            lexicon_hits += 1;
        }
    }
    let lexicon = lexicon_hits as f64 * scorer.weights.bonus_lexicon_word;

    let vowel_ratio = vowels as f64 / n as f64;
    let drift = vowel_ratio - scorer.weights.vowel_ratio_target;
    let vowel_penalty = scorer.weights.penalty_vowel_ratio * drift * drift;

    ScoreDetails {
        total: bigram + trigram + lexicon - vowel_penalty,
        bigram,
        trigram,
        lexicon,
        vowel_penalty,
        letters: n,
        vowel_ratio,
        lexicon_hits,
    }
}

/// Packs up to [`MAX_WORD_LEN`] symbols into one integer, base 28 with
/// digits shifted by one so that no word packs to the same value as a prefix.
#[inline(always)]
pub(crate) fn pack_word(symbols: impl Iterator<Item = u8>) -> u64 {
    symbols.fold(0u64, |acc, s| acc * (ALPHABET_LEN as u64 + 1) + s as u64 + 1)
}
