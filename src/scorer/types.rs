use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line
    pub total: f64,

    // Weighted components (penalty is subtracted from the total)
    pub bigram: f64,
    pub trigram: f64,
    pub lexicon: f64,
    pub vowel_penalty: f64,

    // === STATISTICAL COUNTERS ===
    pub letters: usize,
    pub vowel_ratio: f64,
    pub lexicon_hits: usize,
}
