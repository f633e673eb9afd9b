use crate::consts::*;
use crate::error::CipherResult;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Independent annealing runs.
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,
    /// Proposals per restart.
    #[arg(long, default_value_t = DEFAULT_ITERS)]
    pub iters: usize,
    #[arg(long, default_value_t = DEFAULT_TEMP_START)]
    pub temp_start: f64,
    #[arg(long, default_value_t = DEFAULT_TEMP_MIN)]
    pub temp_min: f64,
    #[arg(long, default_value_t = DEFAULT_SHAKES)]
    pub shakes: usize,
    /// Force the most frequent cipher letter onto 'e' when seeding.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub force_e: bool,
    /// Run restarts on the rayon thread pool.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            iters: DEFAULT_ITERS,
            temp_start: DEFAULT_TEMP_START,
            temp_min: DEFAULT_TEMP_MIN,
            shakes: DEFAULT_SHAKES,
            force_e: true,
            parallel: true,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === N-GRAMS ===
    #[arg(long, default_value_t = 0.8)]
    pub penalty_unseen_bigram: f64,
    #[arg(long, default_value_t = 0.5)]
    pub penalty_unseen_trigram: f64,

    // === LEXICON ===
    #[arg(long, default_value_t = 6.0)]
    pub bonus_lexicon_word: f64,

    // === VOWELS ===
    #[arg(long, default_value_t = 0.45)]
    pub vowel_ratio_target: f64,
    #[arg(long, default_value_t = 50.0)]
    pub penalty_vowel_ratio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            penalty_unseen_bigram: 0.8,
            penalty_unseen_trigram: 0.5,
            bonus_lexicon_word: 6.0,
            vowel_ratio_target: 0.45,
            penalty_vowel_ratio: 50.0,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CipherResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every weight the user typed on the command line over the
    /// current (file-loaded) values. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(penalty_unseen_bigram, "penalty_unseen_bigram");
        update_if_present!(penalty_unseen_trigram, "penalty_unseen_trigram");
        update_if_present!(bonus_lexicon_word, "bonus_lexicon_word");
        update_if_present!(vowel_ratio_target, "vowel_ratio_target");
        update_if_present!(penalty_vowel_ratio, "penalty_vowel_ratio");
    }
}
