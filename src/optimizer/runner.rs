use super::anneal::{Annealer, RestartOutcome};
use super::candidate::Candidate;
use super::mutation;
use crate::config::Config;
use crate::consts::*;
use crate::key::Key;
use crate::scorer::Scorer;
use crate::seeder::{seed_key, LetterCounts};
use crate::text::Ciphertext;
use fastrand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug, Clone, PartialEq, Serialize)]
pub struct SearchOptions {
    #[builder(default = DEFAULT_RESTARTS)]
    pub restarts: usize,
    #[builder(default = DEFAULT_ITERS)]
    pub iters: usize,
    #[builder(default = DEFAULT_TEMP_START)]
    pub temp_start: f64,
    #[builder(default = DEFAULT_TEMP_MIN)]
    pub temp_min: f64,
    #[builder(default = DEFAULT_SHAKES)]
    pub shakes: usize,
    #[builder(default = true)]
    pub force_e: bool,
    #[builder(default = true)]
    pub parallel: bool,
}

impl SearchOptions {
    /// Proposals across all restarts, saturating instead of overflowing.
    pub fn total_iterations(&self) -> usize {
        self.restarts.saturating_mul(self.iters)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            iters: cfg.search.iters,
            temp_start: cfg.search.temp_start,
            temp_min: cfg.search.temp_min,
            shakes: cfg.search.shakes,
            force_e: cfg.search.force_e,
            parallel: cfg.search.parallel,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestartReport {
    pub restart: usize,
    pub start_score: f64,
    pub best_score: Option<f64>,
    pub accepted: usize,
}

/// Notified once per finished restart. With parallel restarts the calls come
/// from worker threads in completion order.
pub trait ProgressCallback: Send + Sync {
    fn on_restart(&self, report: &RestartReport);
}

/// A callback that ignores every report.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_restart(&self, _report: &RestartReport) {}
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub best: Candidate,
    pub seed_key: Key,
    pub seed_score: f64,
    pub restarts: usize,
    pub iterations: usize,
    pub accepted: usize,
}

impl SearchResult {
    pub fn key(&self) -> &Key {
        self.best.key()
    }

    pub fn plaintext(&self) -> &str {
        self.best.plaintext()
    }

    pub fn score(&self) -> f64 {
        self.best.score()
    }
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: SearchOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Seeds a key from letter frequencies, then anneals from it `restarts` times.
    ///
    /// Restart `r` draws from its own generator seeded with `seed + r`, so a
    /// seeded run gives the same result whether restarts run in parallel or not.
    pub fn run<CB: ProgressCallback>(
        &self,
        cipher: &Ciphertext,
        seed: Option<u64>,
        callback: CB,
    ) -> SearchResult {
        let opts = &self.options;
        let scorer = self.scorer.as_ref();

        // 1. Seed
        let counts = LetterCounts::from_symbols(cipher.letters());
        let base_key = seed_key(&counts, opts.force_e);
        let seed_candidate = Candidate::evaluate(base_key, cipher, scorer);
        let seed_score = seed_candidate.score();

        info!(
            "Seed key {} scores {:.2} over {} letters",
            base_key,
            seed_score,
            cipher.letter_count()
        );

        // 2. Restarts
        let run_restart = |r: usize| -> RestartOutcome {
            let mut rng = match seed {
                Some(s) => Rng::with_seed(s.wrapping_add(r as u64)),
                None => Rng::new(),
            };
            let start = if r == 0 {
                base_key
            } else {
                mutation::shake(&base_key, opts.shakes, &mut rng)
            };

            let mut annealer = Annealer::new(scorer, cipher, start, rng);
            let outcome = annealer.run(r, opts);

            let report = RestartReport {
                restart: r,
                start_score: outcome.start_score,
                best_score: outcome.best.map(|(_, s)| s),
                accepted: outcome.accepted,
            };
            debug!(
                "Restart {} done: start {:.2}, best {:?}, {} accepted",
                r, report.start_score, report.best_score, report.accepted
            );
            callback.on_restart(&report);

            outcome
        };

        let outcomes: Vec<RestartOutcome> = if opts.parallel {
            (0..opts.restarts).into_par_iter().map(run_restart).collect()
        } else {
            (0..opts.restarts).map(run_restart).collect()
        };

        // 3. Global best, merged in restart order
        let mut best_key = base_key;
        let mut best_score = seed_score;
        let mut accepted = 0;
        for outcome in &outcomes {
            accepted += outcome.accepted;
            if let Some((key, score)) = outcome.best {
                if score > best_score {
                    best_key = key;
                    best_score = score;
                }
            }
        }

        let best = if best_key == base_key {
            seed_candidate
        } else {
            Candidate::scored(best_key, best_score, cipher)
        };

        SearchResult {
            best,
            seed_key: base_key,
            seed_score,
            restarts: opts.restarts,
            iterations: opts.total_iterations(),
            accepted,
        }
    }
}
