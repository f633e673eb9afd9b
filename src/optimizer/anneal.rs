use super::mutation;
use super::runner::SearchOptions;
use crate::consts::TEMP_EPSILON;
use crate::key::Key;
use crate::scorer::Scorer;
use crate::text::Ciphertext;
use fastrand::Rng;

/// What a single restart hands back to the runner.
#[derive(Debug, Clone)]
pub struct RestartOutcome {
    pub restart: usize,
    pub start_score: f64,
    /// Best state reached by an accepted move, earliest one on ties.
    /// `None` when no move was ever accepted.
    pub best: Option<(Key, f64)>,
    pub accepted: usize,
}

/// The current state of one annealing trajectory.
pub struct Annealer<'a> {
    scorer: &'a Scorer,
    cipher: &'a Ciphertext,

    pub key: Key,
    pub score: f64,

    pub rng: Rng,
}

impl<'a> Annealer<'a> {
    pub fn new(scorer: &'a Scorer, cipher: &'a Ciphertext, start: Key, rng: Rng) -> Self {
        let score = scorer.score_with_key(cipher, &start);
        Self {
            scorer,
            cipher,
            key: start,
            score,
            rng,
        }
    }

    /// Linear cooling from `temp_start`, clamped at `temp_min`. `step` is 1-based.
    #[inline(always)]
    pub fn temperature(step: usize, iters: usize, opts: &SearchOptions) -> f64 {
        let progress = step as f64 / iters as f64;
        (opts.temp_start * (1.0 - progress)).max(opts.temp_min)
    }

    /// Metropolis test. Improvements and ties always pass.
    #[inline(always)]
    fn accepts(&mut self, delta: f64, temperature: f64) -> bool {
        delta >= 0.0 || self.rng.f64() < (delta / temperature.max(TEMP_EPSILON)).exp()
    }

    /// Runs `opts.iters` proposals from the current state.
    pub fn run(&mut self, restart: usize, opts: &SearchOptions) -> RestartOutcome {
        let start_score = self.score;
        let mut best: Option<(Key, f64)> = None;
        let mut accepted = 0;

        for step in 1..=opts.iters {
            let temperature = Self::temperature(step, opts.iters, opts);
            let proposal = mutation::random_swap(&self.key, &mut self.rng);
            let proposal_score = self.scorer.score_with_key(self.cipher, &proposal);
            let delta = proposal_score - self.score;

            if self.accepts(delta, temperature) {
                self.key = proposal;
                self.score = proposal_score;
                accepted += 1;

                let improved = match best {
                    Some((_, s)) => self.score > s,
                    None => true,
                };
                if improved {
                    best = Some((self.key, self.score));
                }
            }
        }

        RestartOutcome {
            restart,
            start_score,
            best,
            accepted,
        }
    }
}
