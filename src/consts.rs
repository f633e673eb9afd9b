/// Score given to any text without a single alphabet letter. Far below what
/// any real decoding can reach, so such candidates never win.
pub const EMPTY_TEXT_SCORE: f64 = -1e9;

/// Lower bound on the temperature used in the acceptance test.
pub const TEMP_EPSILON: f64 = 1e-6;

/// Longest token that can match a lexicon word (packed into a u64, base 28).
pub const MAX_WORD_LEN: usize = 12;

/// Characters of normalized ciphertext shown before the result.
pub const PREVIEW_CHARS: usize = 400;

pub const DEFAULT_RESTARTS: usize = 10;
pub const DEFAULT_ITERS: usize = 20_000;
pub const DEFAULT_TEMP_START: f64 = 2.0;
pub const DEFAULT_TEMP_MIN: f64 = 0.01;

/// Random image swaps applied to the seed key before every restart but the first.
pub const DEFAULT_SHAKES: usize = 50;
