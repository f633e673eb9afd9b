//! One-call entry points for library users.

use crate::optimizer::{Optimizer, SearchOptions, SearchResult, Silent};
use crate::scorer::Scorer;
use crate::text::{normalize, Ciphertext};
use std::sync::Arc;

/// Normalizes `raw` and searches for the key that turns it back into Spanish.
pub fn decipher(
    raw: &str,
    scorer: Arc<Scorer>,
    options: SearchOptions,
    seed: Option<u64>,
) -> SearchResult {
    let cipher = Ciphertext::new(normalize(raw));
    Optimizer::new(scorer, options).run(&cipher, seed, Silent)
}

/// [`decipher`] with the built-in Spanish tables and default options.
pub fn decipher_spanish(raw: &str, seed: Option<u64>) -> SearchResult {
    decipher(raw, Arc::new(Scorer::spanish()), SearchOptions::default(), seed)
}
