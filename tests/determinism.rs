use descifrador::optimizer::{Optimizer, SearchOptions, Silent};
use descifrador::scorer::Scorer;
use descifrador::text::Ciphertext;
use std::sync::Arc;

mod common;
use common::sample_pair;

fn small_options(parallel: bool) -> SearchOptions {
    SearchOptions::builder()
        .restarts(4)
        .iters(2_000)
        .parallel(parallel)
        .build()
}

#[test]
fn test_same_seed_same_result() {
    let (_, cipher_text) = sample_pair();
    let cipher = Ciphertext::new(cipher_text);
    let scorer = Arc::new(Scorer::spanish());

    let run_a = Optimizer::new(scorer.clone(), small_options(true)).run(&cipher, Some(1234), Silent);
    let run_b = Optimizer::new(scorer, small_options(true)).run(&cipher, Some(1234), Silent);

    assert_eq!(run_a.plaintext(), run_b.plaintext(), "Plaintext drifted!");
    assert_eq!(run_a.key(), run_b.key(), "Key drifted!");
    assert_eq!(run_a.score().to_bits(), run_b.score().to_bits(), "Score drifted!");
    assert_eq!(run_a.accepted, run_b.accepted);
}

#[test]
fn test_parallel_matches_sequential() {
    let (_, cipher_text) = sample_pair();
    let cipher = Ciphertext::new(cipher_text);
    let scorer = Arc::new(Scorer::spanish());

    let par = Optimizer::new(scorer.clone(), small_options(true)).run(&cipher, Some(99), Silent);
    let seq = Optimizer::new(scorer, small_options(false)).run(&cipher, Some(99), Silent);

    assert_eq!(par.plaintext(), seq.plaintext());
    assert_eq!(par.key(), seq.key());
    assert_eq!(par.score().to_bits(), seq.score().to_bits());
}

#[test]
fn test_scorer_is_stable() {
    let (plain, _) = sample_pair();
    let scorer = Scorer::spanish();
    let a = scorer.score_details(&plain);
    let b = scorer.score_details(&plain);
    assert_eq!(a, b);
}
