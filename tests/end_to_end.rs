use descifrador::consts::EMPTY_TEXT_SCORE;
use descifrador::optimizer::{Optimizer, SearchOptions, Silent};
use descifrador::scorer::Scorer;
use descifrador::seeder::{seed_key, LetterCounts};
use descifrador::text::{normalize, Ciphertext};
use descifrador::{decipher, decipher_spanish};
use std::sync::Arc;

mod common;
use common::{encryption_key, letter_agreement, sample_pair, SPANISH_SAMPLE};

#[test]
fn test_recovers_encrypted_sample() {
    let (plain, cipher) = sample_pair();
    let scorer = Arc::new(Scorer::spanish());

    let result = decipher(&cipher, scorer.clone(), SearchOptions::default(), Some(42));

    assert!(result.key().is_bijection());
    assert_eq!(result.plaintext(), result.key().apply(&cipher));

    let seed = seed_key(&LetterCounts::from_text(&cipher), true);
    let seed_score = scorer.score(&seed.apply(&cipher));
    assert_eq!(result.seed_score, seed_score);
    assert!(
        result.score() > seed_score,
        "search did not improve on the seed: {} <= {}",
        result.score(),
        seed_score
    );

    let agreement = letter_agreement(&plain, result.plaintext());
    println!("Recovered {:.1}% of letters", agreement * 100.0);
    assert!(agreement > 0.8, "only {:.2} of letters recovered", agreement);
}

#[test]
fn test_recovered_key_mostly_inverts_encryption() {
    let (_, cipher) = sample_pair();
    let result = decipher_spanish(&cipher, Some(7));
    let truth = encryption_key().inverse();

    // The most frequent Spanish letters must come back right.
    for c in ['e', 'a'] {
        let cipher_letter = encryption_key().image_of_char(c).unwrap();
        assert_eq!(
            result.key().image_of_char(cipher_letter),
            truth.image_of_char(cipher_letter),
            "'{}' not recovered",
            c
        );
    }
}

#[test]
fn test_score_is_never_below_seed() {
    let cipher = encryption_key().apply(&normalize("el gato duerme en la casa de la abuela"));
    let options = SearchOptions::builder().restarts(3).iters(500).build();
    let result = decipher(&cipher, Arc::new(Scorer::spanish()), options, Some(3));
    assert!(result.score() >= result.seed_score);
    assert_eq!(result.restarts, 3);
    assert_eq!(result.iterations, 1_500);
}

#[test]
fn test_letterless_input_returns_seed() {
    let cipher = Ciphertext::new("¡¿ 123 ... !!");
    let options = SearchOptions::builder().restarts(2).iters(100).build();
    let optimizer = Optimizer::new(Arc::new(Scorer::spanish()), options);

    let result = optimizer.run(&cipher, Some(5), Silent);

    assert_eq!(result.score(), EMPTY_TEXT_SCORE);
    assert_eq!(result.key(), &result.seed_key);
    assert_eq!(result.plaintext(), "¡¿ 123 ... !!");
}

#[test]
fn test_zero_restarts_returns_seed_candidate() {
    let (_, cipher) = sample_pair();
    let options = SearchOptions::builder().restarts(0).build();
    let result = decipher(&cipher, Arc::new(Scorer::spanish()), options, Some(1));
    assert_eq!(result.key(), &result.seed_key);
    assert_eq!(result.score(), result.seed_score);
    assert_eq!(result.accepted, 0);
}

#[test]
fn test_case_is_normalized_before_search() {
    let cipher = encryption_key().apply(&normalize(SPANISH_SAMPLE));
    let shouted = cipher.to_uppercase();
    let options = SearchOptions::builder().restarts(2).iters(300).build();
    let scorer = Arc::new(Scorer::spanish());

    let a = decipher(&cipher, scorer.clone(), options.clone(), Some(11));
    let b = decipher(&shouted, scorer, options, Some(11));

    assert_eq!(a.plaintext(), b.plaintext());
    assert_eq!(a.score(), b.score());
}
