use clap::{Args, Command, FromArgMatches};
use descifrador::config::{Config, ScoringWeights};
use descifrador::optimizer::SearchOptions;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_agree() {
    let cfg = Config::default();
    assert_eq!(SearchOptions::from(&cfg), SearchOptions::default());

    let opts = SearchOptions::default();
    assert_eq!(opts.restarts, 10);
    assert_eq!(opts.iters, 20_000);
    assert_eq!(opts.temp_start, 2.0);
    assert_eq!(opts.temp_min, 0.01);
    assert!(opts.force_e);

    let w = ScoringWeights::default();
    assert_eq!(w.penalty_unseen_bigram, 0.8);
    assert_eq!(w.penalty_unseen_trigram, 0.5);
    assert_eq!(w.bonus_lexicon_word, 6.0);
    assert_eq!(w.vowel_ratio_target, 0.45);
    assert_eq!(w.penalty_vowel_ratio, 50.0);
}

#[test]
fn test_partial_weights_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "bonus_lexicon_word": 9.5 }}"#).unwrap();

    let w = ScoringWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.bonus_lexicon_word, 9.5);
    assert_eq!(w.penalty_unseen_bigram, 0.8);
    assert_eq!(w.penalty_vowel_ratio, 50.0);
}

#[test]
fn test_bad_weights_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(ScoringWeights::load_from_file(file.path()).is_err());
    assert!(ScoringWeights::load_from_file("/definitely/not/here.json").is_err());
}

#[test]
fn test_cli_flags_override_file_values() {
    let cmd = ScoringWeights::augment_args(Command::new("test"));
    let matches = cmd
        .try_get_matches_from(["test", "--penalty-vowel-ratio", "10"])
        .unwrap();
    let cli_weights = ScoringWeights::from_arg_matches(&matches).unwrap();

    let mut file_weights = ScoringWeights {
        bonus_lexicon_word: 1.0,
        penalty_vowel_ratio: 99.0,
        ..Default::default()
    };
    file_weights.merge_from_cli(&cli_weights, &matches);

    // Typed on the command line: wins over the file.
    assert_eq!(file_weights.penalty_vowel_ratio, 10.0);
    // Only a clap default: the file value survives.
    assert_eq!(file_weights.bonus_lexicon_word, 1.0);
}

#[test]
fn test_search_flags_parse() {
    let cmd = Config::augment_args(Command::new("test"));
    let matches = cmd
        .try_get_matches_from([
            "test",
            "--restarts",
            "3",
            "--iters",
            "100",
            "--force-e",
            "false",
            "--parallel",
            "false",
        ])
        .unwrap();
    let cfg = Config::from_arg_matches(&matches).unwrap();
    let opts = SearchOptions::from(&cfg);

    assert_eq!(opts.restarts, 3);
    assert_eq!(opts.iters, 100);
    assert!(!opts.force_e);
    assert!(!opts.parallel);
    assert_eq!(opts.shakes, 50);
}

#[test]
fn test_total_iterations_saturates() {
    let opts = SearchOptions::builder().restarts(3).iters(100).build();
    assert_eq!(opts.total_iterations(), 300);

    let huge = SearchOptions::builder().restarts(4).iters(usize::MAX).build();
    assert_eq!(huge.total_iterations(), usize::MAX);
}
