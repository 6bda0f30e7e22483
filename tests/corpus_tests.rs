// ===== gramforge/tests/corpus_tests.rs =====
use gramforge::corpus::{get_source, load_ranked_list, load_word_list, CorpusSet, SourceKind};
use std::fs::File;
use std::io::{Cursor, Write};
use std::str::FromStr;

#[test]
fn loader_reads_rank_order() {
    let data = "th\t100\nhe\t90\nin\t80\n";
    let list = load_ranked_list(Cursor::new(data)).expect("load failed");
    assert_eq!(list, vec!["th", "he", "in"]);
}

#[test]
fn loader_skips_malformed_rows() {
    let data = "th\t100\njust-one-field\nxx\tnot-a-number\nhe\t90\n\t5\n";
    let list = load_ranked_list(Cursor::new(data)).expect("load failed");
    assert_eq!(list, vec!["th", "he"]);
}

#[test]
fn loader_resorts_a_shuffled_file() {
    let data = "he\t90\nth\t100\nin\t80\n";
    let list = load_ranked_list(Cursor::new(data)).expect("load failed");
    assert_eq!(list, vec!["th", "he", "in"]);
}

#[test]
fn load_from_dir_tolerates_missing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bigrams.tsv");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "th\t100").unwrap();
    writeln!(file, "he\t90").unwrap();

    let set = CorpusSet::load_from_dir(dir.path()).expect("dir load failed");
    assert_eq!(set.bigrams, vec!["th", "he"]);
    assert!(set.trigrams.is_empty());
    assert!(set.tetragrams.is_empty());
    assert!(set.words.is_empty());
}

#[test]
fn embedded_corpora_are_ranked_and_nonempty() {
    let set = CorpusSet::embedded();
    assert!(!set.bigrams.is_empty());
    assert!(!set.trigrams.is_empty());
    assert!(!set.tetragrams.is_empty());
    assert!(!set.words.is_empty());

    // Rank 1 of the English bigram corpus.
    assert_eq!(set.bigrams[0], "th");
    assert_eq!(set.words[0], "the");
}

#[test]
fn word_list_splits_on_whitespace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "alpha beta").unwrap();
    writeln!(file, "  gamma\tdelta").unwrap();

    let words = load_word_list(&path).expect("word list load failed");
    assert_eq!(words, vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn get_source_resolves_builtin_kinds() {
    let set = CorpusSet {
        bigrams: vec!["th".to_string()],
        trigrams: vec!["the".to_string()],
        tetragrams: vec!["tion".to_string()],
        words: vec!["the".to_string()],
    };

    assert_eq!(get_source(SourceKind::Bigrams, &set, None), ["th"]);
    assert_eq!(get_source(SourceKind::Trigrams, &set, None), ["the"]);
    assert_eq!(get_source(SourceKind::Tetragrams, &set, None), ["tion"]);
    assert_eq!(get_source(SourceKind::Words, &set, None), ["the"]);
}

#[test]
fn get_source_custom_without_words_is_empty() {
    let set = CorpusSet::default();
    assert!(get_source(SourceKind::CustomWords, &set, None).is_empty());
}

#[test]
fn get_source_custom_prefers_supplied_words() {
    let set = CorpusSet::default();
    let custom = vec!["practice".to_string(), "these".to_string()];
    assert_eq!(
        get_source(SourceKind::CustomWords, &set, Some(&custom)),
        ["practice", "these"]
    );
}

#[test]
fn source_kind_parses_snake_case_names() {
    assert_eq!(SourceKind::from_str("bigrams").unwrap(), SourceKind::Bigrams);
    assert_eq!(
        SourceKind::from_str("custom_words").unwrap(),
        SourceKind::CustomWords
    );
    assert!(SourceKind::from_str("pentagrams").is_err());
}

#[test]
fn source_kind_displays_snake_case() {
    assert_eq!(SourceKind::Tetragrams.to_string(), "tetragrams");
    assert_eq!(SourceKind::CustomWords.to_string(), "custom_words");
}
