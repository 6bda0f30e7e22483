// ===== gramforge/tests/generator_tests.rs =====
use gramforge::config::DrillParams;
use gramforge::generator::{generate_phrases, OrderedPermuter, RandomPermuter};

fn params(scope: Option<usize>, combination: usize, repetition: usize) -> DrillParams {
    DrillParams {
        scope,
        combination,
        repetition,
    }
}

fn grams(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_source_yields_no_phrases() {
    let phrases = generate_phrases(&[], &params(Some(50), 2, 3), &mut RandomPermuter::new());
    assert!(phrases.is_empty());
}

#[test]
fn ordered_permuter_produces_exact_phrases() {
    let source = grams(&["a", "b", "c", "d"]);
    let phrases = generate_phrases(&source, &params(None, 2, 2), &mut OrderedPermuter);
    assert_eq!(phrases, vec!["a b a b".to_string(), "c d c d".to_string()]);
}

#[test]
fn final_short_chunk_is_not_padded() {
    let source = grams(&["th", "he", "in", "er", "an"]);
    let phrases = generate_phrases(&source, &params(None, 2, 3), &mut OrderedPermuter);
    assert_eq!(phrases.len(), 3);
    assert_eq!(phrases[2], "an an an");
}

#[test]
fn phrase_count_is_the_chunk_ceiling() {
    let source: Vec<String> = (0..7).map(|i| format!("g{}", i)).collect();
    let phrases = generate_phrases(&source, &params(None, 3, 1), &mut RandomPermuter::new());
    assert_eq!(phrases.len(), 3);
}

#[test]
fn scope_draws_only_from_the_top_ranked_prefix() {
    let source: Vec<String> = (0..10).map(|i| format!("rank{}", i)).collect();
    let phrases = generate_phrases(
        &source,
        &params(Some(2), 1, 2),
        &mut RandomPermuter::with_seed(7),
    );

    assert_eq!(phrases.len(), 2);
    for phrase in &phrases {
        for token in phrase.split(' ') {
            assert!(
                token == "rank0" || token == "rank1",
                "token '{}' escaped the scope",
                token
            );
        }
    }
}

#[test]
fn scope_larger_than_source_uses_everything() {
    let source = grams(&["a", "b"]);
    let phrases = generate_phrases(&source, &params(Some(50), 1, 1), &mut OrderedPermuter);
    assert_eq!(phrases, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn every_entry_lands_in_exactly_one_phrase() {
    let source: Vec<String> = (0..12).map(|i| format!("g{}", i)).collect();
    let phrases = generate_phrases(
        &source,
        &params(None, 3, 1),
        &mut RandomPermuter::with_seed(99),
    );

    let mut seen: Vec<&str> = phrases.iter().flat_map(|p| p.split(' ')).collect();
    seen.sort_unstable();
    let mut expected: Vec<&str> = source.iter().map(String::as_str).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn repetition_repeats_each_sub_phrase_contiguously() {
    let source: Vec<String> = (0..9).map(|i| format!("g{}", i)).collect();
    let repetition = 3;
    let phrases = generate_phrases(
        &source,
        &params(None, 2, repetition),
        &mut RandomPermuter::with_seed(5),
    );

    for phrase in &phrases {
        let tokens: Vec<&str> = phrase.split(' ').collect();
        assert_eq!(tokens.len() % repetition, 0);
        let chunk = tokens.len() / repetition;
        for r in 1..repetition {
            assert_eq!(
                &tokens[..chunk],
                &tokens[r * chunk..(r + 1) * chunk],
                "repetition {} diverged in '{}'",
                r,
                phrase
            );
        }
    }
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let source: Vec<String> = (0..20).map(|i| format!("g{}", i)).collect();
    let p = params(None, 2, 2);

    let first = generate_phrases(&source, &p, &mut RandomPermuter::with_seed(42));
    let second = generate_phrases(&source, &p, &mut RandomPermuter::with_seed(42));
    assert_eq!(first, second);
}

#[test]
fn source_is_never_mutated() {
    let source = grams(&["a", "b", "c", "d", "e"]);
    let before = source.clone();
    let _ = generate_phrases(&source, &params(Some(3), 2, 2), &mut RandomPermuter::new());
    assert_eq!(source, before);
}
