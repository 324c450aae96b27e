use crate::error::LadderError;
use crate::word::ladder::*;
use crate::word::{Dictionary, NeighborStrategy};

fn classic_dict() -> Dictionary {
    ["hot", "dot", "dog", "lot", "log", "cog"].into_iter().collect()
}

fn words(ladder: &Ladder) -> Vec<&str> {
    ladder.words().iter().map(String::as_str).collect()
}

#[test]
fn test_shortest_ladder_classic() {
    let dict = classic_dict();
    let ladder = generate_word_ladder("hot", "cog", &dict).unwrap();

    assert_eq!(ladder.len(), 4);
    assert_eq!(ladder.steps(), 3);
    assert_eq!(words(&ladder), vec!["hot", "dot", "dog", "cog"]);
    verify_ladder(ladder.words(), &dict).unwrap();
}

#[test]
fn test_begin_outside_dictionary() {
    let dict = classic_dict();
    let ladder = generate_word_ladder("hit", "cog", &dict).unwrap();

    assert_eq!(ladder.begin(), "hit");
    assert_eq!(ladder.end(), "cog");
    assert_eq!(ladder.len(), 5);
    assert_eq!(words(&ladder), vec!["hit", "hot", "dot", "dog", "cog"]);
}

#[test]
fn test_direct_neighbor_is_a_two_word_ladder() {
    let dict: Dictionary = ["cot"].into_iter().collect();
    let ladder = generate_word_ladder("cat", "cot", &dict).unwrap();
    assert_eq!(words(&ladder), vec!["cat", "cot"]);
    assert_eq!(ladder.steps(), 1);
}

#[test]
fn test_ladder_through_words_of_other_lengths() {
    let dict: Dictionary = ["cat", "cot", "coat", "boat"].into_iter().collect();
    let ladder = generate_word_ladder("at", "boat", &dict).unwrap();
    assert_eq!(words(&ladder), vec!["at", "cat", "coat", "boat"]);
}

#[test]
fn test_same_word_is_degenerate() {
    let err = generate_word_ladder("same", "same", &Dictionary::new()).unwrap_err();
    assert!(matches!(err, LadderError::DegenerateInput { .. }));

    let dict: Dictionary = ["same", "sane"].into_iter().collect();
    let err = generate_word_ladder("same", "same", &dict).unwrap_err();
    assert!(matches!(err, LadderError::DegenerateInput { .. }));
}

#[test]
fn test_target_missing_from_dictionary() {
    let err = generate_word_ladder("hot", "cot", &classic_dict()).unwrap_err();
    match err {
        LadderError::InvalidTarget { begin, end } => {
            assert_eq!(begin, "hot");
            assert_eq!(end, "cot");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_target_check_precedes_length_check() {
    let err = generate_word_ladder("a", "abcd", &Dictionary::new()).unwrap_err();
    assert!(matches!(err, LadderError::InvalidTarget { .. }));
}

#[test]
fn test_incompatible_length() {
    let dict: Dictionary = ["a", "ab", "abc"].into_iter().collect();
    let err = generate_word_ladder("a", "abc", &dict).unwrap_err();
    assert!(matches!(err, LadderError::IncompatibleLength { .. }));
}

#[test]
fn test_no_path() {
    let dict: Dictionary = ["cat", "dog"].into_iter().collect();
    let err = generate_word_ladder("cat", "dog", &dict).unwrap_err();
    assert!(matches!(err, LadderError::NoPathExists { .. }));
    assert!(err.is_no_ladder());
}

#[test]
fn test_max_steps_limits_search() {
    let dict = classic_dict();

    let opts = LadderOptions {
        max_steps: Some(2),
        ..Default::default()
    };
    let err = generate_word_ladder_with("hot", "cog", &dict, &opts).unwrap_err();
    assert!(matches!(err, LadderError::NoPathExists { .. }));

    let opts = LadderOptions {
        max_steps: Some(3),
        ..Default::default()
    };
    let ladder = generate_word_ladder_with("hot", "cog", &dict, &opts).unwrap();
    assert_eq!(ladder.steps(), 3);
}

#[test]
fn test_strategies_agree() {
    let dict: Dictionary = [
        "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "cork", "corm",
    ]
    .into_iter()
    .collect();

    let scan = LadderOptions {
        strategy: NeighborStrategy::Scan,
        ..Default::default()
    };
    let generate = LadderOptions {
        strategy: NeighborStrategy::Generate,
        ..Default::default()
    };

    let a = generate_word_ladder_with("cold", "warm", &dict, &scan).unwrap();
    let b = generate_word_ladder_with("cold", "warm", &dict, &generate).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.steps(), 4);
    verify_ladder(a.words(), &dict).unwrap();
}

#[test]
fn test_search_is_repeatable() {
    let dict = classic_dict();
    let first = generate_word_ladder("hot", "cog", &dict).unwrap();
    let second = generate_word_ladder("hot", "cog", &dict).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_verify_ladder_rejects_bad_sequences() {
    let dict = classic_dict();

    let err = verify_ladder(&["hot"], &dict).unwrap_err();
    assert!(matches!(err, LadderError::InvalidLadder { index: 1, .. }));

    let err = verify_ladder(&["hot", "dot", "hot"], &dict).unwrap_err();
    assert!(matches!(err, LadderError::InvalidLadder { index: 2, .. }));

    let err = verify_ladder(&["hot", "dog"], &dict).unwrap_err();
    assert!(err.to_string().contains("not one edit away"));

    let err = verify_ladder(&["hot", "hat"], &dict).unwrap_err();
    assert!(err.to_string().contains("not in the dictionary"));
}

#[test]
fn test_ladder_from_words() {
    let dict = classic_dict();
    let ladder = Ladder::from_words(
        vec!["hot".to_string(), "lot".to_string(), "log".to_string()],
        &dict,
    )
    .unwrap();
    assert_eq!(ladder.steps(), 2);

    assert!(Ladder::from_words(vec!["hot".to_string(), "cog".to_string()], &dict).is_err());
}

#[test]
fn test_ladder_serializes_as_word_list() {
    let dict: Dictionary = ["cot"].into_iter().collect();
    let ladder = generate_word_ladder("cat", "cot", &dict).unwrap();
    let json = serde_json::to_string(&ladder).unwrap();
    assert_eq!(json, r#"["cat","cot"]"#);
}
