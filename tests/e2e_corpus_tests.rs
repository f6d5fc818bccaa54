//! End-to-end tests for corpus assembly and queries.

mod common;

use common::{sources, CHARACTERS, CONVERSATIONS, CONVERSATION_COUNT, LINES, MOVIES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spamplay::corpus::{
    Corpus, CorpusError, EntityKind, ErrorPolicy, Gender, ParseOptions, RecordError,
};
use std::sync::Arc;

fn assemble() -> Corpus {
    Corpus::assemble(&sources(), ParseOptions::default()).unwrap()
}

// =============================================================================
// Assembly Tests
// =============================================================================

#[test]
fn test_assembly_is_deterministic() {
    let first = assemble();
    let second = assemble();

    assert_eq!(
        first.movies().ids().collect::<Vec<_>>(),
        second.movies().ids().collect::<Vec<_>>()
    );
    assert_eq!(
        first.characters().ids().collect::<Vec<_>>(),
        second.characters().ids().collect::<Vec<_>>()
    );
    assert_eq!(
        first.lines().ids().collect::<Vec<_>>(),
        second.lines().ids().collect::<Vec<_>>()
    );
    for (a, b) in first.lines().iter().zip(second.lines().iter()) {
        assert_eq!(a, b);
    }
    assert_eq!(first.conversations(), second.conversations());
}

#[test]
fn test_every_character_points_to_a_known_movie() {
    let corpus = assemble();
    assert_eq!(corpus.characters().len(), 7);
    for character in corpus.characters().iter() {
        let movie = corpus.movie(character.movie.id).unwrap();
        assert!(Arc::ptr_eq(movie, &character.movie));
    }
}

#[test]
fn test_conversation_participants_share_the_conversation_movie() {
    let corpus = assemble();
    assert_eq!(corpus.conversations().len(), CONVERSATION_COUNT);
    for conversation in corpus.conversations() {
        assert_eq!(conversation.characters.0.movie.id, conversation.movie.id);
        assert_eq!(conversation.characters.1.movie.id, conversation.movie.id);
    }
}

#[test]
fn test_conversation_lines_follow_source_order() {
    let corpus = assemble();
    let reversed = &corpus.conversations()[4];
    let ids: Vec<u32> = reversed.lines.iter().map(|line| line.id).collect();
    assert_eq!(ids, vec![5001, 5000]);
    assert_eq!(reversed.characters.0.name, "Eddie");
    assert_eq!(reversed.characters.1.name, "Emil");
}

#[test]
fn test_movie_example_record() {
    let corpus = assemble();
    let movie = corpus.movie(0).unwrap();
    assert_eq!(movie.title, "10 Things I Hate About You");
    assert_eq!(movie.year, 1999);
    assert_eq!(movie.imdb_rating, 6.90);
    assert_eq!(movie.imdb_vote_count, 62847);
    assert_eq!(movie.genres, vec!["comedy", "romance"]);
}

#[test]
fn test_question_mark_gender_decodes_to_unknown() {
    let corpus = assemble();
    let bruce = corpus.character(1).unwrap();
    assert_eq!(bruce.gender, Gender::Unknown);
    assert_eq!(bruce.credit_position, None);
    assert_eq!(corpus.character(13).unwrap().gender, Gender::Male);
}

#[test]
fn test_empty_utterance_is_kept() {
    let corpus = assemble();
    assert_eq!(corpus.line(200).unwrap().text, "");
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_records_with_wrong_field_count_are_skipped() {
    let mut sources = sources();
    sources.movies.push_str("m7 +++$+++ too short +++$+++ 2000\n");
    sources.movies.push_str(
        "m8 +++$+++ too long +++$+++ 2000 +++$+++ 1.0 +++$+++ 1 +++$+++ [] +++$+++ extra\n",
    );
    let corpus = Corpus::assemble(&sources, ParseOptions::default()).unwrap();

    assert_eq!(corpus.movies().len(), 3);
    assert!(corpus.movie(7).is_none());
    assert!(corpus.movie(8).is_none());
    let report = &corpus.reports()[0];
    assert_eq!(report.pass, EntityKind::Movie);
    assert_eq!(report.skipped(), 2);
    assert_eq!(
        report.problems[0].error,
        RecordError::FieldCount {
            expected: 6,
            found: 3
        }
    );
    assert_eq!(
        report.problems[1].error,
        RecordError::FieldCount {
            expected: 6,
            found: 7
        }
    );
}

#[test]
fn test_skipped_movie_cascades_to_dependent_records() {
    let movies: String = MOVIES
        .lines()
        .filter(|line| !line.starts_with("m1 "))
        .map(|line| format!("{line}\n"))
        .collect();
    let sources = spamplay::CorpusSources {
        movies,
        characters: CHARACTERS.to_owned(),
        lines: LINES.to_owned(),
        conversations: CONVERSATIONS.to_owned(),
    };
    let corpus = Corpus::assemble(&sources, ParseOptions::default()).unwrap();

    assert!(corpus.is_fully_parsed());
    assert!(corpus.character(13).is_none());
    assert!(corpus.character(14).is_none());
    assert!(corpus.line(3000).is_none());
    assert_eq!(corpus.conversations().len(), CONVERSATION_COUNT - 1);
    assert_eq!(corpus.reports()[1].skipped(), 2);
    assert_eq!(corpus.reports()[2].skipped(), 2);
    assert_eq!(corpus.reports()[3].skipped(), 1);
}

#[test]
fn test_unextractable_line_list_is_a_distinct_failure() {
    let mut sources = sources();
    sources
        .conversations
        .push_str("u0 +++$+++ u2 +++$+++ m0 +++$+++ ['194', '195']\n");
    let corpus = Corpus::assemble(&sources, ParseOptions::default()).unwrap();

    let report = &corpus.reports()[3];
    assert_eq!(report.hard_failures(), 1);
    assert_eq!(report.skipped(), 0);
    let problem = &report.problems[0];
    assert!(problem.is_hard());
    assert_eq!(problem.line_number, 6);
    assert!(matches!(problem.error, RecordError::NoLineIds { .. }));
    assert_eq!(corpus.conversations().len(), CONVERSATION_COUNT);
}

#[test]
fn test_strict_policy_rejects_unextractable_line_list() {
    let mut sources = sources();
    sources
        .conversations
        .push_str("u0 +++$+++ u2 +++$+++ m0 +++$+++ []\n");
    let options = ParseOptions {
        policy: ErrorPolicy::Strict,
        ..Default::default()
    };

    let err = Corpus::assemble(&sources, options).unwrap_err();
    match err {
        CorpusError::StrictPolicyViolation(problem) => assert!(problem.is_hard()),
        other => panic!("unexpected error {other:?}"),
    }
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_random_conversation_stays_in_bounds_and_covers_all() {
    let corpus = assemble();
    let conversations = corpus.conversations();
    let mut rng = StdRng::seed_from_u64(1492);
    let mut visits = vec![0usize; conversations.len()];

    for _ in 0..1000 {
        let picked = corpus.random_conversation_with(&mut rng).unwrap();
        let index = conversations
            .iter()
            .position(|c| std::ptr::eq(c, picked))
            .expect("picked conversation is not part of the corpus");
        assert!(index < CONVERSATION_COUNT);
        visits[index] += 1;
    }

    assert!(visits.iter().all(|&count| count > 0), "{visits:?}");
}

#[test]
fn test_random_conversation_with_thread_rng() {
    let corpus = assemble();
    let picked = corpus.random_conversation().unwrap();
    assert!(!picked.lines.is_empty());
}
