//! End-to-end checks of the highlighting properties through the public API.
//!
//! Each test loads a wordbook from disk, binds an engine to an in-memory
//! document, and checks the emitted ranges against the document text.

use std::fs;
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use tempfile::TempDir;

use wordlight::{
    Convert, HighlightEngine, HighlightOptions, HighlightRange, Lowercase, MarkBuffer, TextBuffer,
    WordSet, WordSetError, fold_case,
};

const DOCUMENTS: &[&str] = &[
    "The theology of leather",
    "Theatre, thesis and the thermos; other bathers.",
    "x1x2 x1 1x x-1",
    "Straße STRASSE straße",
    "",
    "!!! ??? ...",
];

#[fixture]
fn wordbook_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("common.txt"), "The\nTHE\nthe\nof\n thesis \nx1\n")
        .expect("write common wordbook");
    fs::write(dir.path().join("other.txt"), "leather\nstraße\n").expect("write other wordbook");
    dir
}

fn load(dir: &TempDir, name: &str) -> WordSet {
    let mut words = WordSet::new();
    words.add_transform(Lowercase);
    words.load(&dir.path().join(name)).expect("load wordbook");
    words
}

fn engine_for(text: &str) -> HighlightEngine {
    HighlightEngine::new(
        HighlightOptions::ignore_case(),
        Arc::new(TextBuffer::new(text)),
        Arc::new(Mutex::new(MarkBuffer::new(text.chars().count()))),
    )
}

fn assert_ranges_are_run_prefixes(text: &str, ranges: &[HighlightRange], words: &WordSet) {
    let chars: Vec<char> = text.chars().collect();
    let active = words.words().expect("loaded");
    for range in ranges {
        let covered = range.slice(text).expect("range fits the document");
        assert!(
            covered.chars().all(char::is_alphanumeric),
            "{range} covers a non-alphanumeric character in {text:?}"
        );
        let before = range.start().checked_sub(1).and_then(|index| chars.get(index));
        assert!(
            before.is_none_or(|ch| !ch.is_alphanumeric()),
            "{range} starts mid-run in {text:?}"
        );
        assert!(
            active.contains(&fold_case(covered)),
            "{covered:?} is not a dictionary word"
        );
    }
}

#[rstest]
fn every_range_is_a_dictionary_prefix_of_a_run(wordbook_dir: TempDir) {
    let words = load(&wordbook_dir, "common.txt");
    for text in DOCUMENTS {
        let engine = engine_for(text);
        engine.set_words(words.words().expect("loaded"), Convert::ToLowercase);
        assert_ranges_are_run_prefixes(text, &engine.ranges(), &words);
    }
}

#[rstest]
fn highlight_twice_yields_identical_ranges(wordbook_dir: TempDir) {
    let words = load(&wordbook_dir, "common.txt");
    for text in DOCUMENTS {
        let engine = engine_for(text);
        engine.set_words(words.words().expect("loaded"), Convert::ToLowercase);
        engine.highlight();
        let first = engine.ranges();
        engine.highlight();
        assert_eq!(engine.ranges(), first, "rescan of {text:?} changed ranges");
    }
}

#[rstest]
fn case_variants_collapse_and_match_run_prefixes(wordbook_dir: TempDir) {
    let words = load(&wordbook_dir, "common.txt");
    assert_eq!(words.len(), 4);

    let engine = engine_for("The theology of leather");
    engine.set_words(words.words().expect("loaded"), Convert::ToLowercase);
    assert_eq!(
        engine.ranges(),
        vec![
            HighlightRange::new(0, 3),
            HighlightRange::new(4, 7),
            HighlightRange::new(13, 15),
        ]
    );
}

#[rstest]
fn loading_another_wordbook_replaces_the_active_words(wordbook_dir: TempDir) {
    let engine = engine_for("The theology of leather");
    engine.set_words(
        load(&wordbook_dir, "common.txt").words().expect("loaded"),
        Convert::ToLowercase,
    );
    engine.set_words(
        load(&wordbook_dir, "other.txt").words().expect("loaded"),
        Convert::ToLowercase,
    );
    assert_eq!(engine.ranges(), vec![HighlightRange::new(16, 23)]);
}

#[rstest]
fn failed_load_keeps_the_previous_words(wordbook_dir: TempDir) {
    let mut words = load(&wordbook_dir, "other.txt");
    let error = words
        .load(&wordbook_dir.path().join("absent.txt"))
        .expect_err("absent wordbook");
    assert!(matches!(error, WordSetError::SourceUnavailable { .. }));
    assert_eq!(words.len(), 2);
}

#[test]
fn sharp_s_folds_per_character() {
    let text = "Straße STRASSE straße";
    let engine = engine_for(text);
    engine.set_words(["STRAßE"], Convert::ToLowercase);
    assert_eq!(
        engine.ranges(),
        vec![HighlightRange::new(0, 6), HighlightRange::new(15, 21)]
    );
}
