//! Batch tokenization: ordering, thresholds and failure behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::num::NonZeroUsize;

use glint::{BatchConfig, Highlighter, LookupError, NullFormatter, TokenType};
use pretty_assertions::assert_eq;

const SNIPPETS: &[(&str, &str)] = &[
    ("def foo(): pass", "python"),
    ("const x = 1;", "javascript"),
    ("{\"a\": 1}", "json"),
    ("<b>hi</b>", "html"),
    ("# Title", "markdown"),
    ("fn main() {}", "rust"),
    ("func main() {}", "go"),
    ("x = 1", "py"),
    ("let y = 2;", "js"),
    ("[]", "json"),
    ("*em*", "md"),
];

fn batch(n: usize) -> Vec<(&'static str, &'static str)> {
    SNIPPETS.iter().copied().cycle().take(n).collect()
}

#[test]
fn empty_batch() {
    let highlighter = Highlighter::new();
    assert_eq!(highlighter.tokenize_many(&[]), Ok(vec![]));
    assert_eq!(highlighter.highlight_many(&[], &NullFormatter), Ok(vec![]));
}

#[test]
fn order_preserved_below_threshold() {
    let highlighter = Highlighter::new();
    let items = batch(3);
    let results = highlighter.tokenize_many(&items).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0][0].kind, TokenType::KeywordDeclaration);
    assert_eq!(results[1][0].value, "const");
    assert_eq!(results[2][0].kind, TokenType::Punctuation);
}

#[test]
fn order_preserved_above_threshold() {
    let highlighter = Highlighter::new();
    let items = batch(200);
    let results = highlighter.highlight_many(&items, &NullFormatter).unwrap();
    let expected: Vec<String> = items.iter().map(|(code, _)| (*code).to_owned()).collect();
    assert_eq!(results, expected);

    let tokens = highlighter.tokenize_many(&items).unwrap();
    for ((code, language), tokens) in items.iter().zip(&tokens) {
        let single = highlighter.tokenize(code, language).unwrap();
        assert_eq!(&single, tokens);
    }
}

#[test]
fn worker_count_does_not_change_results() {
    let items = batch(64);
    let reference = Highlighter::new()
        .with_batch_config(BatchConfig::sequential())
        .tokenize_many(&items)
        .unwrap();
    for workers in [1, 2, 3, 8] {
        let config = BatchConfig {
            max_workers: NonZeroUsize::new(workers),
            sequential_threshold: 1,
        };
        let results = Highlighter::new()
            .with_batch_config(config)
            .tokenize_many(&items)
            .unwrap();
        assert_eq!(results, reference, "{workers} workers");
    }
}

#[test]
fn unknown_language_fails_the_batch() {
    let highlighter = Highlighter::new();
    let mut items = batch(20);
    items[13] = ("x", "klingon");
    let err = highlighter.tokenize_many(&items).unwrap_err();
    match err {
        LookupError::UnknownLanguage { name, known } => {
            assert_eq!(name, "klingon");
            assert!(known.contains(&"python"));
        }
    }
    assert!(highlighter.highlight_many(&items, &NullFormatter).is_err());
}

#[test]
fn highlighter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Highlighter>();
    assert_send_sync::<glint::Registry>();
    assert_send_sync::<glint::Language>();

    let highlighter = Highlighter::new();
    let items = batch(40);
    std::thread::scope(|s| {
        for chunk in items.chunks(10) {
            let highlighter = &highlighter;
            s.spawn(move || {
                let results = highlighter.highlight_many(chunk, &NullFormatter).unwrap();
                assert_eq!(results.len(), chunk.len());
            });
        }
    });
}
