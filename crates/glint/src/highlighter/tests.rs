use glint_lexers::TokenType;
use pretty_assertions::assert_eq;

use super::*;
use crate::formatter::NullFormatter;

#[test]
fn tokenize_resolves_aliases() {
    let highlighter = Highlighter::new();
    let by_name = highlighter.tokenize("x = 1", "python");
    let by_alias = highlighter.tokenize("x = 1", "PY");
    assert_eq!(by_name, by_alias);
    assert!(by_name.is_ok());
}

#[test]
fn unknown_language_is_an_error() {
    let highlighter = Highlighter::new();
    let err = highlighter.tokenize("x", "brainfuck");
    assert!(matches!(err, Err(LookupError::UnknownLanguage { ref name, .. }) if name == "brainfuck"));
    assert!(highlighter.highlight("x", "nope", &NullFormatter).is_err());
}

#[test]
fn highlight_with_null_formatter_round_trips() {
    let highlighter = Highlighter::new();
    let code = "<p>&amp;</p>";
    assert_eq!(highlighter.highlight(code, "html", &NullFormatter), Ok(code.to_owned()));
}

#[test]
fn highlight_range_renders_only_the_range() {
    let highlighter = Highlighter::new();
    let doc = "intro\n```py\nx = 1\n```";
    let start = doc.find("x =").unwrap_or(0);
    let rendered = highlighter.highlight_range(doc, "python", start..start + 5, &NullFormatter);
    assert_eq!(rendered, Ok("x = 1".to_owned()));

    // Clamped to the input and to char boundaries.
    let code = "s = 'é'";
    assert_eq!(
        highlighter.highlight_range(code, "python", 4..6, &NullFormatter),
        Ok("'".to_owned())
    );
    assert_eq!(
        highlighter.highlight_range(code, "python", 4..100, &NullFormatter),
        Ok("'é'".to_owned())
    );
    assert!(highlighter.highlight_range(code, "cobol", 0..1, &NullFormatter).is_err());
}

#[test]
fn fast_tokens_match_tokens() {
    let highlighter = Highlighter::new();
    let code = "const x = 0x1F;";
    let fast: Vec<_> = highlighter
        .tokenize_fast(code, "js")
        .into_iter()
        .flatten()
        .collect();
    let slow: Vec<_> = highlighter
        .tokenize(code, "js")
        .unwrap_or_default()
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect();
    assert_eq!(fast, slow);
    assert_eq!(fast[0], (TokenType::KeywordDeclaration, "const"));
}

#[test]
fn range_handoff_borrows_the_source() {
    let highlighter = Highlighter::new();
    let doc = "text\n```\nlet a = 1;\n```\n";
    let start = doc.find("let").unwrap_or(0);
    let end = start + "let a = 1;".len();
    let tokens: Vec<_> = highlighter
        .tokenize_range(doc, start, end, "javascript")
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(tokens[0], Token::new(TokenType::KeywordDeclaration, "let", 1, 1));
    assert_eq!(tokens.iter().map(|t| t.value).collect::<String>(), "let a = 1;");
    assert!(highlighter.supports_language("JS"));
    assert!(!highlighter.supports_language("cobol"));
}

#[test]
fn batch_resolves_before_running() {
    let highlighter = Highlighter::new();
    let items = [("1", "json"), ("x", "klingon"), ("2", "json")];
    assert!(highlighter.tokenize_many(&items).is_err());
}

#[test]
fn sequential_config_gives_same_results() {
    let items: Vec<(&str, &str)> = (0..12)
        .map(|i| if i % 2 == 0 { ("def f(): pass", "python") } else { ("[1, 2]", "json") })
        .collect();
    let parallel = Highlighter::new().highlight_many(&items, &NullFormatter);
    let sequential = Highlighter::new()
        .with_batch_config(BatchConfig::sequential())
        .highlight_many(&items, &NullFormatter);
    assert_eq!(parallel, sequential);
    let expected: Vec<String> = items.iter().map(|(code, _)| (*code).to_owned()).collect();
    assert_eq!(parallel, Ok(expected));
}
