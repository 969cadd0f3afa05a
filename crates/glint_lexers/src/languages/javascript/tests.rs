use glint_lexer_core::{FastTokens, TokenType};
use pretty_assertions::assert_eq;

use super::JavaScriptScanner;

fn lex(code: &str) -> Vec<(TokenType, &str)> {
    FastTokens::new(JavaScriptScanner::new(code, 0), code, 0).collect()
}

fn significant(code: &str) -> Vec<(TokenType, &str)> {
    lex(code)
        .into_iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .collect()
}

// === Words ===

#[test]
fn keyword_classes() {
    assert_eq!(
        significant("const x = new Map(); export default this"),
        vec![
            (TokenType::KeywordDeclaration, "const"),
            (TokenType::Name, "x"),
            (TokenType::Operator, "="),
            (TokenType::Keyword, "new"),
            (TokenType::NameBuiltin, "Map"),
            (TokenType::Punctuation, "("),
            (TokenType::Punctuation, ")"),
            (TokenType::Punctuation, ";"),
            (TokenType::KeywordNamespace, "export"),
            (TokenType::Keyword, "default"),
            (TokenType::Keyword, "this"),
        ]
    );
    assert_eq!(lex("undefined"), vec![(TokenType::KeywordConstant, "undefined")]);
    assert_eq!(lex("interface"), vec![(TokenType::KeywordReserved, "interface")]);
}

#[test]
fn dollar_and_private_names() {
    assert_eq!(
        significant("$el #count _x"),
        vec![
            (TokenType::Name, "$el"),
            (TokenType::Name, "#count"),
            (TokenType::Name, "_x"),
        ]
    );
}

// === Operators and numbers ===

#[test]
fn strict_equality_is_one_operator() {
    assert_eq!(
        significant("a === b"),
        vec![
            (TokenType::Name, "a"),
            (TokenType::Operator, "==="),
            (TokenType::Name, "b"),
        ]
    );
    assert_eq!(significant("a?.b ?? c")[1], (TokenType::Operator, "?."));
}

#[test]
fn longest_operators() {
    assert_eq!(significant("x >>>= 1")[1], (TokenType::Operator, ">>>="));
    assert_eq!(significant("x >>> 1")[1], (TokenType::Operator, ">>>"));
    assert_eq!(significant("x <<= 1")[1], (TokenType::Operator, "<<="));
    assert_eq!(
        significant("f(...args)"),
        vec![
            (TokenType::Name, "f"),
            (TokenType::Punctuation, "("),
            (TokenType::Operator, "..."),
            (TokenType::Name, "args"),
            (TokenType::Punctuation, ")"),
        ]
    );
}

#[test]
fn numbers_and_bigint() {
    assert_eq!(lex("10n"), vec![(TokenType::NumberInteger, "10n")]);
    assert_eq!(lex("0xFF"), vec![(TokenType::NumberHex, "0xFF")]);
    assert_eq!(lex(".5"), vec![(TokenType::NumberFloat, ".5")]);
}

// === Comments and strings ===

#[test]
fn unterminated_block_comment_spans_input() {
    assert_eq!(lex("/* hello"), vec![(TokenType::CommentMultiline, "/* hello")]);
}

#[test]
fn line_comment_and_hashbang() {
    assert_eq!(
        lex("#!/usr/bin/env node\n// hi"),
        vec![
            (TokenType::CommentHashbang, "#!/usr/bin/env node"),
            (TokenType::Whitespace, "\n"),
            (TokenType::CommentSingle, "// hi"),
        ]
    );
}

#[test]
fn quoted_strings() {
    assert_eq!(
        significant(r#"'a' "b\"c""#),
        vec![(TokenType::String, "'a'"), (TokenType::String, r#""b\"c""#)]
    );
}

#[test]
fn template_literal_fields() {
    assert_eq!(
        lex("`Hello, ${user.name}!`"),
        vec![
            (TokenType::StringBacktick, "`Hello, "),
            (TokenType::StringInterpol, "${"),
            (TokenType::Name, "user"),
            (TokenType::Operator, "."),
            (TokenType::Name, "name"),
            (TokenType::StringInterpol, "}"),
            (TokenType::StringBacktick, "!`"),
        ]
    );
}

#[test]
fn template_field_with_object_literal() {
    assert_eq!(
        significant("`${ {a: 1}.a }`"),
        vec![
            (TokenType::StringBacktick, "`"),
            (TokenType::StringInterpol, "${"),
            (TokenType::Punctuation, "{"),
            (TokenType::Name, "a"),
            (TokenType::Operator, ":"),
            (TokenType::NumberInteger, "1"),
            (TokenType::Punctuation, "}"),
            (TokenType::Operator, "."),
            (TokenType::Name, "a"),
            (TokenType::StringInterpol, "}"),
            (TokenType::StringBacktick, "`"),
        ]
    );
}

#[test]
fn multiline_template() {
    assert_eq!(
        lex("`a\nb`;"),
        vec![
            (TokenType::StringBacktick, "`a\nb`"),
            (TokenType::Punctuation, ";"),
        ]
    );
}

// === Regular expressions ===

#[test]
fn regex_where_operand_expected() {
    assert_eq!(
        significant("x = /a[/]b\\/c/gi;"),
        vec![
            (TokenType::Name, "x"),
            (TokenType::Operator, "="),
            (TokenType::StringRegex, "/a[/]b\\/c/gi"),
            (TokenType::Punctuation, ";"),
        ]
    );
    assert_eq!(lex("/x/"), vec![(TokenType::StringRegex, "/x/")]);
    assert_eq!(
        significant("return /\\d+/.test(s)")[1],
        (TokenType::StringRegex, "/\\d+/")
    );
}

#[test]
fn division_after_operand() {
    assert_eq!(
        significant("a / b / c"),
        vec![
            (TokenType::Name, "a"),
            (TokenType::Operator, "/"),
            (TokenType::Name, "b"),
            (TokenType::Operator, "/"),
            (TokenType::Name, "c"),
        ]
    );
    assert_eq!(significant("f(x) / 2")[4], (TokenType::Operator, "/"));
    assert_eq!(significant("i++ / 2")[2], (TokenType::Operator, "/"));
}

#[test]
fn unterminated_regex_stops_at_newline() {
    assert_eq!(
        lex("/abc\nx"),
        vec![
            (TokenType::StringRegex, "/abc"),
            (TokenType::Whitespace, "\n"),
            (TokenType::Name, "x"),
        ]
    );
}
