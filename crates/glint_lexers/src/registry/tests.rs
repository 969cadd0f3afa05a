use pretty_assertions::assert_eq;

use super::*;

#[test]
fn canonical_names_and_aliases() {
    let registry = Registry::new();
    assert_eq!(registry.get("python"), Ok(Language::Python));
    assert_eq!(registry.get("py"), Ok(Language::Python));
    assert_eq!(registry.get("js"), Ok(Language::JavaScript));
    assert_eq!(registry.get("ecmascript"), Ok(Language::JavaScript));
    assert_eq!(registry.get("htm"), Ok(Language::Html));
    assert_eq!(registry.get("md"), Ok(Language::Markdown));
    assert_eq!(registry.get("rs"), Ok(Language::Rust));
    assert_eq!(registry.get("golang"), Ok(Language::Go));
}

#[test]
fn lookup_ignores_case_and_padding() {
    let registry = Registry::new();
    assert_eq!(registry.get("Python"), Ok(Language::Python));
    assert_eq!(registry.get(" JSON "), Ok(Language::Json));
    assert!(registry.supports("JavaScript"));
}

#[test]
fn every_alias_resolves_to_its_language() {
    let registry = Registry::new();
    for &language in registry.languages() {
        let info = language.info();
        for name in std::iter::once(&info.name).chain(info.aliases) {
            assert_eq!(registry.get(name), Ok(language));
        }
    }
}

#[test]
fn unknown_language_lists_known_names() {
    let registry = Registry::new();
    assert!(!registry.supports("cobol"));
    let err = registry.get("cobol").unwrap_err();
    assert_eq!(
        err,
        LookupError::UnknownLanguage {
            name: "cobol".to_owned(),
            known: vec!["go", "html", "javascript", "json", "markdown", "python", "rust"],
        }
    );
    assert_eq!(
        err.to_string(),
        "unknown language `cobol` (known: go, html, javascript, json, markdown, python, rust)"
    );
}

#[test]
fn names_are_sorted() {
    let names = Registry::new().names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), Language::ALL.len());
}
