//! Default Lexer Tests

use dgm_application::domain_services::{DefaultLexer, DefaultTokenBuilder};
use dgm_domain::ports::Lexer;
use dgm_domain::value_objects::{Grammar, KeywordBoundary, TerminalRule, TokenType};

fn lexer() -> DefaultLexer {
    let grammar = Grammar::new("Test", "Model")
        .with_keywords(["packet", ":", "-"])
        .with_terminals([
            TerminalRule::new("NEWLINE", "\\r?\\n"),
            TerminalRule::new("ID", "[a-z]+"),
            TerminalRule::new("INT", "0|[1-9][0-9]*"),
            TerminalRule::hidden("WS", "[\\t ]+"),
        ]);
    DefaultLexer::from_builder(&DefaultTokenBuilder::new(), &grammar).unwrap()
}

fn types(text: &str) -> Vec<String> {
    lexer()
        .tokenize(text)
        .tokens
        .into_iter()
        .map(|t| t.token_type)
        .collect()
}

#[test]
fn test_hidden_tokens_are_kept_apart() {
    let result = lexer().tokenize("packet 0-10");
    assert!(result.errors.is_empty());
    assert_eq!(
        result.tokens.iter().map(|t| t.image.as_str()).collect::<Vec<_>>(),
        vec!["packet", "0", "-", "10"]
    );
    assert_eq!(result.hidden.len(), 1);
    assert_eq!(result.hidden[0].token_type, "WS");
}

#[test]
fn test_longer_alternative_wins() {
    assert_eq!(types("packets"), vec!["ID"]);
    assert_eq!(types("packet"), vec!["packet"]);
}

#[test]
fn test_line_and_column_tracking() {
    let result = lexer().tokenize("packet\n  0-1");
    let zero = result.tokens.iter().find(|t| t.image == "0").unwrap();
    assert_eq!((zero.line, zero.column), (2, 3));
    assert_eq!(zero.offset, 9);
}

#[test]
fn test_unexpected_characters_are_skipped_and_reported() {
    let result = lexer().tokenize("packet ?? 1");
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(
        error.message,
        "unexpected character: ->?<- at offset: 7, skipped 2 characters."
    );
    assert_eq!(error.length, 2);
    assert_eq!((error.line, error.column), (1, 8));
    assert_eq!(result.tokens.last().unwrap().image, "1");
}

#[test]
fn test_keyword_boundary_is_enforced() {
    let mut keyword = TokenType::keyword("title", false).unwrap();
    keyword.boundary = Some(KeywordBoundary::new(["%%"]));
    let id = TokenType::terminal("ID", "[a-z]+", false).unwrap();
    let lexer = DefaultLexer::new(vec![keyword, id]);

    let types = |text: &str| -> Vec<String> {
        lexer.tokenize(text).tokens.into_iter().map(|t| t.token_type).collect()
    };
    assert_eq!(types("title"), vec!["title"]);
    assert_eq!(types("titles"), vec!["ID"]);
}

#[test]
fn test_empty_input() {
    let result = lexer().tokenize("");
    assert!(result.tokens.is_empty());
    assert!(result.errors.is_empty());
}
