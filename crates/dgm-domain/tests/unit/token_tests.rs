//! Token Type Tests

use dgm_domain::value_objects::{KeywordBoundary, TokenCategory, TokenType};

#[test]
fn test_terminal_matches_only_at_start() {
    let int = TokenType::terminal("INT", "0|[1-9][0-9]*", false).unwrap();
    assert_eq!(int.category, TokenCategory::Terminal);
    assert_eq!(int.match_len("123: rest"), Some(3));
    assert_eq!(int.match_len("x123"), None);
}

#[test]
fn test_invalid_terminal_pattern_is_grammar_error() {
    let err = TokenType::terminal("BROKEN", "(unclosed", false).unwrap_err();
    assert!(err.to_string().contains("BROKEN"));
}

#[test]
fn test_keyword_is_matched_literally() {
    let kw = TokenType::keyword("packet-beta", false).unwrap();
    assert_eq!(kw.category, TokenCategory::Keyword);
    assert_eq!(kw.match_len("packet-beta\n"), Some(11));
    assert_eq!(kw.match_len("packet"), None);

    let dot = TokenType::keyword(".", false).unwrap();
    assert_eq!(dot.match_len("x"), None);
}

#[test]
fn test_case_insensitive_keyword() {
    let kw = TokenType::keyword("title", true).unwrap();
    assert_eq!(kw.match_len("TITLE"), Some(5));
}

#[test]
fn test_keyword_boundary() {
    let boundary = KeywordBoundary::new(["%%"]);
    assert!(boundary.permits(""));
    assert!(boundary.permits(" 0-10"));
    assert!(boundary.permits("\n"));
    assert!(boundary.permits("%% comment"));
    assert!(!boundary.permits("x"));
    assert!(!boundary.permits("%x"));

    let mut kw = TokenType::keyword("packet", false).unwrap();
    kw.boundary = Some(boundary);
    assert_eq!(kw.match_len("packet\n"), Some(6));
    assert_eq!(kw.match_len("packets"), None);
}

#[test]
fn test_empty_match_is_no_match() {
    let optional = TokenType::terminal("OPT", "a*", false).unwrap();
    assert_eq!(optional.match_len("bbb"), None);
    assert_eq!(optional.match_len("aab"), Some(2));
}

#[test]
fn test_matches_fully() {
    let id = TokenType::terminal("ID", "[a-z]+", false).unwrap();
    assert!(id.matches_fully("packet"));
    assert!(!id.matches_fully("packet-beta"));
}
