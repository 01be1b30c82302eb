//! Error Tests

use dgm_domain::error::Error;

#[test]
fn test_circular_dependency_message_lists_chain() {
    let err = Error::circular(
        "parser.Lexer",
        vec![
            "parser.Lexer".to_string(),
            "parser.TokenBuilder".to_string(),
            "parser.Lexer".to_string(),
        ],
    );
    let message = err.to_string();
    assert!(message.contains("Circular dependency"));
    assert!(message.contains("parser.Lexer -> parser.TokenBuilder -> parser.Lexer"));
    assert!(err.is_circular_dependency());
}

#[test]
fn test_construction_keeps_circular_error_distinguishable() {
    let circular = Error::circular("a", vec!["a".to_string(), "b".to_string(), "a".to_string()]);
    let wrapped = Error::construction("outer", circular);
    assert!(matches!(wrapped, Error::CircularDependency { ref path, .. } if path == "a"));

    let ordinary = Error::construction("outer", Error::internal("boom"));
    assert!(matches!(ordinary, Error::ServiceConstruction { ref path, .. } if path == "outer"));
    assert!(!ordinary.is_circular_dependency());
}

#[test]
fn test_construction_does_not_rewrap_nested_failures() {
    let inner = Error::construction("inner", Error::internal("boom"));
    let outer = Error::construction("outer", inner);
    assert!(matches!(outer, Error::ServiceConstruction { ref path, .. } if path == "inner"));
}

#[test]
fn test_unregistered_language_message() {
    let err = Error::unregistered_language("unknown");
    assert_eq!(err.to_string(), "No services registered for language 'unknown'");
}

#[test]
fn test_malformed_definition_message() {
    let err = Error::malformed("parser.TokenBuilder", "factory conflicts with group");
    assert!(err.to_string().contains("parser.TokenBuilder"));
    assert!(err.to_string().contains("factory conflicts with group"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoSimple { .. }));
}
