//! Default Parser Tests

use dgm_application::domain_services::{
    DefaultLexer, DefaultParser, DefaultTokenBuilder, DefaultValueConverter, GenericAstBuilder,
};
use dgm_domain::ports::Parser;
use dgm_domain::value_objects::{ConvertedValue, Grammar, TerminalRule};
use std::sync::Arc;

fn parser() -> DefaultParser {
    let grammar = Arc::new(
        Grammar::new("Numbers", "Model")
            .with_keywords(["sum"])
            .with_terminals([
                TerminalRule::new("INT", "0|[1-9][0-9]*"),
                TerminalRule::hidden("WS", "\\s+"),
            ]),
    );
    let lexer = DefaultLexer::from_builder(&DefaultTokenBuilder::new(), &grammar).unwrap();
    DefaultParser::new(
        grammar,
        Arc::new(lexer),
        Arc::new(GenericAstBuilder),
        Arc::new(DefaultValueConverter::new()),
    )
}

#[test]
fn test_generic_builder_produces_flat_tree() {
    let result = parser().parse("sum 1 2");
    assert!(!result.has_errors());
    assert_eq!(result.value.node_type, "Model");

    let tokens = result.value.children("tokens");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].node_type, "sum");
    assert_eq!(tokens[1].property("value"), Some(&ConvertedValue::Integer(1)));
}

#[test]
fn test_lexer_errors_are_carried_into_result() {
    let result = parser().parse("sum x");
    assert_eq!(result.lexer_errors.len(), 1);
    assert!(result.parser_errors.is_empty());
}
