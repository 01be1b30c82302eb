//! Default Value Converter Tests

use dgm_application::domain_services::DefaultValueConverter;
use dgm_domain::Error;
use dgm_domain::ports::ValueConverter;
use dgm_domain::value_objects::{ConvertedValue, TerminalRule, ValueType};

#[test]
fn test_int() {
    let rule = TerminalRule::new("INT", "0|[1-9][0-9]*");
    let value = DefaultValueConverter::new().convert("128", &rule).unwrap();
    assert_eq!(value, ConvertedValue::Integer(128));
}

#[test]
fn test_int_overflow_is_conversion_error() {
    let rule = TerminalRule::new("INT", "0|[1-9][0-9]*");
    let err = DefaultValueConverter::new()
        .convert("99999999999999999999", &rule)
        .unwrap_err();
    assert!(matches!(err, Error::ValueConversion { ref rule, .. } if rule == "INT"));
}

#[test]
fn test_string_is_unquoted() {
    let rule = TerminalRule::new("STRING", "\"[^\"]*\"");
    let value = DefaultValueConverter::new()
        .convert("\"Source Port\"", &rule)
        .unwrap();
    assert_eq!(value.as_str(), Some("Source Port"));
}

#[test]
fn test_id_escape_is_removed() {
    let rule = TerminalRule::new("ID", "\\^?[a-z]+");
    let value = DefaultValueConverter::new().convert("^title", &rule).unwrap();
    assert_eq!(value.as_str(), Some("title"));
}

#[test]
fn test_other_rules_follow_value_type() {
    let converter = DefaultValueConverter::new();
    let number = TerminalRule::new("FLOAT", "[0-9.]+").with_value_type(ValueType::Number);
    let boolean = TerminalRule::new("BOOL", "true|false").with_value_type(ValueType::Boolean);
    let text = TerminalRule::new("NAME", "[a-z]+");

    assert_eq!(converter.convert("1.5", &number).unwrap(), ConvertedValue::Number(1.5));
    assert_eq!(converter.convert("true", &boolean).unwrap(), ConvertedValue::Boolean(true));
    assert_eq!(converter.convert("false", &boolean).unwrap(), ConvertedValue::Boolean(false));
    assert_eq!(converter.convert("abc", &text).unwrap().as_str(), Some("abc"));
}
