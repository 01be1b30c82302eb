//! Packet Language Tests
//!
//! The pipeline is wired by hand here; container assembly is covered by the
//! infrastructure tests.

use dgm_application::domain_services::{DefaultLexer, DefaultParser};
use dgm_domain::ports::Parser;
use dgm_domain::value_objects::{AstNode, ConvertedValue, ParseResult};
use dgm_providers::common::CommonValueConverter;
use dgm_providers::generated::{PacketAstBuilder, packet_grammar, packet_meta_data};
use dgm_providers::packet::PacketTokenBuilder;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn parse(text: &str) -> ParseResult {
    let grammar = Arc::new(packet_grammar());
    let lexer = DefaultLexer::from_builder(&PacketTokenBuilder::new(), &grammar).unwrap();
    let parser = DefaultParser::new(
        grammar,
        Arc::new(lexer),
        Arc::new(PacketAstBuilder),
        Arc::new(CommonValueConverter::new().unwrap()),
    );
    parser.parse(text)
}

fn int(node: &AstNode, feature: &str) -> Option<i64> {
    node.property(feature).and_then(ConvertedValue::as_integer)
}

#[test]
fn test_meta_data() {
    let meta = packet_meta_data();
    assert_eq!(meta.language_id, "packet");
    assert!(meta.handles_extension(".mmd"));
    assert!(meta.handles_extension("mermaid"));
}

#[test]
fn test_parse_blocks() {
    let result = parse(
        "packet\n0-15: \"Source Port\"\n16-31: \"Destination Port\"\n+8: \"Flags\"\n32: 'Bit'\n",
    );
    assert!(!result.has_errors(), "{result:?}");
    assert_eq!(result.value.node_type, "Packet");

    let blocks = result.value.children("blocks");
    assert_eq!(blocks.len(), 4);
    assert_eq!(int(&blocks[0], "start"), Some(0));
    assert_eq!(int(&blocks[0], "end"), Some(15));
    assert_eq!(blocks[0].property("label").and_then(ConvertedValue::as_str), Some("Source Port"));
    assert_eq!(int(&blocks[2], "bits"), Some(8));
    assert_eq!(int(&blocks[3], "start"), Some(32));
    assert_eq!(int(&blocks[3], "end"), None);
}

#[test]
fn test_packet_beta_header_and_leading_newlines() {
    let result = parse("\n\npacket-beta\n0-7: \"Byte\"");
    assert!(!result.has_errors(), "{result:?}");
    assert_eq!(result.value.children("blocks").len(), 1);
}

#[test]
fn test_title_and_accessibility() {
    let result = parse(
        "packet\ntitle  TCP   Packet\naccTitle: Layout\naccDescr {\n  Header\n  fields\n}\n0-1: \"a\"\n",
    );
    assert!(!result.has_errors(), "{result:?}");
    let root = &result.value;
    assert_eq!(root.property("title").and_then(ConvertedValue::as_str), Some("TCP Packet"));
    assert_eq!(root.property("accTitle").and_then(ConvertedValue::as_str), Some("Layout"));
    assert_eq!(root.property("accDescr").and_then(ConvertedValue::as_str), Some("Header\nfields"));
}

#[test]
fn test_comments_and_directives_are_hidden() {
    let result = parse(
        "%%{init: {\"packet\": {\"bitsPerRow\": 16}}}%%\npacket %% header\n%% a comment\n0-3: \"Nibble\" %% trailing\n",
    );
    assert!(!result.has_errors(), "{result:?}");
    assert_eq!(result.value.children("blocks").len(), 1);
}

#[test]
fn test_front_matter_is_hidden() {
    let result = parse("---\ntitle: Packet\n---\npacket\n0-1: \"x\"\n");
    assert!(!result.has_errors(), "{result:?}");
    assert_eq!(result.value.children("blocks").len(), 1);
}

#[test]
fn test_syntax_error_recovers_at_next_line() {
    let result = parse("packet\n0-15 \"missing colon\"\n16-31: \"Ok\"\n");
    assert!(result.lexer_errors.is_empty());
    assert_eq!(result.parser_errors.len(), 1);
    let error = &result.parser_errors[0];
    assert_eq!(error.line, 2);
    assert!(error.message.contains("':'"), "{}", error.message);

    let blocks = result.value.children("blocks");
    assert_eq!(blocks.len(), 1);
    assert_eq!(int(&blocks[0], "start"), Some(16));
}

#[test]
fn test_missing_header_is_reported() {
    let result = parse("0-1: \"x\"\n2-3: \"y\"\n");
    assert_eq!(result.parser_errors.len(), 1);
    assert!(result.parser_errors[0].message.contains("'packet'"));
    assert_eq!(result.value.children("blocks").len(), 1);
}

#[test]
fn test_unexpected_character_is_lexer_error() {
    let result = parse("packet\n0-1: \"x\" @\n");
    assert_eq!(result.lexer_errors.len(), 1);
    assert!(result.lexer_errors[0].message.starts_with("unexpected character: ->@<-"));
}

#[test]
fn test_missing_end_of_line_at_end_of_input() {
    let result = parse("packet\n0-1:");
    assert_eq!(result.parser_errors.len(), 1);
    assert!(result.parser_errors[0].message.contains("end of input"));
}

#[test]
fn test_ast_serializes_with_type_tag() {
    let result = parse("packet\n0-1: \"x\"\n");
    let json = serde_json::to_value(&result.value).unwrap();
    assert_eq!(json["$type"], "Packet");
    assert_eq!(json["children"]["blocks"][0]["properties"]["label"], "x");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dropped_statement_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        parse("packet\n0-15 \"Missing colon\"\n16-31: \"Kept\"\n")
    });
    assert_eq!(result.parser_errors.len(), 1);
    assert_eq!(result.value.children("blocks").len(), 1);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Dropped packet statement"), "{output}");
    assert!(output.contains("line=2"), "{output}");
}
