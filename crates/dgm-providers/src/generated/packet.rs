//! Packet grammar
//!
//! ```text
//! Packet:
//!     NEWLINE* ("packet" | "packet-beta")
//!     (TitleAndAccessibilities | blocks+=PacketBlock | NEWLINE)*
//!
//! PacketBlock:
//!     (start=INT ("-" end=INT)? | "+" bits=INT) ":" label=STRING EOL
//!
//! TitleAndAccessibilities:
//!     ((accDescr=ACC_DESCR | accTitle=ACC_TITLE | title=TITLE) EOL)+
//!
//! EOL: NEWLINE+ | EOF
//! ```

use crate::common::common_terminals;
use crate::constants::{
    ACC_DESCR, ACC_TITLE, NEWLINE, PACKET_FILE_EXTENSIONS, PACKET_HEADER_KEYWORDS,
    PACKET_LANGUAGE_ID, TITLE,
};
use dgm_application::di::Module;
use dgm_application::domain_services::TokenCursor;
use dgm_application::services::paths;
use dgm_domain::constants::{INT_RULE, STRING_RULE};
use dgm_domain::ports::{AstBuildContext, AstBuildResult, AstBuilder};
use dgm_domain::value_objects::{
    AstNode, ConvertedValue, Grammar, LanguageMetaData, ParserError, Token,
};
use std::sync::Arc;
use tracing::debug;

/// Root node type
pub const PACKET_TYPE: &str = "Packet";
/// Block node type
pub const PACKET_BLOCK_TYPE: &str = "PacketBlock";

const RANGE_SEPARATOR: &str = "-";
const BITS_MARKER: &str = "+";
const LABEL_SEPARATOR: &str = ":";

/// Grammar tables of the packet language
pub fn packet_grammar() -> Grammar {
    Grammar::new("Packet", PACKET_TYPE)
        .with_keywords(PACKET_HEADER_KEYWORDS)
        .with_keywords([RANGE_SEPARATOR, BITS_MARKER, LABEL_SEPARATOR])
        .with_terminals(common_terminals())
}

/// Identity of the packet language
pub fn packet_meta_data() -> LanguageMetaData {
    LanguageMetaData::new(PACKET_LANGUAGE_ID, PACKET_FILE_EXTENSIONS)
}

/// Generated module: grammar, metadata and AST builder
pub fn packet_generated_module() -> Module {
    Module::new()
        .service(paths::GRAMMAR, |_| Ok(Arc::new(packet_grammar())))
        .service(paths::LANGUAGE_META_DATA, |_| Ok(Arc::new(packet_meta_data())))
        .service(paths::AST_BUILDER, |_| {
            Ok(Arc::new(PacketAstBuilder) as Arc<dyn AstBuilder>)
        })
}

/// Grammar-bound AST builder for packet diagrams
///
/// A syntax error inside a statement drops that statement and resumes at the
/// next line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PacketAstBuilder;

struct BuildState<'a, 'c> {
    cursor: TokenCursor<'a>,
    context: &'c AstBuildContext<'c>,
    errors: Vec<ParserError>,
}

impl<'a> BuildState<'a, '_> {
    fn value(&self, token: &Token) -> Result<ConvertedValue, ParserError> {
        self.context.convert(token).map_err(|e| ParserError {
            message: e.to_string(),
            offset: token.offset,
            line: token.line,
            column: token.column,
        })
    }

    fn header(&mut self) -> Result<(), ParserError> {
        while self.cursor.eat(NEWLINE).is_some() {}
        let header = PACKET_HEADER_KEYWORDS
            .iter()
            .find_map(|keyword| self.cursor.eat(keyword));
        match header {
            Some(_) => Ok(()),
            None => Err(self.cursor.unexpected("one of 'packet', 'packet-beta'")),
        }
    }

    fn end_of_line(&mut self) -> Result<(), ParserError> {
        if self.cursor.at_end() {
            return Ok(());
        }
        self.cursor.expect(NEWLINE)?;
        while self.cursor.eat(NEWLINE).is_some() {}
        Ok(())
    }

    fn block(&mut self) -> Result<AstNode, ParserError> {
        let mut node = AstNode::new(PACKET_BLOCK_TYPE);
        if self.cursor.eat(BITS_MARKER).is_some() {
            let bits = self.cursor.expect(INT_RULE)?;
            node.set_property("bits", self.value(bits)?);
        } else {
            let start = self.cursor.expect(INT_RULE)?;
            node.set_property("start", self.value(start)?);
            if self.cursor.eat(RANGE_SEPARATOR).is_some() {
                let end = self.cursor.expect(INT_RULE)?;
                node.set_property("end", self.value(end)?);
            }
        }
        self.cursor.expect(LABEL_SEPARATOR)?;
        let label = self.cursor.expect(STRING_RULE)?;
        node.set_property("label", self.value(label)?);
        self.end_of_line()?;
        Ok(node)
    }

    fn title_or_accessibility(&mut self, root: &mut AstNode, token: &'a Token) -> Result<(), ParserError> {
        let feature = match token.token_type.as_str() {
            TITLE => "title",
            ACC_TITLE => "accTitle",
            _ => "accDescr",
        };
        root.set_property(feature, self.value(token)?);
        self.end_of_line()
    }

    fn statement(&mut self, root: &mut AstNode) -> Result<(), ParserError> {
        let Some(token) = self.cursor.peek() else {
            return Ok(());
        };
        match token.token_type.as_str() {
            NEWLINE => {
                self.cursor.advance();
                Ok(())
            }
            TITLE | ACC_TITLE | ACC_DESCR => {
                self.cursor.advance();
                self.title_or_accessibility(root, token)
            }
            INT_RULE | BITS_MARKER => {
                let block = self.block()?;
                root.push_child("blocks", block);
                Ok(())
            }
            _ => Err(self.cursor.unexpected("a packet block, title or accessibility statement")),
        }
    }

    /// Record `error` and skip to the start of the next line
    fn recover(&mut self, error: ParserError) {
        let skipped = self.cursor.skip_until(&[NEWLINE]);
        debug!(
            line = error.line,
            column = error.column,
            skipped,
            message = %error.message,
            "Dropped packet statement"
        );
        self.errors.push(error);
    }
}

impl AstBuilder for PacketAstBuilder {
    fn build(&self, tokens: &[Token], context: &AstBuildContext<'_>) -> AstBuildResult {
        let mut state = BuildState {
            cursor: TokenCursor::new(tokens, context.text),
            context,
            errors: Vec::new(),
        };
        let mut root = AstNode::new(PACKET_TYPE);

        if let Err(e) = state.header() {
            state.recover(e);
        }
        while !state.cursor.at_end() {
            if let Err(e) = state.statement(&mut root) {
                state.recover(e);
            }
        }

        AstBuildResult {
            value: root,
            errors: state.errors,
        }
    }
}
