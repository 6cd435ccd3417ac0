use either::Either;
use tracing::debug;
use crate::iter_util::CommonIter;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{PartialAstIr, AstNodeParsable};
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::{EXPECTED_STATEMENT, EXPECTED_STATEMENT_END};
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::{LogCallAstNode, VariableAstNode};

pub fn parse_token_stream(stream: Vec<TokenSpan>) -> Result<Vec<PartialAstIr>, ParseError> {
    let mut iter = TokenParserIter::wrap(stream);
    let mut statements = vec![];
    while let Some(span) = iter.next_skip_whitespace() {
        let statement = match span.token {
            TOKEN::EOF => break,
            TOKEN::SEMI_COLON => continue,
            _ if span.token.is_declaration() => VariableAstNode::parse(&mut iter, Either::Left(span))?,
            TOKEN::IDENTIFIER(_) => LogCallAstNode::parse(&mut iter, Either::Left(span))?,
            _ => return Err(EXPECTED_STATEMENT(span))
        };
        statements.push(statement);

        // statements end at `;`, a line break or the end of input
        let terminated = iter.line_break_ahead() || iter.peek_skip_whitespace()
            .map_or(true, |next| next.token == TOKEN::SEMI_COLON || next.token == TOKEN::EOF);
        if !terminated {
            iter.skip_trivia();
            return Err(EXPECTED_STATEMENT_END(iter.next_significant()?))
        }
    }
    debug!(statements = statements.len(), "parsed token stream");
    Ok(statements)
}
