use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{AstNodeParsable, PartialAstIr};
use crate::parser::ast::PartialAstIr::LOG_CALL;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::{EXPECTED_COMMA_OR_CLOSING, UNSUPPORTED_CALL};
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::expressions::parse_spreadable_expression;

const RECEIVER: &str = "console";
const METHOD: &str = "log";

// console.log(<args>*)
#[derive(PartialEq, Debug, Clone)]
pub struct LogCallAstNode {
    pub(crate) args: Vec<PartialAstIr>,
    pub(crate) line: usize,
}

impl AstNodeParsable for LogCallAstNode {
    // expecting tokens ONLY (Either::Left), the iterator is on `console`
    fn parse(iter: &mut TokenParserIter, span: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError> {
        let span = match span {
            Either::Left(span) => span,
            Either::Right(_) => unreachable!("a log call starts at a token")
        };
        let receiver = span.token.get_ident_name().unwrap_or_default();
        if receiver != RECEIVER {
            return Err(UNSUPPORTED_CALL(span, receiver))
        }
        iter.expect(TOKEN::PERIOD)?;
        let method = iter.next_significant()?;
        match method.token.get_ident_name() {
            Some(name) if name == METHOD => {}
            Some(name) => return Err(UNSUPPORTED_CALL(method, format!("{}.{}", RECEIVER, name))),
            None => return Err(ParseError::EXPECTED_ONEOF(method, vec![TOKEN::IDENTIFIER(METHOD.into())]))
        }
        iter.expect(TOKEN::LEFT_PAREN)?;

        let mut args = vec![];
        loop {
            let next = iter.next_significant()?;
            if next.token == TOKEN::RIGHT_PAREN {
                break
            }
            args.push(parse_spreadable_expression(iter, next)?);
            let sep = iter.next_significant()?;
            match sep.token {
                TOKEN::COMMA => continue,
                TOKEN::RIGHT_PAREN => break,
                _ => return Err(EXPECTED_COMMA_OR_CLOSING(sep, vec![TOKEN::COMMA, TOKEN::RIGHT_PAREN]))
            }
        }
        Ok(LOG_CALL(LogCallAstNode {
            args,
            line: span.line()
        }))
    }
}
