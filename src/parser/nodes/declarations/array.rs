use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{PartialAstIr, AstNodeParsable};
use crate::parser::ast::PartialAstIr::ARRAY_DECL;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::{ARRAY_HOLES_UNSUPPORTED, EXPECTED_COMMA_OR_CLOSING};
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::expressions::parse_spreadable_expression;

#[derive(PartialEq, Debug, Clone)]
pub struct ArrayAstNode(pub(crate) Vec<PartialAstIr>);

impl AstNodeParsable for ArrayAstNode {
    // assuming that the iter is currently on the opening [
    fn parse(iter: &mut TokenParserIter, _: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError> {
        let mut elements = vec![];
        loop {
            let span = iter.next_significant()?;
            if span.token == TOKEN::RIGHT_BRACKET {
                break
            }
            if span.token == TOKEN::COMMA {
                return Err(ARRAY_HOLES_UNSUPPORTED(span))
            }
            elements.push(parse_spreadable_expression(iter, span)?);
            let next = iter.next_significant()?;
            match next.token {
                TOKEN::COMMA => continue,
                TOKEN::RIGHT_BRACKET => break,
                _ => return Err(EXPECTED_COMMA_OR_CLOSING(next, vec![TOKEN::COMMA, TOKEN::RIGHT_BRACKET]))
            }
        }
        Ok(ARRAY_DECL(ArrayAstNode(elements)))
    }
}
