use either::Either;
use crate::lexer::TokenSpan;
use crate::parser::ast::{AstNodeParsable, PartialAstIr};
use crate::parser::ast::PartialAstIr::IDENT_REF;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::EXPECTED_NAME_OR_DESTRUCTURING;
use crate::parser::iter::TokenParserIter;

#[derive(PartialEq, Debug, Clone)]
pub struct IdentifierAstNode {
    pub(crate) name: String,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl IdentifierAstNode {
    pub fn from_span(span: &TokenSpan) -> Result<IdentifierAstNode, ParseError> {
        match span.token.get_ident_name() {
            Some(name) => Ok(IdentifierAstNode {
                name,
                start: span.start,
                end: span.end
            }),
            None => Err(EXPECTED_NAME_OR_DESTRUCTURING(span.clone()))
        }
    }
}

impl AstNodeParsable for IdentifierAstNode {
    // a single token, the iterator does not move
    fn parse(_: &mut TokenParserIter, span: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError> {
        match span {
            Either::Left(span) => Ok(IDENT_REF(IdentifierAstNode::from_span(&span)?)),
            Either::Right(node @ IDENT_REF(_)) => Ok(node),
            Either::Right(_) => unreachable!("identifier parsing only accepts tokens or identifier refs")
        }
    }
}
