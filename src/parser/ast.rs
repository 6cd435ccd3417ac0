use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::PartialAstIr::{BOOLEXPR_FALSE, BOOLEXPR_TRUE, NULLEXPR, NUMEXPR, STREXPR, UNDEFINEDEXPR};
use crate::parser::errors::ParseError;
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::{ArrayAstNode, ArrayDestructureAstNode, IdentifierAstNode, LogCallAstNode, VariableAstNode};

#[derive(PartialEq, Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum PartialAstIr {
    // statements
    VAR_DECL(VariableAstNode),
    LOG_CALL(LogCallAstNode),
    // patterns
    ARRAY_VARIABLE_DESTRUCTURING(ArrayDestructureAstNode),
    // expressions
    IDENT_REF(IdentifierAstNode),
    ARRAY_DECL(ArrayAstNode),
    SPREAD(Box<PartialAstIr>, TokenSpan),
    BOOLEXPR_TRUE,
    BOOLEXPR_FALSE,
    NUMEXPR(f64),
    NULLEXPR,
    UNDEFINEDEXPR,
    STREXPR(String),
}

pub trait AstNodeParsable {
    // assumption for every implementor: the iterator is ON the first token of the node when called,
    // and is left ON the last token of the node
    fn parse(iter: &mut TokenParserIter, span: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError>;
}

impl PartialAstIr {
    pub fn parse_static_value(value: TOKEN) -> Option<PartialAstIr> {
        let node = match value {
            TOKEN::TRUE => BOOLEXPR_TRUE,
            TOKEN::FALSE => BOOLEXPR_FALSE,
            TOKEN::KEYWORD_NULL => NULLEXPR,
            TOKEN::KEYWORD_UNDEFINED => UNDEFINEDEXPR,
            TOKEN::S2_NUM_LITERAL(n) => NUMEXPR(n),
            TOKEN::STRING_LITERAL(str) => STREXPR(str),
            _ => return None
        };
        Some(node)
    }
}
