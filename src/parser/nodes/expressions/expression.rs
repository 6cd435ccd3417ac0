use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{AstNodeParsable, PartialAstIr};
use crate::parser::ast::PartialAstIr::NUMEXPR;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::EXPECTED_EXPRESSION;
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::declarations::ArrayAstNode;
use crate::parser::nodes::identifier::IdentifierAstNode;

// assumption: the iterator is ON `span`, the first token of the expression
pub fn parse_expression(iter: &mut TokenParserIter, span: TokenSpan) -> Result<PartialAstIr, ParseError> {
    if span.token.is_static_value() {
        return PartialAstIr::parse_static_value(span.token.clone()).ok_or(EXPECTED_EXPRESSION(span))
    }
    match span.token {
        TOKEN::IDENTIFIER(_) => IdentifierAstNode::parse(iter, Either::Left(span)),
        TOKEN::LEFT_BRACKET => ArrayAstNode::parse(iter, Either::Left(span)),
        TOKEN::SUBTRACT => {
            // negative numeric literal, there is no arithmetic beyond that
            let operand = iter.next_significant()?;
            match operand.token {
                TOKEN::S2_NUM_LITERAL(n) => Ok(NUMEXPR(-n)),
                _ => Err(EXPECTED_EXPRESSION(operand))
            }
        }
        _ => Err(EXPECTED_EXPRESSION(span))
    }
}

// an expression that may be prefixed with `...`, as allowed in array literals and call arguments
pub fn parse_spreadable_expression(iter: &mut TokenParserIter, span: TokenSpan) -> Result<PartialAstIr, ParseError> {
    if span.token == TOKEN::S2_SPREAD_OP {
        let operand = iter.next_significant()?;
        return Ok(PartialAstIr::SPREAD(Box::new(parse_expression(iter, operand)?), span))
    }
    parse_expression(iter, span)
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::ast::PartialAstIr;
    use crate::parser::errors::ParseError;
    use crate::parser::iter::TokenParserIter;
    use crate::parser::nodes::parse_expression;

    fn parse(src: &str) -> Result<PartialAstIr, ParseError> {
        let mut iter = TokenParserIter::wrap(tokenize(src.to_string()).unwrap());
        let first = iter.next_significant()?;
        parse_expression(&mut iter, first)
    }

    #[test]
    fn should_parse_static_values() {
        assert_eq!(parse("42").unwrap(), PartialAstIr::NUMEXPR(42.0));
        assert_eq!(parse("- 1.5").unwrap(), PartialAstIr::NUMEXPR(-1.5));
        assert_eq!(parse("'a'").unwrap(), PartialAstIr::STREXPR("a".into()));
        assert_eq!(parse("undefined").unwrap(), PartialAstIr::UNDEFINEDEXPR);
        assert_eq!(parse("null").unwrap(), PartialAstIr::NULLEXPR);
        assert_eq!(parse("true").unwrap(), PartialAstIr::BOOLEXPR_TRUE);
    }

    #[test]
    fn should_parse_identifier_reference() {
        match parse("tail").unwrap() {
            PartialAstIr::IDENT_REF(ident) => assert_eq!(ident.name, "tail"),
            other => panic!("unexpected node {:?}", other)
        }
    }

    #[test]
    fn should_reject_non_expressions() {
        assert!(matches!(parse(")"), Err(ParseError::EXPECTED_EXPRESSION(_))));
        assert!(matches!(parse("-x"), Err(ParseError::EXPECTED_EXPRESSION(_))));
    }
}
