use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{PartialAstIr, AstNodeParsable};
use crate::parser::ast::PartialAstIr::ARRAY_VARIABLE_DESTRUCTURING;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::{EXPECTED_COMMA_OR_CLOSING, EXPECTED_NAME_OR_DESTRUCTURING, REST_CANNOT_HAVE_DEFAULT, REST_MUST_BE_LAST};
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::destructuring::element::DestructuringElement;
use crate::parser::nodes::expressions::parse_expression;
use crate::parser::nodes::identifier::IdentifierAstNode;

#[derive(PartialEq, Debug, Clone)]
pub struct ArrayDestructureAstNode {
    pub(crate) elements: Vec<DestructuringElement>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl AstNodeParsable for ArrayDestructureAstNode {
    // assumption: iterator index is currently ON the opening [
    fn parse(iter: &mut TokenParserIter, span: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError> {
        match span {
            Either::Left(span) => Ok(ARRAY_VARIABLE_DESTRUCTURING(ArrayDestructureAstNode::parse_node(iter, &span)?)),
            Either::Right(node @ ARRAY_VARIABLE_DESTRUCTURING(_)) => Ok(node),
            Either::Right(_) => unreachable!("array destructuring only accepts tokens or parsed patterns")
        }
    }
}

impl ArrayDestructureAstNode {
    pub fn parse_node(iter: &mut TokenParserIter, opening: &TokenSpan) -> Result<ArrayDestructureAstNode, ParseError> {
        let mut nodes = vec![];

        loop {
            let span = iter.next_significant()?;
            if span.token == TOKEN::RIGHT_BRACKET {
                return Ok(ArrayDestructureAstNode::finish(nodes, opening, &span))
            }
            if span.token == TOKEN::COMMA {
                // elision, the comma both skips a position and separates it
                nodes.push(DestructuringElement::hole());
                continue
            }
            if span.token == TOKEN::S2_SPREAD_OP {
                let target = iter.next_significant()?;
                let mut decl = ArrayDestructureAstNode::parse_target(iter, &target)?;
                decl.is_rest = true;
                let next = iter.next_significant()?;
                return match next.token {
                    TOKEN::RIGHT_BRACKET => {
                        nodes.push(decl);
                        Ok(ArrayDestructureAstNode::finish(nodes, opening, &next))
                    }
                    TOKEN::S2_ASSIGN => Err(REST_CANNOT_HAVE_DEFAULT(next)),
                    _ => Err(REST_MUST_BE_LAST(span))
                }
            }

            let mut decl = ArrayDestructureAstNode::parse_target(iter, &span)?;
            let mut next = iter.next_significant()?;
            if next.token == TOKEN::S2_ASSIGN {
                // default value
                let expr_start = iter.next_significant()?;
                decl.default_value = Some(Box::new(parse_expression(iter, expr_start)?));
                next = iter.next_significant()?;
            }
            nodes.push(decl);

            match next.token {
                TOKEN::COMMA => continue,
                TOKEN::RIGHT_BRACKET => return Ok(ArrayDestructureAstNode::finish(nodes, opening, &next)),
                _ => return Err(EXPECTED_COMMA_OR_CLOSING(next, vec![TOKEN::COMMA, TOKEN::RIGHT_BRACKET]))
            }
        }
    }

    // a binding name or a nested pattern
    fn parse_target(iter: &mut TokenParserIter, span: &TokenSpan) -> Result<DestructuringElement, ParseError> {
        match span.token {
            TOKEN::IDENTIFIER(_) => Ok(DestructuringElement::named(IdentifierAstNode::from_span(span)?)),
            TOKEN::LEFT_BRACKET => Ok(DestructuringElement::nested(ArrayDestructureAstNode::parse_node(iter, span)?)),
            _ => Err(EXPECTED_NAME_OR_DESTRUCTURING(span.clone()))
        }
    }

    fn finish(elements: Vec<DestructuringElement>, opening: &TokenSpan, closing: &TokenSpan) -> ArrayDestructureAstNode {
        ArrayDestructureAstNode {
            elements,
            start: opening.start,
            end: closing.end
        }
    }

    pub fn bound_names(&self) -> Vec<&IdentifierAstNode> {
        self.elements.iter().flat_map(|x| x.bound_names()).collect()
    }
}

#[cfg(test)]
mod tests {
    use either::Either;
    use crate::lexer::tokenize;
    use crate::parser::ast::{AstNodeParsable, PartialAstIr};
    use crate::parser::errors::ParseError;
    use crate::parser::iter::TokenParserIter;
    use crate::parser::nodes::ArrayDestructureAstNode;

    fn parse_pattern(src: &str) -> Result<ArrayDestructureAstNode, ParseError> {
        let mut iter = TokenParserIter::wrap(tokenize(src.to_string()).unwrap());
        let first = iter.next_significant()?;
        match ArrayDestructureAstNode::parse(&mut iter, Either::Left(first))? {
            PartialAstIr::ARRAY_VARIABLE_DESTRUCTURING(node) => Ok(node),
            other => panic!("unexpected node {:?}", other)
        }
    }

    fn names(node: &ArrayDestructureAstNode) -> Vec<String> {
        node.bound_names().into_iter().map(|x| x.name.clone()).collect()
    }

    #[test]
    fn should_parse_nested_pattern() {
        let node = parse_pattern("[foo, [[bar], baz]]").unwrap();
        assert_eq!(node.elements.len(), 2);
        assert_eq!(names(&node), vec!["foo", "bar", "baz"]);
        let inner = node.elements[1].children.as_ref().unwrap();
        assert!(inner.elements[0].children.is_some());
        assert_eq!(inner.elements[1].name.as_ref().unwrap().name, "baz");
        assert_eq!((node.start, node.end), (0, 19));
    }

    #[test]
    fn should_parse_leading_holes() {
        let node = parse_pattern("[, , third]").unwrap();
        assert_eq!(node.elements.len(), 3);
        assert!(node.elements[0].is_hole());
        assert!(node.elements[1].is_hole());
        assert_eq!(names(&node), vec!["third"]);
    }

    #[test]
    fn should_parse_inner_hole_and_trailing_comma() {
        let node = parse_pattern("[a, , b,]").unwrap();
        assert_eq!(node.elements.len(), 3);
        assert!(node.elements[1].is_hole());
    }

    #[test]
    fn should_parse_rest_element() {
        let node = parse_pattern("[head, ...tail]").unwrap();
        assert!(!node.elements[0].is_rest);
        assert!(node.elements[1].is_rest);
        assert_eq!(names(&node), vec!["head", "tail"]);
    }

    #[test]
    fn should_parse_nested_rest_pattern() {
        let node = parse_pattern("[a, ...[b, c]]").unwrap();
        assert!(node.elements[1].is_rest);
        assert_eq!(names(&node), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_parse_defaults() {
        let node = parse_pattern("[x = 1, [y] = [2]]").unwrap();
        assert_eq!(node.elements[0].default_value.as_deref(), Some(&PartialAstIr::NUMEXPR(1.0)));
        assert!(matches!(node.elements[1].default_value.as_deref(), Some(PartialAstIr::ARRAY_DECL(_))));
    }

    #[test]
    fn should_span_lines() {
        let node = parse_pattern("[\n  a, // first\n  b\n]").unwrap();
        assert_eq!(names(&node), vec!["a", "b"]);
    }

    #[test]
    fn should_reject_rest_that_is_not_last() {
        assert!(matches!(parse_pattern("[...a, b]"), Err(ParseError::REST_MUST_BE_LAST(_))));
        assert!(matches!(parse_pattern("[...a,]"), Err(ParseError::REST_MUST_BE_LAST(_))));
    }

    #[test]
    fn should_reject_rest_default() {
        assert!(matches!(parse_pattern("[...a = []]"), Err(ParseError::REST_CANNOT_HAVE_DEFAULT(_))));
    }

    #[test]
    fn should_reject_literal_targets() {
        assert!(matches!(parse_pattern("[1]"), Err(ParseError::EXPECTED_NAME_OR_DESTRUCTURING(_))));
    }

    #[test]
    fn should_reject_unclosed_pattern() {
        assert!(matches!(parse_pattern("[a b]"), Err(ParseError::EXPECTED_COMMA_OR_CLOSING(_, _))));
        assert!(matches!(parse_pattern("[a,"), Err(ParseError::EXPECTED_NAME_OR_DESTRUCTURING(_))));
    }
}
