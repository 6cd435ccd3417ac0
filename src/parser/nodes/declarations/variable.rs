use either::Either;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::ast::{PartialAstIr, AstNodeParsable};
use crate::parser::ast::PartialAstIr::VAR_DECL;
use crate::parser::errors::ParseError;
use crate::parser::errors::ParseError::{DUPLICATE_BINDING, EXPECTED_NAME_OR_DESTRUCTURING, NEEDS_INIT};
use crate::parser::iter::TokenParserIter;
use crate::parser::nodes::destructuring::ArrayDestructureAstNode;
use crate::parser::nodes::expressions::parse_expression;
use crate::parser::nodes::identifier::IdentifierAstNode;

#[derive(PartialEq, Debug, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum VARIABLE_DECL_TYPE {
    LET,
    CONST,
    VAR
}

#[derive(PartialEq, Debug, Clone)]
pub struct VariableAstNode {
    pub name: Either<IdentifierAstNode, ArrayDestructureAstNode>, //either a plain name or an array destructuring pattern
    pub decltype: VARIABLE_DECL_TYPE,
    pub initializer: Option<Box<PartialAstIr>>,
    pub start: usize,
    pub end: usize,
}

impl AstNodeParsable for VariableAstNode {
    // expecting tokens ONLY (Either::Left)
    fn parse(iter: &mut TokenParserIter, span: Either<TokenSpan, PartialAstIr>) -> Result<PartialAstIr, ParseError> {
        let span = match span {
            Either::Left(span) => span,
            Either::Right(_) => unreachable!("a declaration starts at a token")
        };
        let decltype = match span.token {
            TOKEN::DECL_LET => VARIABLE_DECL_TYPE::LET,
            TOKEN::DECL_CONST => VARIABLE_DECL_TYPE::CONST,
            TOKEN::DECL_VAR => VARIABLE_DECL_TYPE::VAR,
            _ => unreachable!("declaration parsing started on {:?}", span.token)
        };

        let target = iter.next_significant()?;
        let name = match target.token {
            TOKEN::IDENTIFIER(_) => Either::Left(IdentifierAstNode::from_span(&target)?),
            TOKEN::LEFT_BRACKET => {
                let pattern = ArrayDestructureAstNode::parse_node(iter, &target)?;
                // var lets a later position overwrite an earlier one
                if decltype != VARIABLE_DECL_TYPE::VAR {
                    check_duplicate_names(&pattern)?;
                }
                Either::Right(pattern)
            }
            _ => return Err(EXPECTED_NAME_OR_DESTRUCTURING(target))
        };

        // only a plain `let x` / `var x` may go without an initializer
        let next = iter.peek_skip_whitespace();
        let has_init = next.as_ref().map_or(false, |x| x.token == TOKEN::S2_ASSIGN);
        if !has_init {
            if name.is_right() || decltype == VARIABLE_DECL_TYPE::CONST {
                return Err(NEEDS_INIT(next.unwrap_or(target), decltype))
            }
            let end = name.as_ref().left().map_or(span.end, |x| x.end);
            return Ok(VAR_DECL(VariableAstNode {
                name,
                decltype,
                initializer: None,
                start: span.start,
                end
            }))
        }
        iter.next_significant()?; //drop =
        let init_start = iter.next_significant()?;
        let initializer = parse_expression(iter, init_start)?;
        let end = iter.current_end();
        Ok(VAR_DECL(VariableAstNode {
            name,
            decltype,
            initializer: Some(Box::new(initializer)),
            start: span.start,
            end
        }))
    }
}

fn check_duplicate_names(pattern: &ArrayDestructureAstNode) -> Result<(), ParseError> {
    let names = pattern.bound_names();
    for (ix, name) in names.iter().enumerate() {
        if names[..ix].iter().any(|x| x.name == name.name) {
            return Err(DUPLICATE_BINDING((*name).clone()))
        }
    }
    Ok(())
}
