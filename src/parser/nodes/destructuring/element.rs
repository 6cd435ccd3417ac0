use crate::parser::ast::PartialAstIr;
use crate::parser::nodes::ArrayDestructureAstNode;
use crate::parser::nodes::identifier::IdentifierAstNode;

// a hole has neither a name nor children
#[derive(PartialEq, Debug, Clone)]
pub struct DestructuringElement {
    pub(crate) name: Option<IdentifierAstNode>,
    pub(crate) default_value: Option<Box<PartialAstIr>>,
    pub(crate) children: Option<ArrayDestructureAstNode>,
    pub(crate) is_rest: bool,
}

impl DestructuringElement {
    pub fn hole() -> DestructuringElement {
        DestructuringElement {
            name: None,
            default_value: None,
            children: None,
            is_rest: false,
        }
    }

    pub fn named(name: IdentifierAstNode) -> DestructuringElement {
        DestructuringElement {
            name: Some(name),
            default_value: None,
            children: None,
            is_rest: false,
        }
    }

    pub fn nested(children: ArrayDestructureAstNode) -> DestructuringElement {
        DestructuringElement {
            name: None,
            default_value: None,
            children: Some(children),
            is_rest: false,
        }
    }

    pub fn is_hole(&self) -> bool {
        self.name.is_none() && self.children.is_none()
    }

    // every name this element introduces, nested ones included, in source order
    pub fn bound_names(&self) -> Vec<&IdentifierAstNode> {
        match (&self.name, &self.children) {
            (Some(name), _) => vec![name],
            (None, Some(children)) => children.bound_names(),
            (None, None) => vec![]
        }
    }
}
