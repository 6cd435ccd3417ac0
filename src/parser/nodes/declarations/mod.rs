mod array;
mod variable;

pub use array::ArrayAstNode;
pub use variable::{VariableAstNode, VARIABLE_DECL_TYPE};
