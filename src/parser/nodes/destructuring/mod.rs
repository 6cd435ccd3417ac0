mod array_destruct;
mod element;

pub use array_destruct::ArrayDestructureAstNode;
pub use element::DestructuringElement;
