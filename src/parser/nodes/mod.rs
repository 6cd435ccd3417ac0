mod destructuring;
mod expressions;
mod declarations;
pub mod identifier;

pub use destructuring::*;
pub use expressions::*;
pub use declarations::*;
pub use identifier::IdentifierAstNode;
