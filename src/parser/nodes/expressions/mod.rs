mod expression;
mod log_call;

pub use expression::{parse_expression, parse_spreadable_expression};
pub use log_call::LogCallAstNode;
