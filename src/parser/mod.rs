mod parse;
mod iter;
mod nodes;
pub mod ast;
mod errors;

pub use parse::parse_token_stream;
pub use nodes::*;
