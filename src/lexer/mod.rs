mod span;
mod tokens;
mod iter;
mod lex;
#[cfg(test)]
mod tests;
mod error;

pub use lex::tokenize;
pub use span::TokenSpan;
pub use tokens::TOKEN;
