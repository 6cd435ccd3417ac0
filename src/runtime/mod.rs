mod destructure;
mod error;
mod eval;
mod interpreter;
mod scope;
mod transcript;
mod value;

pub use interpreter::Interpreter;
pub use transcript::Transcript;
