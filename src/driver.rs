use tracing::debug;
use crate::errors::ErrorReporter;
use crate::lexer::tokenize;
use crate::parser::parse_token_stream;
use crate::runtime::{Interpreter, Transcript};

// lex, parse and run the reporter's file. Every problem lands in the reporter,
// the transcript holds whatever was logged before the first error
pub fn run_script(reporter: &mut ErrorReporter) -> Transcript {
    let tokens = match tokenize(reporter.file.clone()) {
        Ok(tokens) => tokens,
        Err(err) => {
            reporter.add(err);
            return Transcript::default()
        }
    };
    debug!(tokens = tokens.len(), file = %reporter.file_name, "lexed");
    let statements = match parse_token_stream(tokens) {
        Ok(statements) => statements,
        Err(err) => {
            reporter.add(err);
            return Transcript::default()
        }
    };
    let mut interpreter = Interpreter::new();
    let result = interpreter.execute(&statements);
    for warning in interpreter.warnings() {
        reporter.add(warning.clone());
    }
    if let Err(err) = result {
        reporter.add(err);
    }
    interpreter.into_transcript()
}
