use crate::errors::Diagnostic;
use crate::lexer::span::TokenSpan;

#[derive(Debug)]
#[allow(non_camel_case_types)]
pub enum LexError {
    // where the literal opened, which quote closes it
    UNTERMINATED_STRING(TokenSpan, char),
    UNTERMINATED_COMMENT(TokenSpan),
    UNEXPECTED_CHAR(usize, char),
    // from the backslash to the last char read
    INVALID_ESCAPE(usize, usize),
    MALFORMED_NUMBER(TokenSpan, String),
}

impl From<LexError> for Diagnostic {
    fn from(value: LexError) -> Self {
        match value {
            LexError::UNTERMINATED_STRING(span, quote) => Diagnostic::lex(span.start).set_end_char(span.end)
                .message("Unterminated string literal.")
                .pot_fix(format!("Close the string with {} before the end of the line", quote))
                .ok(),
            LexError::UNTERMINATED_COMMENT(span) => Diagnostic::lex(span.start).set_end_char(span.end)
                .message("Unterminated block comment.")
                .pot_fix("Close the comment with */")
                .ok(),
            LexError::UNEXPECTED_CHAR(index, char) => Diagnostic::lex(index).set_end_char(index + char.len_utf8())
                .message(format!("Unexpected character '{}'.", char))
                .ok(),
            LexError::INVALID_ESCAPE(start, end) => Diagnostic::lex(start).set_end_char(end)
                .message("Invalid escape sequence.")
                .pot_fix("Use \\xHH, \\uHHHH or \\u{H...} with hex digits")
                .ok(),
            LexError::MALFORMED_NUMBER(span, literal) => Diagnostic::lex(span.start).set_end_char(span.end)
                .message(format!("Malformed numeric literal `{}`.", literal))
                .ok(),
        }
    }
}
