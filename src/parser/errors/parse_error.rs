use crate::errors::Diagnostic;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::nodes::{IdentifierAstNode, VARIABLE_DECL_TYPE};

// first enum val is ALWAYS the span that this error originated at
#[allow(non_camel_case_types)]
#[derive(Debug)]
pub enum ParseError {
    EXPECTED_NAME_OR_DESTRUCTURING(TokenSpan),
    // what we received, possible closing options
    EXPECTED_COMMA_OR_CLOSING(TokenSpan, Vec<TOKEN>),
    // what we received instead, what are the possible options
    EXPECTED_ONEOF(TokenSpan, Vec<TOKEN>),
    EXPECTED_EXPRESSION(TokenSpan),
    EXPECTED_STATEMENT(TokenSpan),
    // the previous statement ended and the next one started on the same line
    EXPECTED_STATEMENT_END(TokenSpan),
    // what we got instead, decl type
    NEEDS_INIT(TokenSpan, VARIABLE_DECL_TYPE),
    REST_MUST_BE_LAST(TokenSpan),
    REST_CANNOT_HAVE_DEFAULT(TokenSpan),
    ARRAY_HOLES_UNSUPPORTED(TokenSpan),
    DUPLICATE_BINDING(IdentifierAstNode),
    // callee as written
    UNSUPPORTED_CALL(TokenSpan, String),
    UNEXPECTED_EOF(TokenSpan),
}

fn join_tokens(tokens: &[TOKEN]) -> String {
    tokens.iter().map(|x| x.describe()).collect::<Vec<String>>().join(" or ")
}

fn decl_keyword(decl: VARIABLE_DECL_TYPE) -> &'static str {
    match decl {
        VARIABLE_DECL_TYPE::LET => "let",
        VARIABLE_DECL_TYPE::CONST => "const",
        VARIABLE_DECL_TYPE::VAR => "var",
    }
}

impl From<ParseError> for Diagnostic {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::EXPECTED_NAME_OR_DESTRUCTURING(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected variable name or destructuring pattern, got {}.", span.token.describe()))
                .ok(),
            ParseError::EXPECTED_COMMA_OR_CLOSING(span, closing) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected {}, got {}.", join_tokens(&closing), span.token.describe()))
                .ok(),
            ParseError::EXPECTED_ONEOF(span, options) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected {}, got {}.", join_tokens(&options), span.token.describe()))
                .ok(),
            ParseError::EXPECTED_EXPRESSION(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected an expression, got {}.", span.token.describe()))
                .pot_fix("Use a number, string, boolean, null, undefined, identifier or array literal")
                .ok(),
            ParseError::EXPECTED_STATEMENT(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected a declaration or console.log call, got {}.", span.token.describe()))
                .ok(),
            ParseError::EXPECTED_STATEMENT_END(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Expected `;` or a line break before {}.", span.token.describe()))
                .pot_fix("Put each statement on its own line")
                .ok(),
            ParseError::NEEDS_INIT(span, decl) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("Missing initializer in `{}` declaration.", decl_keyword(decl)))
                .pot_fix("Add `= <expression>` after the declared name or pattern")
                .ok(),
            ParseError::REST_MUST_BE_LAST(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message("Rest element must be last element.")
                .pot_fix("Move the `...` element to the end of the pattern and drop any trailing comma")
                .ok(),
            ParseError::REST_CANNOT_HAVE_DEFAULT(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message("Rest element may not have a default initializer.")
                .cause("A rest element always receives an array, possibly empty, so a default would never apply.")
                .ok(),
            ParseError::ARRAY_HOLES_UNSUPPORTED(span) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message("Holes in array literals are not supported.")
                .pot_fix("Write `undefined` explicitly")
                .ok(),
            ParseError::DUPLICATE_BINDING(ident) => Diagnostic::ast(ident.start).set_end_char(ident.end)
                .message(format!("Identifier '{}' has already been declared.", ident.name))
                .ok(),
            ParseError::UNSUPPORTED_CALL(span, callee) => Diagnostic::ast(span.start).set_end_char(span.end)
                .message(format!("`{}` is not supported.", callee))
                .pot_fix("Only console.log(...) can be called")
                .ok(),
            ParseError::UNEXPECTED_EOF(span) => Diagnostic::ast(span.start)
                .message("Unexpected end of input.")
                .ok(),
        }
    }
}
