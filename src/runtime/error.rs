use crate::errors::{Diagnostic, ErrorLevel};
use crate::parser::IdentifierAstNode;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    NOT_DEFINED(IdentifierAstNode),
    ALREADY_DECLARED(IdentifierAstNode),
    // start, end, type name of the spread value
    NOT_ITERABLE(usize, usize, &'static str),
}

// reported but execution carries on
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeWarning {
    // a nested pattern met a value it cannot walk: start, end, type name
    PATTERN_SOURCE_NOT_ITERABLE(usize, usize, &'static str),
}

impl From<RuntimeError> for Diagnostic {
    fn from(value: RuntimeError) -> Self {
        match value {
            RuntimeError::NOT_DEFINED(ident) => Diagnostic::runtime(ident.start).set_end_char(ident.end)
                .message(format!("ReferenceError: {} is not defined", ident.name))
                .pot_fix(format!("Declare `{}` before this line", ident.name))
                .ok(),
            RuntimeError::ALREADY_DECLARED(ident) => Diagnostic::runtime(ident.start).set_end_char(ident.end)
                .message(format!("SyntaxError: Identifier '{}' has already been declared", ident.name))
                .pot_fix("Pick a different name, only `var` may be declared twice")
                .ok(),
            RuntimeError::NOT_ITERABLE(start, end, type_name) => Diagnostic::runtime(start).set_end_char(end)
                .message(format!("TypeError: {} is not iterable", type_name))
                .cause("Only arrays and strings can be spread.")
                .ok(),
        }
    }
}

impl From<RuntimeWarning> for Diagnostic {
    fn from(value: RuntimeWarning) -> Self {
        match value {
            RuntimeWarning::PATTERN_SOURCE_NOT_ITERABLE(start, end, type_name) => Diagnostic::runtime(start).set_end_char(end)
                .level(ErrorLevel::WARN)
                .message(format!("Destructuring a {} value, every name in this pattern is bound to undefined.", type_name))
                .ok(),
        }
    }
}
