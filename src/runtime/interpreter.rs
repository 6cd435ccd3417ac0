use either::Either;
use tracing::{debug, trace};
use crate::parser::ast::PartialAstIr;
use crate::parser::{LogCallAstNode, VariableAstNode, VARIABLE_DECL_TYPE};
use crate::runtime::destructure::destructure;
use crate::runtime::error::{RuntimeError, RuntimeWarning};
use crate::runtime::eval::{evaluate, evaluate_list};
use crate::runtime::scope::Scope;
use crate::runtime::transcript::{LogEntry, Transcript};
use crate::runtime::value::Value;

// runs statements top to bottom against a fresh script scope
#[derive(Debug, Default)]
pub struct Interpreter {
    scope: Scope,
    transcript: Transcript,
    warnings: Vec<RuntimeWarning>,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            scope: Scope::new(),
            transcript: Transcript::default(),
            warnings: vec![],
        }
    }

    // stops at the first error, whatever was logged before it stays in the transcript
    pub fn execute(&mut self, statements: &[PartialAstIr]) -> Result<(), RuntimeError> {
        for statement in statements {
            match statement {
                PartialAstIr::VAR_DECL(decl) => self.declare(decl)?,
                PartialAstIr::LOG_CALL(call) => self.log(call)?,
                other => unreachable!("not a statement: {:?}", other)
            }
        }
        Ok(())
    }

    fn declare(&mut self, decl: &VariableAstNode) -> Result<(), RuntimeError> {
        let value = match &decl.initializer {
            Some(init) => evaluate(init, &self.scope)?,
            None => Value::Undefined
        };
        match &decl.name {
            Either::Left(ident) => {
                // `var x` without initializer keeps an earlier value
                if decl.initializer.is_none() && decl.decltype == VARIABLE_DECL_TYPE::VAR && self.scope.contains(&ident.name) {
                    return Ok(())
                }
                trace!(name = %ident.name, "declare");
                self.scope.declare(ident, value, decl.decltype)
            }
            Either::Right(pattern) => {
                let outcome = destructure(pattern, value, &mut self.scope, decl.decltype)?;
                debug!(bindings = outcome.bindings.len(), start = decl.start, end = decl.end, "destructured");
                for binding in &outcome.bindings {
                    let shown = binding.value.inspect();
                    trace!(name = %binding.name, value = %shown, "bind");
                }
                self.warnings.extend(outcome.warnings);
                Ok(())
            }
        }
    }

    fn log(&mut self, call: &LogCallAstNode) -> Result<(), RuntimeError> {
        let values = evaluate_list(&call.args, &self.scope)?;
        self.transcript.entries.push(LogEntry {
            line: call.line,
            values
        });
        Ok(())
    }

    pub fn warnings(&self) -> &[RuntimeWarning] {
        &self.warnings
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}
