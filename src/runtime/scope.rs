use std::collections::HashMap;
use crate::parser::{IdentifierAstNode, VARIABLE_DECL_TYPE};
use crate::runtime::error::RuntimeError;
use crate::runtime::value::Value;

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    decltype: VARIABLE_DECL_TYPE,
}

// the single script level scope every example declares into
#[derive(Debug, Default)]
pub struct Scope {
    slots: HashMap<String, Slot>,
}

impl Scope {
    pub fn new() -> Scope {
        Scope::default()
    }

    pub fn declare(&mut self, ident: &IdentifierAstNode, value: Value, decltype: VARIABLE_DECL_TYPE) -> Result<(), RuntimeError> {
        if let Some(existing) = self.slots.get(&ident.name) {
            let both_var = existing.decltype == VARIABLE_DECL_TYPE::VAR && decltype == VARIABLE_DECL_TYPE::VAR;
            if !both_var {
                return Err(RuntimeError::ALREADY_DECLARED(ident.clone()))
            }
        }
        self.slots.insert(ident.name.clone(), Slot { value, decltype });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn lookup(&self, ident: &IdentifierAstNode) -> Result<Value, RuntimeError> {
        self.slots.get(&ident.name)
            .map(|slot| slot.value.clone())
            .ok_or_else(|| RuntimeError::NOT_DEFINED(ident.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{IdentifierAstNode, VARIABLE_DECL_TYPE};
    use crate::runtime::error::RuntimeError;
    use crate::runtime::scope::Scope;
    use crate::runtime::value::Value;

    fn ident(name: &str) -> IdentifierAstNode {
        IdentifierAstNode { name: name.into(), start: 0, end: name.len() }
    }

    #[test]
    fn should_reject_let_redeclaration() {
        let mut scope = Scope::new();
        scope.declare(&ident("a"), Value::Number(1.0), VARIABLE_DECL_TYPE::LET).unwrap();
        let err = scope.declare(&ident("a"), Value::Null, VARIABLE_DECL_TYPE::VAR).unwrap_err();
        assert_eq!(err, RuntimeError::ALREADY_DECLARED(ident("a")));
        assert_eq!(scope.lookup(&ident("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn should_allow_var_redeclaration() {
        let mut scope = Scope::new();
        scope.declare(&ident("a"), Value::Number(1.0), VARIABLE_DECL_TYPE::VAR).unwrap();
        scope.declare(&ident("a"), Value::Number(2.0), VARIABLE_DECL_TYPE::VAR).unwrap();
        assert_eq!(scope.lookup(&ident("a")).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn should_report_unknown_names() {
        let scope = Scope::new();
        assert_eq!(scope.lookup(&ident("nope")), Err(RuntimeError::NOT_DEFINED(ident("nope"))));
        assert!(!scope.contains("nope"));
    }
}
