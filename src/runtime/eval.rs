use crate::parser::ast::PartialAstIr;
use crate::runtime::error::RuntimeError;
use crate::runtime::scope::Scope;
use crate::runtime::value::Value;

pub fn evaluate(expr: &PartialAstIr, scope: &Scope) -> Result<Value, RuntimeError> {
    let value = match expr {
        PartialAstIr::BOOLEXPR_TRUE => Value::Boolean(true),
        PartialAstIr::BOOLEXPR_FALSE => Value::Boolean(false),
        PartialAstIr::NULLEXPR => Value::Null,
        PartialAstIr::UNDEFINEDEXPR => Value::Undefined,
        PartialAstIr::NUMEXPR(n) => Value::Number(*n),
        PartialAstIr::STREXPR(str) => Value::String(str.clone()),
        PartialAstIr::IDENT_REF(ident) => scope.lookup(ident)?,
        PartialAstIr::ARRAY_DECL(array) => Value::Array(evaluate_list(&array.0, scope)?),
        PartialAstIr::SPREAD(_, _)
        | PartialAstIr::VAR_DECL(_)
        | PartialAstIr::LOG_CALL(_)
        | PartialAstIr::ARRAY_VARIABLE_DESTRUCTURING(_) => unreachable!("not an expression: {:?}", expr)
    };
    Ok(value)
}

// array literal elements and call arguments, the only places a spread may appear
pub fn evaluate_list(exprs: &[PartialAstIr], scope: &Scope) -> Result<Vec<Value>, RuntimeError> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        match expr {
            PartialAstIr::SPREAD(inner, span) => {
                let spread = evaluate(inner, scope)?;
                let elements = spread.iter_elements()
                    .ok_or(RuntimeError::NOT_ITERABLE(span.start, span.end, spread.type_name()))?;
                values.extend(elements);
            }
            other => values.push(evaluate(other, scope)?)
        }
    }
    Ok(values)
}
