use tracing::warn;
use crate::parser::{ArrayDestructureAstNode, DestructuringElement, IdentifierAstNode, VARIABLE_DECL_TYPE};
use crate::runtime::error::{RuntimeError, RuntimeWarning};
use crate::runtime::eval::evaluate;
use crate::runtime::scope::Scope;
use crate::runtime::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

// everything one destructuring statement produced, in declaration order
#[derive(Debug, Default)]
pub struct DestructureOutcome {
    pub bindings: Vec<Binding>,
    pub warnings: Vec<RuntimeWarning>,
}

struct BindCtx<'s> {
    scope: &'s mut Scope,
    decltype: VARIABLE_DECL_TYPE,
    outcome: DestructureOutcome,
}

// Binds every name in `pattern` against `source` into `scope`.
// Positions without a source element bind undefined (or their default), a rest element always binds a fresh array.
// A pattern whose source is not iterable binds undefined for all of its names and records a warning instead of failing.
pub fn destructure(pattern: &ArrayDestructureAstNode, source: Value, scope: &mut Scope, decltype: VARIABLE_DECL_TYPE) -> Result<DestructureOutcome, RuntimeError> {
    let mut ctx = BindCtx {
        scope,
        decltype,
        outcome: DestructureOutcome::default(),
    };
    bind_pattern(pattern, source, &mut ctx)?;
    Ok(ctx.outcome)
}

fn bind_pattern(pattern: &ArrayDestructureAstNode, source: Value, ctx: &mut BindCtx) -> Result<(), RuntimeError> {
    let elements = match source.iter_elements() {
        Some(elements) => elements,
        None => {
            warn!(source = source.type_name(), "destructuring a value that is not iterable");
            ctx.outcome.warnings.push(RuntimeWarning::PATTERN_SOURCE_NOT_ITERABLE(pattern.start, pattern.end, source.type_name()));
            vec![]
        }
    };

    let mut index = 0;
    for element in &pattern.elements {
        if element.is_rest {
            let rest = elements.get(index..).map_or_else(Vec::new, |x| x.to_vec());
            bind_target(element, Value::Array(rest), ctx)?;
            break
        }
        if element.is_hole() {
            index += 1;
            continue
        }
        let mut value = elements.get(index).cloned().unwrap_or(Value::Undefined);
        index += 1;
        if value.is_undefined() {
            if let Some(default) = &element.default_value {
                value = evaluate(default, ctx.scope)?;
            }
        }
        bind_target(element, value, ctx)?;
    }
    Ok(())
}

fn bind_target(element: &DestructuringElement, value: Value, ctx: &mut BindCtx) -> Result<(), RuntimeError> {
    if let Some(children) = &element.children {
        return bind_pattern(children, value, ctx)
    }
    if let Some(name) = &element.name {
        bind_name(name, value, ctx)?;
    }
    Ok(())
}

fn bind_name(name: &IdentifierAstNode, value: Value, ctx: &mut BindCtx) -> Result<(), RuntimeError> {
    ctx.scope.declare(name, value.clone(), ctx.decltype)?;
    ctx.outcome.bindings.push(Binding {
        name: name.name.clone(),
        value
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::ast::PartialAstIr;
    use crate::parser::{parse_token_stream, ArrayDestructureAstNode, VARIABLE_DECL_TYPE};
    use crate::runtime::destructure::{destructure, Binding, DestructureOutcome};
    use crate::runtime::error::{RuntimeError, RuntimeWarning};
    use crate::runtime::eval::evaluate;
    use crate::runtime::scope::Scope;
    use crate::runtime::value::Value;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn str(s: &str) -> Value {
        Value::String(s.into())
    }

    // parses `let <pattern> = <source>` and runs only the destructuring step
    fn run_in(scope: &mut Scope, src: &str) -> Result<DestructureOutcome, RuntimeError> {
        let statements = parse_token_stream(tokenize(src.to_string()).unwrap()).unwrap();
        let decl = match &statements[0] {
            PartialAstIr::VAR_DECL(decl) => decl.clone(),
            other => panic!("unexpected node {:?}", other)
        };
        let pattern: ArrayDestructureAstNode = decl.name.right().unwrap();
        let source = evaluate(decl.initializer.as_deref().unwrap(), scope)?;
        destructure(&pattern, source, scope, VARIABLE_DECL_TYPE::LET)
    }

    fn run(src: &str) -> DestructureOutcome {
        run_in(&mut Scope::new(), src).unwrap()
    }

    fn pairs(outcome: &DestructureOutcome) -> Vec<(String, Value)> {
        outcome.bindings.iter().map(|Binding { name, value }| (name.clone(), value.clone())).collect()
    }

    #[test]
    fn should_extract_nested_positions() {
        let outcome = run("let [foo, [[bar], baz]] = [1, [[2], 3]]");
        assert_eq!(pairs(&outcome), vec![("foo".into(), num(1.0)), ("bar".into(), num(2.0)), ("baz".into(), num(3.0))]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_skip_holes() {
        let outcome = run("let [, , third] = [1, 2, 3]");
        assert_eq!(pairs(&outcome), vec![("third".into(), num(3.0))]);
    }

    #[test]
    fn should_collect_rest() {
        let outcome = run("let [head, ...tail] = [1, 2, 3, 4]");
        assert_eq!(pairs(&outcome), vec![
            ("head".into(), num(1.0)),
            ("tail".into(), Value::Array(vec![num(2.0), num(3.0), num(4.0)]))
        ]);
    }

    #[test]
    fn should_bind_undefined_and_empty_rest_when_under_supplied() {
        let outcome = run("let [x, y, ...z] = ['a']");
        assert_eq!(pairs(&outcome), vec![
            ("x".into(), str("a")),
            ("y".into(), Value::Undefined),
            ("z".into(), Value::Array(vec![]))
        ]);
    }

    #[test]
    fn should_bind_empty_rest_past_the_end() {
        let outcome = run("let [, , , ...rest] = [1]");
        assert_eq!(pairs(&outcome), vec![("rest".into(), Value::Array(vec![]))]);
    }

    #[test]
    fn should_copy_rest_instead_of_aliasing() {
        let mut scope = Scope::new();
        run_in(&mut scope, "let [...copy] = [1, 2]").unwrap();
        let outcome = run_in(&mut scope, "let [first, ...others] = copy").unwrap();
        assert_eq!(outcome.bindings[1].value, Value::Array(vec![num(2.0)]));
        assert_eq!(outcome.bindings[0].value, num(1.0));
    }

    #[test]
    fn should_destructure_nested_rest_pattern() {
        let outcome = run("let [a, ...[b, c]] = [1, 2]");
        assert_eq!(pairs(&outcome), vec![("a".into(), num(1.0)), ("b".into(), num(2.0)), ("c".into(), Value::Undefined)]);
    }

    #[test]
    fn should_apply_defaults_only_for_undefined() {
        let outcome = run("let [a = 1, b = 2, c = 3] = [null, undefined]");
        assert_eq!(pairs(&outcome), vec![("a".into(), Value::Null), ("b".into(), num(2.0)), ("c".into(), num(3.0))]);
    }

    #[test]
    fn should_see_earlier_bindings_in_defaults() {
        let outcome = run("let [a, b = a] = [7]");
        assert_eq!(outcome.bindings[1].value, num(7.0));
    }

    #[test]
    fn should_destructure_nested_default() {
        let outcome = run("let [[a, b] = ['x', 'y']] = []");
        assert_eq!(pairs(&outcome), vec![("a".into(), str("x")), ("b".into(), str("y"))]);
    }

    #[test]
    fn should_walk_strings() {
        let outcome = run("let [h, ...rest] = 'hey'");
        assert_eq!(pairs(&outcome), vec![("h".into(), str("h")), ("rest".into(), Value::Array(vec![str("e"), str("y")]))]);
    }

    #[test]
    fn should_bind_undefined_for_mismatched_shapes() {
        let outcome = run("let [a, [b, ...c]] = [1, 2]");
        assert_eq!(pairs(&outcome), vec![("a".into(), num(1.0)), ("b".into(), Value::Undefined), ("c".into(), Value::Array(vec![]))]);
        assert_eq!(outcome.warnings, vec![RuntimeWarning::PATTERN_SOURCE_NOT_ITERABLE(8, 17, "number")]);
    }

    #[test]
    fn should_warn_for_missing_nested_source() {
        let outcome = run("let [[a]] = []");
        assert_eq!(pairs(&outcome), vec![("a".into(), Value::Undefined)]);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn should_fail_on_redeclaration() {
        let mut scope = Scope::new();
        run_in(&mut scope, "let [a] = [1]").unwrap();
        assert!(matches!(run_in(&mut scope, "let [b, a] = [2, 3]"), Err(RuntimeError::ALREADY_DECLARED(_))));
    }

    #[test]
    fn should_be_repeatable() {
        let src = "let [x, [y], ...z] = [1, [2], 3, 4]";
        assert_eq!(pairs(&run(src)), pairs(&run(src)));
    }
}
