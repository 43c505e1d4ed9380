//! Tree-walking evaluator: turns a parsed [`Program`] into an [`Object`] against a lexically
//! scoped [`Environment`].
//!
//! The two short-circuit sentinels are unwrapped at different points on purpose (see the crate's
//! top-level docs): [`eval`] unwraps a top-level `ReturnValue`, [`eval_block_statement`] does
//! not — it lets `return` inside a nested `if`/`for` body propagate out to the nearest enclosing
//! function call, which is where [`apply_callable`] performs the other unwrap.

mod builtins;
mod infix;

use crate::ast::{
    BlockStatement, Expression, ForLoopLiteral, Identifier, IfExpression, Program, Statement,
};
use crate::environment::{Environment, Reassign};
use crate::object::{Array, Boolean, Function, Integer, Object, ReturnValue, StringObject};

use infix::eval_infix_expression;

/// Evaluates a whole program: `return` at the top level simply ends evaluation early with its
/// value, rather than escaping as a visible `ReturnValue`.
pub fn eval(program: &Program, env: &Environment) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(ref r) => return (*r.value).clone(),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Object {
    match statement {
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(stmt.name.value.clone(), value, stmt.mutable);
            Object::Null
        }
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(ReturnValue::new(value))
        }
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

/// Folds a block's statements, short-circuiting on the first `ReturnValue` or `Error` — but,
/// unlike [`eval`], leaving a `ReturnValue` wrapped so it keeps propagating.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_expression(expression: &Expression, env: &Environment) -> Object {
    match expression {
        Expression::Identifier(id) => eval_identifier(id, env),
        Expression::IntegerLiteral(lit) => {
            Object::Integer(Integer::new(lit.value).with_members(builtins::integer_members()))
        }
        Expression::BooleanLiteral(lit) => Object::Boolean(Boolean::new(lit.value)),
        Expression::StringLiteral(lit) => {
            Object::String(StringObject::new(lit.value.clone()).with_members(builtins::string_members()))
        }
        Expression::ArrayLiteral(lit) => eval_array_literal(&lit.values, env),
        Expression::FunctionLiteral(lit) => Object::Function(Function::new(
            lit.parameters.clone(),
            lit.body.clone(),
            env.clone(),
        )),
        Expression::ForLoopLiteral(lit) => eval_for_loop(lit, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Call(expr) => {
            let function = eval_expression(&expr.function, env);
            if function.is_error() {
                return function;
            }

            let mut args = Vec::with_capacity(expr.arguments.len());
            for argument in &expr.arguments {
                let value = eval_expression(argument, env);
                if value.is_error() {
                    return value;
                }
                args.push(value);
            }

            apply_callable(function, args)
        }
        Expression::Assign(expr) => eval_assign_expression(&expr.assignee, &expr.value, env),
        Expression::MemberAccess(expr) => {
            let receiver = eval_expression(&expr.expression, env);
            if receiver.is_error() {
                return receiver;
            }
            match receiver.get_member(&expr.member.value) {
                Some(Object::BuiltinMethod(method)) => {
                    Object::BuiltinMethod(method.bind(receiver))
                }
                Some(other) => other,
                None => Object::error(format!(
                    "ERROR: no member named {} on {}",
                    expr.member.value,
                    receiver.type_name()
                )),
            }
        }
        Expression::ArrayAccess(expr) => {
            let base = eval_expression(&expr.expression, env);
            if base.is_error() {
                return base;
            }
            let Object::Array(array) = &base else {
                return Object::error(format!("index operator not supported: {}", base.type_name()));
            };

            let index = eval_expression(&expr.index, env);
            if index.is_error() {
                return index;
            }
            let Object::Integer(index) = &index else {
                return Object::error(format!(
                    "type mismatch: cannot index {} with {}",
                    base.type_name(),
                    index.type_name()
                ));
            };

            if index.value < 0 || index.value as usize >= array.len() {
                return Object::error(format!("ERROR: index {} out of range", index.value));
            }
            array.get(index.value as usize).unwrap_or(Object::Null)
        }
    }
}

fn eval_identifier(identifier: &Identifier, env: &Environment) -> Object {
    if let Some(builtin) = builtins::lookup_free(&identifier.value) {
        return builtin;
    }

    match env.get(&identifier.value) {
        Some(value) => value,
        None => Object::error(format!("identifier not found: {}", identifier.value)),
    }
}

fn eval_array_literal(values: &[Expression], env: &Environment) -> Object {
    let mut evaluated = Vec::with_capacity(values.len());
    for value in values {
        let result = eval_expression(value, env);
        if result.is_error() {
            return result;
        }
        evaluated.push(result);
    }
    Object::Array(Array::new(evaluated).with_members(builtins::array_members()))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(Boolean::new(!right.is_truthy())),
        "-" => match right {
            Object::Integer(int) => {
                Object::Integer(Integer::new(-int.value).with_members(builtins::integer_members()))
            }
            other => Object::error(format!("unknown operator: -{}", other.type_name())),
        },
        other => Object::error(format!("unknown operator: {other}")),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Environment) -> Object {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, &Environment::enclosed(env))
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, &Environment::enclosed(env))
    } else {
        Object::Null
    }
}

/// One enclosed environment is created for the whole loop (not one per iteration), so bindings
/// made by one iteration's body are visible to the next — matching how a `for` loop's scope
/// behaves in the source language.
fn eval_for_loop(expr: &ForLoopLiteral, env: &Environment) -> Object {
    let loop_env = Environment::enclosed(env);

    loop {
        let condition = eval_expression(&expr.condition, env);
        if condition.is_error() {
            return condition;
        }
        if !condition.is_truthy() {
            return Object::Null;
        }

        let result = eval_block_statement(&expr.body, &loop_env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
}

fn eval_assign_expression(assignee: &Expression, value: &Expression, env: &Environment) -> Object {
    match assignee {
        Expression::Identifier(id) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            match env.reassign(&id.value, value.clone()) {
                Reassign::Ok => value,
                Reassign::NotFound => Object::error(format!("identifier not found: {}", id.value)),
                Reassign::Immutable => {
                    Object::error(format!("ERROR: Can't reassign immutable object: {}", id.value))
                }
            }
        }
        Expression::ArrayAccess(access) => {
            let array = eval_expression(&access.expression, env);
            if array.is_error() {
                return array;
            }
            let index = eval_expression(&access.index, env);
            if index.is_error() {
                return index;
            }
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }

            let (Object::Array(array), Object::Integer(index)) = (&array, &index) else {
                return Object::error(format!(
                    "type mismatch: cannot index {} with {}",
                    array.type_name(),
                    index.type_name()
                ));
            };
            if index.value < 0 || index.value as usize >= array.len() {
                return Object::error(format!("ERROR: index {} out of range", index.value));
            }

            array.set(index.value as usize, value.clone());
            value
        }
        other => Object::error(format!("cannot assign to {other}")),
    }
}

/// Invokes a callable `Object` — a user `Function`, a free `Builtin`, or a receiver-bound
/// `BuiltinMethod` — with already-evaluated arguments. Shared by `CallExpression` and by the
/// array built-ins (`forEach`, `map`) that need to call a user-supplied callback.
fn apply_callable(callable: Object, args: Vec<Object>) -> Object {
    match callable {
        Object::Function(function) => {
            let call_env = Environment::enclosed(function.closure_env());
            for (parameter, argument) in function.parameters().iter().zip(args) {
                call_env.set(parameter.value.clone(), argument, true);
            }

            match eval_block_statement(function.body(), &call_env) {
                Object::ReturnValue(r) => *r.value,
                other => other,
            }
        }
        Object::Builtin(builtin) => (builtin.func)(&args),
        Object::BuiltinMethod(method) => {
            let mut full_args = Vec::with_capacity(args.len() + 1);
            if let Some(it) = &method.it {
                full_args.push((**it).clone());
            }
            full_args.extend(args);
            (method.func)(&full_args)
        }
        other => Object::error(format!("not a function: {}", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval_str(input: &str) -> Object {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parse errors: {:?}", parser.errors());
        eval(&program, &Environment::new())
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(
            eval_str("(5 + 10 * 2 + 15 / 3) * 2 + -10").inspect(),
            "50"
        );
    }

    #[test]
    fn identity_function_call() {
        assert_eq!(eval_str("let identity = fn(x) { x }; identity(5)").inspect(), "5");
    }

    #[test]
    fn nested_return_short_circuits_at_function_boundary() {
        assert_eq!(
            eval_str("let add = fn(x, y) { return x + y }; add(5, add(5, 5))").inspect(),
            "15"
        );
    }

    #[test]
    fn return_propagates_through_nested_if_blocks() {
        assert_eq!(
            eval_str("if 10 > 1 { if 10 > 1 { return 10 } return 1 }").inspect(),
            "10"
        );
    }

    #[test]
    fn type_mismatch_is_reported() {
        assert_eq!(eval_str("5 + true").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
    }

    #[test]
    fn unknown_identifier_is_reported() {
        assert_eq!(eval_str("foobar").inspect(), "ERROR: identifier not found: foobar");
    }

    #[test]
    fn let_binding_is_visible_afterwards() {
        assert_eq!(eval_str("let x = 5; x").inspect(), "5");
    }

    #[test]
    fn array_index_assignment_mutates_in_place() {
        assert_eq!(eval_str("let mut a = [1,2,3]; a[0] = 9; a").inspect(), "[9, 2, 3]");
    }

    #[test]
    fn string_length_method() {
        assert_eq!(eval_str(r#""hello".length()"#).inspect(), "5");
    }

    #[test]
    fn closure_captures_mutable_state_across_calls() {
        assert_eq!(
            eval_str(
                "let c = fn() { let mut n = 0; fn() { n = n + 1; n } }; let k = c(); k(); k(); k()"
            )
            .inspect(),
            "3"
        );
    }

    #[test]
    fn reassigning_an_immutable_binding_is_an_error() {
        assert_eq!(
            eval_str("let x = 5; x = 6").inspect(),
            "ERROR: ERROR: Can't reassign immutable object: x"
        );
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        assert_eq!(eval_str("let a = [1, 2, 3]; a[3]").inspect(), "ERROR: ERROR: index 3 out of range");
    }

    #[test]
    fn one_past_end_index_is_rejected_not_allowed() {
        // Index 3 on a 3-element array is out of range, not a silent read one past the end.
        assert_eq!(eval_str("[1, 2, 3][3]").inspect(), "ERROR: ERROR: index 3 out of range");
    }

    #[test]
    fn for_loop_runs_body_while_condition_holds() {
        assert_eq!(
            eval_str("let mut i = 0; for i < 3 { i = i + 1 }; i").inspect(),
            "3"
        );
    }

    #[test]
    fn array_map_applies_callback_to_every_element() {
        assert_eq!(
            eval_str("[1, 2, 3].map(fn(i, v) { v.add(10) })").inspect(),
            "[11, 12, 13]"
        );
    }

    #[test]
    fn array_for_each_visits_every_element_in_order() {
        assert_eq!(
            eval_str(
                "let mut total = 0; [1, 2, 3].forEach(fn(i, v) { total = total + v }); total"
            )
            .inspect(),
            "6"
        );
    }

    #[test]
    fn string_replace_returns_a_fresh_string() {
        assert_eq!(
            eval_str(r#"let s = "ababab"; let t = s.replace("a", "x"); s + " " + t"#).inspect(),
            "ababab xbxbxb"
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval_str("1 / 0").inspect(), "ERROR: ERROR: division by zero");
    }

    #[test]
    fn calling_a_non_function_is_an_error() {
        assert_eq!(eval_str("let x = 5; x()").inspect(), "ERROR: not a function: INTEGER");
    }

    #[test]
    fn return_value_never_escapes_to_user_code() {
        assert!(!matches!(eval_str("return 5"), Object::ReturnValue(_)));
    }

    #[test]
    fn arrays_compare_by_element_value_not_by_identity() {
        assert_eq!(eval_str("[1, 2, 3] == [1, 2, 3]").inspect(), "true");
        assert_eq!(eval_str(r#"["a", "b"] == ["a", "b"]"#).inspect(), "true");
        assert_eq!(eval_str("[1, 2, 3] == [1, 2, 4]").inspect(), "false");
    }

    #[test]
    fn function_inspect_does_not_double_up_the_body_braces() {
        assert_eq!(eval_str("fn(x) { x }").inspect(), "fn(x) {\nx\n}");
    }
}
