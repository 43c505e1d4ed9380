//! Typing and dispatch rules for `InfixExpression` evaluation.
//!
//! The rules are applied in the order given in the crate's top-level docs: integer/integer and
//! string/string go to their own arithmetic; the two mixed string/integer pairs are coerced by
//! stringifying the integer side; everything else either falls back to a structural `==`/`!=`
//! comparison or becomes a `type mismatch`/`unknown operator` error.

use super::builtins::{integer_members, string_members};
use crate::object::{Boolean, Integer, Object, StringObject};

pub(super) fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, l.value, r.value),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, &l.value, &r.value),
        (Object::String(l), Object::Integer(r)) => {
            eval_string_infix(operator, &l.value, &r.value.to_string())
        }
        (Object::Integer(l), Object::String(r)) => {
            eval_string_infix(operator, &l.value.to_string(), &r.value)
        }
        _ if operator == "==" => Object::Boolean(Boolean::new(left == right)),
        _ if operator == "!=" => Object::Boolean(Boolean::new(left != right)),
        _ if left.type_name() != right.type_name() => Object::error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Object::error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(Integer::new(left + right).with_members(integer_members())),
        "-" => Object::Integer(Integer::new(left - right).with_members(integer_members())),
        "*" => Object::Integer(Integer::new(left * right).with_members(integer_members())),
        "/" => {
            if right == 0 {
                Object::error("ERROR: division by zero")
            } else {
                Object::Integer(Integer::new(left / right).with_members(integer_members()))
            }
        }
        "<" => Object::Boolean(Boolean::new(left < right)),
        ">" => Object::Boolean(Boolean::new(left > right)),
        "==" => Object::Boolean(Boolean::new(left == right)),
        "!=" => Object::Boolean(Boolean::new(left != right)),
        other => Object::error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::String(StringObject::new(format!("{left}{right}")).with_members(string_members())),
        "<" => Object::Boolean(Boolean::new(left < right)),
        ">" => Object::Boolean(Boolean::new(left > right)),
        "==" => Object::Boolean(Boolean::new(left == right)),
        "!=" => Object::Boolean(Boolean::new(left != right)),
        other => Object::error(format!("unknown operator: STRING {other} STRING")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_by_zero_is_an_error() {
        let result = eval_infix_expression("/", Object::Integer(1.into()), Object::Integer(0.into()));
        assert!(result.is_error());
        assert_eq!(result.inspect(), "ERROR: ERROR: division by zero");
    }

    #[test]
    fn mixed_string_integer_coerces_the_integer_side() {
        let result = eval_infix_expression(
            "+",
            Object::String(StringObject::new("n=")),
            Object::Integer(5.into()),
        );
        assert_eq!(result.inspect(), "n=5");
    }

    #[test]
    fn mismatched_types_report_type_mismatch() {
        let result = eval_infix_expression(
            "+",
            Object::Integer(5.into()),
            Object::Boolean(true.into()),
        );
        assert_eq!(result.inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
    }

    #[test]
    fn same_type_unsupported_operator_is_unknown_operator() {
        let result = eval_infix_expression(
            "+",
            Object::Boolean(true.into()),
            Object::Boolean(false.into()),
        );
        assert_eq!(result.inspect(), "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    }
}
