//! Free-standing built-ins (`print`, `println`, `printf`) and the members tables attached to
//! `Integer`, `String` and `Array` values at construction time.
//!
//! Built-in methods receive the receiver prepended to their argument list (`it` followed by the
//! call's own arguments) — see [`super::apply_callable`], which is where that prepending happens
//! for a bound [`BuiltinMethod`]. `forEach`/`map` call back into the evaluator through
//! `apply_callable` so that a Glyph function, not just a Rust closure, can be passed as the
//! callback.

use std::collections::HashMap;
use std::io::Write;

use crate::object::{Array, Builtin, BuiltinMethod, Integer, Members, Object, StringObject};

use super::apply_callable;

/// Looks up a free-standing built-in by name. These take precedence over user bindings of the
/// same name (see `eval_identifier`).
pub(super) fn lookup_free(name: &str) -> Option<Object> {
    match name {
        "print" => Some(Object::Builtin(Builtin::new("print", builtin_print))),
        "println" => Some(Object::Builtin(Builtin::new("println", builtin_println))),
        "printf" => Some(Object::Builtin(Builtin::new("printf", builtin_printf))),
        _ => None,
    }
}

fn builtin_print(args: &[Object]) -> Object {
    let rendered = args.iter().map(Object::inspect).collect::<Vec<_>>().join("");
    print!("{rendered}");
    let _ = std::io::stdout().flush();
    Object::Null
}

fn builtin_println(args: &[Object]) -> Object {
    let rendered = args.iter().map(Object::inspect).collect::<Vec<_>>().join("");
    println!("{rendered}");
    Object::Null
}

/// `printf(fmt, args...)`. `{}` placeholders in `fmt` are substituted positionally with the
/// `Inspect()` of each remaining argument, falling through to a literal `{}` once arguments run
/// out rather than panicking.
fn builtin_printf(args: &[Object]) -> Object {
    let Some((format, rest)) = args.split_first() else {
        return Object::error("wrong number of arguments to printf: want=1, got=0");
    };
    let Object::String(format) = format else {
        return Object::error(format!(
            "argument to printf must be STRING, got {}",
            format.type_name()
        ));
    };

    let mut rendered = String::new();
    let mut rest = rest.iter();
    let mut chars = format.value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '{' && chars.peek() == Some(&'}') {
            chars.next();
            match rest.next() {
                Some(arg) => rendered.push_str(&arg.inspect()),
                None => rendered.push_str("{}"),
            }
        } else {
            rendered.push(ch);
        }
    }

    print!("{rendered}");
    let _ = std::io::stdout().flush();
    Object::Null
}

pub(super) fn integer_members() -> Members {
    let mut table = HashMap::new();
    table.insert(
        "add".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("add", integer_add)),
    );
    Members::new(table)
}

fn integer_add(args: &[Object]) -> Object {
    match args {
        [Object::Integer(receiver), Object::Integer(other)] => {
            Object::Integer(Integer::new(receiver.value + other.value).with_members(integer_members()))
        }
        [Object::Integer(_), other] => {
            Object::error(format!("argument to add must be INTEGER, got {}", other.type_name()))
        }
        _ => Object::error(format!(
            "wrong number of arguments to add: want=1, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

pub(super) fn string_members() -> Members {
    let mut table = HashMap::new();
    table.insert(
        "length".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("length", string_length)),
    );
    table.insert(
        "replace".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("replace", string_replace)),
    );
    Members::new(table)
}

fn string_length(args: &[Object]) -> Object {
    match args {
        [Object::String(receiver)] => {
            Object::Integer(Integer::new(receiver.value.len() as i64).with_members(integer_members()))
        }
        _ => Object::error(format!(
            "wrong number of arguments to length: want=0, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

/// Returns a fresh string equal to the receiver with every occurrence of `pattern` swapped for
/// `replacement`; the receiver itself is left untouched.
fn string_replace(args: &[Object]) -> Object {
    match args {
        [Object::String(receiver), Object::String(pattern), Object::String(replacement)] => {
            Object::String(
                StringObject::new(receiver.value.replace(&pattern.value, &replacement.value))
                    .with_members(string_members()),
            )
        }
        [Object::String(_), Object::String(_), other] | [Object::String(_), other, _] => {
            Object::error(format!("argument to replace must be STRING, got {}", other.type_name()))
        }
        _ => Object::error(format!(
            "wrong number of arguments to replace: want=2, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

pub(super) fn array_members() -> Members {
    let mut table = HashMap::new();
    table.insert(
        "length".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("length", array_length)),
    );
    table.insert(
        "forEach".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("forEach", array_for_each)),
    );
    table.insert(
        "map".to_string(),
        Object::BuiltinMethod(BuiltinMethod::new("map", array_map)),
    );
    Members::new(table)
}

fn array_length(args: &[Object]) -> Object {
    match args {
        [Object::Array(receiver)] => {
            Object::Integer(Integer::new(receiver.len() as i64).with_members(integer_members()))
        }
        _ => Object::error(format!(
            "wrong number of arguments to length: want=0, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

fn array_for_each(args: &[Object]) -> Object {
    match args {
        [Object::Array(receiver), callback] => {
            let elements = receiver.values.borrow().clone();
            for (index, value) in elements.into_iter().enumerate() {
                let result = apply_callable(
                    callback.clone(),
                    vec![Object::Integer(Integer::new(index as i64).with_members(integer_members())), value],
                );
                if result.is_error() {
                    return result;
                }
            }
            Object::Null
        }
        _ => Object::error(format!(
            "wrong number of arguments to forEach: want=1, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

fn array_map(args: &[Object]) -> Object {
    match args {
        [Object::Array(receiver), callback] => {
            let elements = receiver.values.borrow().clone();
            let mut mapped = Vec::with_capacity(elements.len());
            for (index, value) in elements.into_iter().enumerate() {
                let result = apply_callable(
                    callback.clone(),
                    vec![Object::Integer(Integer::new(index as i64).with_members(integer_members())), value],
                );
                if result.is_error() {
                    return result;
                }
                mapped.push(result);
            }
            Object::Array(Array::new(mapped).with_members(array_members()))
        }
        _ => Object::error(format!(
            "wrong number of arguments to map: want=1, got={}",
            args.len().saturating_sub(1)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_add_returns_a_fresh_integer() {
        let receiver = Object::Integer(Integer::new(2).with_members(integer_members()));
        let result = integer_add(&[receiver.clone(), Object::Integer(3.into())]);
        assert_eq!(result.inspect(), "5");
        assert_eq!(receiver.inspect(), "2");
    }

    #[test]
    fn string_replace_does_not_mutate_the_receiver() {
        let receiver = Object::String(StringObject::new("ababab").with_members(string_members()));
        let result = string_replace(&[
            receiver.clone(),
            Object::String(StringObject::new("a")),
            Object::String(StringObject::new("x")),
        ]);
        assert_eq!(result.inspect(), "xbxbxb");
        assert_eq!(receiver.inspect(), "ababab");
    }

    #[test]
    fn string_length_counts_bytes() {
        let receiver = Object::String(StringObject::new("hello"));
        assert_eq!(string_length(&[receiver]).inspect(), "5");
    }
}
