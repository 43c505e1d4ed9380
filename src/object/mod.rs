//! The runtime value algebra the evaluator produces and consumes.
//!
//! Every variant that supports `.` access (`Integer`, `StringObject`, `Array`) carries an
//! immutable [`Members`] table populated by the evaluator at construction time; see
//! `evaluator::builtins` for what actually goes in those tables. `ReturnValue` and `ErrorValue`
//! are the two short-circuit sentinels described in the crate's top-level docs.

mod array;
mod boolean;
mod builtin;
mod builtin_method;
mod error;
mod function;
mod integer;
mod members;
mod return_value;
mod string_object;

pub use array::Array;
pub use boolean::Boolean;
pub use builtin::Builtin;
pub use builtin_method::BuiltinMethod;
pub use error::ErrorValue;
pub use function::Function;
pub use integer::Integer;
pub use members::Members;
pub use return_value::ReturnValue;
pub use string_object::StringObject;

/// A runtime value. This is the `Value`/`Object` of the interpreter: everything an expression
/// evaluates to, including the two short-circuit sentinels that never escape to user code
/// (`ReturnValue`) or always short-circuit (`ErrorValue`).
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(Integer),
    Boolean(Boolean),
    String(StringObject),
    Null,
    Array(Array),
    Function(Function),
    Builtin(Builtin),
    BuiltinMethod(BuiltinMethod),
    ReturnValue(ReturnValue),
    Error(ErrorValue),
}

impl Object {
    pub fn error(message: impl Into<String>) -> Self {
        Object::Error(ErrorValue::new(message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// The type name used in error messages (`"type mismatch: INTEGER + BOOLEAN"` and friends).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::BuiltinMethod(_) => "METHOD",
            Object::ReturnValue(_) => "RETURN",
            Object::Error(_) => "ERROR",
        }
    }

    /// The language-defined mapping from any value to a boolean for use as a condition.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Boolean(b) => b.value,
            Object::Integer(i) => i.value != 0,
            Object::Null => false,
            _ => true,
        }
    }

    /// Looks up `name` in this value's members table. Values without a members table (`Null`,
    /// `Boolean`, `Function`, `Builtin`, `BuiltinMethod`, `Error`, `ReturnValue`) never have a
    /// member.
    pub fn get_member(&self, name: &str) -> Option<Object> {
        match self {
            Object::Integer(i) => i.members.get(name).cloned(),
            Object::String(s) => s.members.get(name).cloned(),
            Object::Array(a) => a.members.get(name).cloned(),
            _ => None,
        }
    }

    /// The human-facing rendering used by `print`, `println` and the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(i) => i.value.to_string(),
            Object::Boolean(b) => b.value.to_string(),
            Object::String(s) => s.value.clone(),
            Object::Null => "null".to_string(),
            Object::Array(a) => {
                let values = a
                    .values
                    .borrow()
                    .iter()
                    .map(|v| v.inspect())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{values}]")
            }
            Object::Function(f) => {
                let params = f
                    .parameters()
                    .iter()
                    .map(|p| p.value.clone())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("fn({params}){}", f.body())
            }
            Object::Builtin(_) => "builtin function".to_string(),
            Object::BuiltinMethod(_) => "method".to_string(),
            Object::ReturnValue(r) => r.value.inspect(),
            Object::Error(e) => format!("ERROR: {}", e.message),
        }
    }
}
