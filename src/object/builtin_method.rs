use std::rc::Rc;

use super::Object;

/// A built-in method found via `.` access on a value's members table.
///
/// `it` starts unset inside the members table itself (the table is shared across every value of
/// a kind) and is filled in with a clone of the receiver when `MemberAccessExpression` resolves
/// to one of these — at that point it becomes a self-contained callable that a `CallExpression`
/// can invoke without any further receiver plumbing.
#[derive(Clone)]
pub struct BuiltinMethod {
    pub name: &'static str,
    pub func: Rc<dyn Fn(&[Object]) -> Object>,
    pub it: Option<Box<Object>>,
}

impl BuiltinMethod {
    pub fn new(name: &'static str, func: impl Fn(&[Object]) -> Object + 'static) -> Self {
        Self {
            name,
            func: Rc::new(func),
            it: None,
        }
    }

    pub fn bind(&self, receiver: Object) -> Self {
        Self {
            name: self.name,
            func: self.func.clone(),
            it: Some(Box::new(receiver)),
        }
    }
}

impl std::fmt::Debug for BuiltinMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinMethod({})", self.name)
    }
}

impl PartialEq for BuiltinMethod {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.it == other.it
    }
}
