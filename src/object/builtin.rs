use std::rc::Rc;

use super::Object;

/// A free-standing built-in such as `print` or `println`. Takes the already-evaluated argument
/// list and returns a value directly; argument count/type validation happens inside `func`.
#[derive(Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: Rc<dyn Fn(&[Object]) -> Object>,
}

impl Builtin {
    pub fn new(name: &'static str, func: impl Fn(&[Object]) -> Object + 'static) -> Self {
        Self {
            name,
            func: Rc::new(func),
        }
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
