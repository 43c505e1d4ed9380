//! Lexically-scoped variable bindings.
//!
//! An [`Environment`] is a chain of scopes: a `let` binds a name in the innermost scope, a lookup
//! walks outward until it finds a binding or runs out of scopes. Function calls and `for`/`if`
//! bodies each get a fresh enclosed scope so that bindings introduced inside them don't leak back
//! out.
//!
//! Closures hold a reference to the environment active when their `FunctionLiteral` was
//! evaluated, and that environment can in turn hold a closure that refers back to it (a function
//! defined inside a function that closes over its own defining scope). That makes the binding
//! graph cyclic. We accept the resulting `Rc` cycle as a bounded, process-lifetime leak rather
//! than introducing a `Weak`-based registry — see the design notes for why.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Clone)]
struct Binding {
    value: Object,
    mutable: bool,
}

#[derive(Debug, Default)]
struct EnvironmentData {
    bindings: HashMap<String, Binding>,
    outer: Option<Environment>,
}

/// Shared handle to a scope. Cloning an `Environment` clones the handle, not the scope.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

/// The result of attempting to rebind an existing name via assignment.
pub enum Reassign {
    Ok,
    NotFound,
    Immutable,
}

impl Environment {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData::default())))
    }

    /// A fresh scope whose lookups fall through to `outer` once they miss locally.
    pub fn enclosed(outer: &Environment) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            bindings: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Walks the scope chain outward, innermost first.
    pub fn get(&self, name: &str) -> Option<Object> {
        let data = self.0.borrow();
        if let Some(binding) = data.bindings.get(name) {
            return Some(binding.value.clone());
        }
        data.outer.as_ref()?.get(name)
    }

    /// Binds `name` in this scope, shadowing any binding of the same name in an outer scope.
    pub fn set(&self, name: impl Into<String>, value: Object, mutable: bool) {
        self.0
            .borrow_mut()
            .bindings
            .insert(name.into(), Binding { value, mutable });
    }

    /// Rebinds an existing name, walking outward until it is found. Fails if the name was never
    /// bound, or if the scope that owns it marked the binding immutable.
    pub fn reassign(&self, name: &str, value: Object) -> Reassign {
        {
            let mut data = self.0.borrow_mut();
            if let Some(binding) = data.bindings.get_mut(name) {
                if !binding.mutable {
                    return Reassign::Immutable;
                }
                binding.value = value;
                return Reassign::Ok;
            }
        }
        let outer = self.0.borrow().outer.clone();
        match outer {
            Some(outer) => outer.reassign(name, value),
            None => Reassign::NotFound,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    #[test]
    fn lookup_falls_through_to_outer_scope() {
        let outer = Environment::new();
        outer.set("x", Object::Integer(5.into()), false);

        let inner = Environment::enclosed(&outer);
        assert_eq!(inner.get("x").unwrap().inspect(), "5");
    }

    #[test]
    fn inner_binding_shadows_outer() {
        let outer = Environment::new();
        outer.set("x", Object::Integer(5.into()), false);

        let inner = Environment::enclosed(&outer);
        inner.set("x", Object::Integer(9.into()), false);

        assert_eq!(inner.get("x").unwrap().inspect(), "9");
        assert_eq!(outer.get("x").unwrap().inspect(), "5");
    }

    #[test]
    fn reassign_rejects_immutable_bindings() {
        let env = Environment::new();
        env.set("x", Object::Integer(5.into()), false);

        assert!(matches!(
            env.reassign("x", Object::Integer(6.into())),
            Reassign::Immutable
        ));
    }

    #[test]
    fn reassign_reports_missing_name() {
        let env = Environment::new();
        assert!(matches!(
            env.reassign("missing", Object::Integer(1.into())),
            Reassign::NotFound
        ));
    }

    #[test]
    fn reassign_updates_through_outer_scope() {
        let outer = Environment::new();
        outer.set("x", Object::Integer(5.into()), true);

        let inner = Environment::enclosed(&outer);
        assert!(matches!(
            inner.reassign("x", Object::Integer(7.into())),
            Reassign::Ok
        ));
        assert_eq!(outer.get("x").unwrap().inspect(), "7");
    }
}
