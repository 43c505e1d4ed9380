use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// The per-value `{ name -> Value }` mapping used for `.` access on built-in types.
///
/// Populated once at value construction and never mutated afterwards — there is no user-level
/// way to add a method to a built-in type, so a plain `Rc<HashMap<_, _>>` is enough to share one
/// table across every value of a given kind without re-cloning it on each construction.
#[derive(Debug, Clone, Default)]
pub struct Members(Rc<HashMap<String, Object>>);

impl Members {
    pub fn new(members: HashMap<String, Object>) -> Self {
        Self(Rc::new(members))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Object> {
        self.0.get(name)
    }
}

impl PartialEq for Members {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
