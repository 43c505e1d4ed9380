use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

#[derive(Debug)]
struct FunctionData {
    parameters: Vec<Identifier>,
    body: BlockStatement,
    closure_env: Environment,
}

/// A user-defined function value. Carries a reference to the environment active when the
/// `FunctionLiteral` was evaluated — that is the closure.
///
/// Wrapped in an `Rc` so cloning a `Function` (which happens every time one is looked up, passed
/// as an argument, or stored in an array) is cheap, and so that `==`/`!=` on functions reduces to
/// reference identity rather than a deep structural walk of the body.
#[derive(Debug, Clone)]
pub struct Function(Rc<FunctionData>);

impl Function {
    pub fn new(parameters: Vec<Identifier>, body: BlockStatement, closure_env: Environment) -> Self {
        Self(Rc::new(FunctionData {
            parameters,
            body,
            closure_env,
        }))
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.0.parameters
    }

    pub fn body(&self) -> &BlockStatement {
        &self.0.body
    }

    pub fn closure_env(&self) -> &Environment {
        &self.0.closure_env
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
