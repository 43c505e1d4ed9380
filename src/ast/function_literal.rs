use std::fmt::Display;

use crate::lexer::Token;

use super::{BlockStatement, Identifier, Node};

/// A function value literal. Never captures by name — the enclosing environment is captured at
/// evaluation time, not here; this node only records syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "fn ({params}){}", self.body)
    }
}
