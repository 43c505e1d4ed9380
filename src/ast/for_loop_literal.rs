use std::fmt::Display;

use crate::lexer::Token;

use super::{BlockStatement, Expression, Node};

/// `for <condition> { <body> }`. Always wrapped in an `ExpressionStatement` by the parser; there
/// is no dedicated `ForStatement` node.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoopLiteral {
    pub token: Token,
    pub condition: Box<Expression>,
    pub body: BlockStatement,
}

impl Node for ForLoopLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ForLoopLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "for {}{}", self.condition, self.body)
    }
}
