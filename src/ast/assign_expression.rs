use std::fmt::Display;

use crate::lexer::Token;

use super::{Expression, Node};

/// `assignee = value`. The parser accepts any expression as `assignee`; the evaluator is the
/// place that rejects anything other than an `Identifier` or an `ArrayAccessExpression`, since
/// that restriction is a runtime concern for this language, not a syntactic one.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpression {
    pub token: Token,
    pub assignee: Box<Expression>,
    pub value: Box<Expression>,
}

impl Node for AssignExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for AssignExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.assignee, self.value)
    }
}
