use std::fmt::Display;

use super::{
    ArrayAccessExpression, ArrayLiteral, AssignExpression, BooleanLiteral, CallExpression,
    ForLoopLiteral, FunctionLiteral, Identifier, IfExpression, InfixExpression, IntegerLiteral,
    MemberAccessExpression, Node, PrefixExpression, StringLiteral,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    ArrayLiteral(ArrayLiteral),
    FunctionLiteral(FunctionLiteral),
    ForLoopLiteral(ForLoopLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Call(CallExpression),
    Assign(AssignExpression),
    MemberAccess(MemberAccessExpression),
    ArrayAccess(ArrayAccessExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::IntegerLiteral(e) => e.token_literal(),
            Expression::BooleanLiteral(e) => e.token_literal(),
            Expression::StringLiteral(e) => e.token_literal(),
            Expression::ArrayLiteral(e) => e.token_literal(),
            Expression::FunctionLiteral(e) => e.token_literal(),
            Expression::ForLoopLiteral(e) => e.token_literal(),
            Expression::Prefix(e) => e.token_literal(),
            Expression::Infix(e) => e.token_literal(),
            Expression::If(e) => e.token_literal(),
            Expression::Call(e) => e.token_literal(),
            Expression::Assign(e) => e.token_literal(),
            Expression::MemberAccess(e) => e.token_literal(),
            Expression::ArrayAccess(e) => e.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{e}"),
            Expression::IntegerLiteral(e) => write!(f, "{e}"),
            Expression::BooleanLiteral(e) => write!(f, "{e}"),
            Expression::StringLiteral(e) => write!(f, "{e}"),
            Expression::ArrayLiteral(e) => write!(f, "{e}"),
            Expression::FunctionLiteral(e) => write!(f, "{e}"),
            Expression::ForLoopLiteral(e) => write!(f, "{e}"),
            Expression::Prefix(e) => write!(f, "{e}"),
            Expression::Infix(e) => write!(f, "{e}"),
            Expression::If(e) => write!(f, "{e}"),
            Expression::Call(e) => write!(f, "{e}"),
            Expression::Assign(e) => write!(f, "{e}"),
            Expression::MemberAccess(e) => write!(f, "{e}"),
            Expression::ArrayAccess(e) => write!(f, "{e}"),
        }
    }
}
