//! Prefix and infix expression heads for the Pratt parser in [`super::Parser`].

use crate::ast::{
    ArrayAccessExpression, ArrayLiteral, AssignExpression, BooleanLiteral, CallExpression,
    Expression, FunctionLiteral, Identifier, IfExpression, InfixExpression, IntegerLiteral,
    MemberAccessExpression, PrefixExpression, StringLiteral,
};
use crate::lexer::TokenKind;

use super::precedence::Precedence;
use super::Parser;

impl Parser {
    pub(super) fn has_infix(&self, kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::Dot
                | TokenKind::Assign
        )
    }

    pub(super) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current_token.kind {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            other => {
                self.errors
                    .push(format!("no prefix parse function for {other} found"));
                None
            }
        }
    }

    pub(super) fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current_token.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan => self.parse_infix_expression(left),
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_array_access_expression(left),
            TokenKind::Dot => self.parse_member_access_expression(left),
            TokenKind::Assign => self.parse_assign_expression(left),
            _ => Some(left),
        }
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(Identifier {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors
                    .push(format!("could not parse {:?} as integer", token.literal));
                None
            }
        }
    }

    fn parse_boolean_literal(&self) -> Expression {
        Expression::BooleanLiteral(BooleanLiteral {
            token: self.current_token.clone(),
            value: self.current_token_is(TokenKind::True),
        })
    }

    fn parse_string_literal(&self) -> Expression {
        Expression::StringLiteral(StringLiteral {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        })
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right,
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current_token.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix(InfixExpression {
            token,
            operator,
            left: Box::new(left),
            right,
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();

        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition,
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(Identifier {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        });

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(Identifier {
                token: self.current_token.clone(),
                value: self.current_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        let values = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expression::ArrayLiteral(ArrayLiteral { token, values }))
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Shared by call arguments and array literal elements: `tok expr, expr, ... end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_member_access_expression(&mut self, expression: Expression) -> Option<Expression> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let member = Identifier {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        };

        Some(Expression::MemberAccess(MemberAccessExpression {
            token,
            expression: Box::new(expression),
            member,
        }))
    }

    fn parse_array_access_expression(&mut self, expression: Expression) -> Option<Expression> {
        let token = self.current_token.clone();

        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::ArrayAccess(ArrayAccessExpression {
            token,
            expression: Box::new(expression),
            index,
        }))
    }

    fn parse_assign_expression(&mut self, assignee: Expression) -> Option<Expression> {
        let token = self.current_token.clone();

        self.next_token();
        let value = Box::new(self.parse_expression(Precedence::Lowest)?);

        Some(Expression::Assign(AssignExpression {
            token,
            assignee: Box::new(assignee),
            value,
        }))
    }
}
