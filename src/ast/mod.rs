//! The tagged node algebra for Glyph's syntax tree.
//!
//! Every statement and expression variant lives in its own module, mirroring how the rest of
//! this crate is laid out. [`Node`] is the common behaviour (mainly the pretty-printer used by
//! the parser's property tests); [`Statement`] and [`Expression`] are the two closed sums that
//! tie the variants together.

mod array_access_expression;
mod array_literal;
mod assign_expression;
mod block_statement;
mod boolean_literal;
mod call_expression;
mod expression;
mod expression_statement;
mod for_loop_literal;
mod function_literal;
mod identifier;
mod if_expression;
mod infix_expression;
mod integer_literal;
mod let_statement;
mod member_access_expression;
mod node;
mod prefix_expression;
mod program;
mod return_statement;
mod statement;
mod string_literal;

pub use array_access_expression::ArrayAccessExpression;
pub use array_literal::ArrayLiteral;
pub use assign_expression::AssignExpression;
pub use block_statement::BlockStatement;
pub use boolean_literal::BooleanLiteral;
pub use call_expression::CallExpression;
pub use expression::Expression;
pub use expression_statement::ExpressionStatement;
pub use for_loop_literal::ForLoopLiteral;
pub use function_literal::FunctionLiteral;
pub use identifier::Identifier;
pub use if_expression::IfExpression;
pub use infix_expression::InfixExpression;
pub use integer_literal::IntegerLiteral;
pub use let_statement::LetStatement;
pub use member_access_expression::MemberAccessExpression;
pub use node::Node;
pub use prefix_expression::PrefixExpression;
pub use program::Program;
pub use return_statement::ReturnStatement;
pub use statement::Statement;
pub use string_literal::StringLiteral;
