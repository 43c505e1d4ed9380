use std::fmt::Display;

/// Common behaviour shared by every statement and expression node.
///
/// `token_literal` exists mainly for diagnostics; `to_string` is the pretty-printer used by the
/// parser's property tests (see the crate's module docs for the exact formatting contract).
pub trait Node: Display {
    fn token_literal(&self) -> &str;
}
