//! A parsing library that turns textual executable GraphQL documents
//! (queries, mutations, and subscriptions) into a typed AST.
//!
//! The pipeline is two stages: a character-level [`Lexer`] produces an
//! ordered token sequence, and a one-token-lookahead recursive descent
//! parser reconstructs the grammar productions from a [`TokenCursor`] over
//! that sequence. The resulting [`ast::Document`] is pure data, built
//! bottom-up and owned by the caller; tokens and AST nodes borrow string
//! slices directly from the source text.
//!
//! ```rust
//! use gqlex_parser::parse;
//!
//! let doc = parse(r#"query User($id: ID!) { user(id: $id) { name } }"#)?;
//! assert_eq!(doc.definitions.len(), 1);
//! # Ok::<(), gqlex_parser::ParseError>(())
//! ```
//!
//! Validation against a schema and execution are separate concerns and out
//! of scope for this crate.

pub mod ast;
mod char_cursor;
mod lexer;
mod parse_error;
mod parser;
mod token;
mod token_cursor;

pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use parser::parse;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use token::Token;
pub use token_cursor::TokenCursor;

#[cfg(test)]
mod tests;
