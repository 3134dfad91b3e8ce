//! Lexer and parser for SAS-style WHERE clauses.
//!
//! The grammar is closed: anything outside it is rejected with an [`Error`]
//! carrying the offending token and its character offset.
pub mod ast;
mod common;
mod lexer;
mod parser;

pub use self::{
    common::{Span, Spanned},
    parser::{Error, Parser, Result},
};
