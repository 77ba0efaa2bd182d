/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::{parse, parse_command};

pub mod ast;
pub mod token;

/// `None` is a direct-mode line.
pub type LineNumber = Option<u32>;
