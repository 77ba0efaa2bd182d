use super::ast::{Command, Statement};
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, LineNumber};

/// A line of text split into its optional line number and tokens.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens) = lex(s);
        Line { number, tokens }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The statement text without its line number, as typed.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|s| s.to_string()).collect()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(&self.tokens)
    }

    /// A bare command, which only exists in direct mode.
    pub fn command(&self) -> Option<Command> {
        if self.is_direct() {
            parse_command(&self.tokens)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.source()),
            None => write!(f, "{}", self.source()),
        }
    }
}
