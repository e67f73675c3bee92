/*!
# Rust Language Module

This Rust module provides lexical analysis of the language: splitting
lines into tokens, recognizing shell directives and expanding aliases.

*/

#[macro_use]
mod error;
mod alias;
mod directive;
mod lex;
mod line;
mod token;

pub use alias::Aliases;
pub use directive::Directive;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::lines;
pub use line::Line;
pub use token::Token;
pub use token::Word;

pub type LineNumber = usize;

/// ## Position of a token in the source
///
/// Both fields count from 1. Only used for diagnostics.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: LineNumber,
    pub column: usize,
}

impl Location {
    pub fn new(line: LineNumber, column: usize) -> Location {
        Location { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
