use super::directive::*;
use super::error::*;
use super::lex::*;
use super::token::*;
use super::{LineNumber, Location};

/// ## One classified line of source

#[derive(Debug, PartialEq)]
pub enum Line {
    Code(Vec<Token>),
    Directive(Directive),
}

impl Line {
    pub fn new(s: &str, number: LineNumber) -> Result<Line, Error> {
        if Directive::is_directive(s) {
            let directive = Directive::parse(s, Location::new(number, 1))?;
            return Ok(Line::Directive(directive));
        }
        Ok(Line::Code(lex(strip_comment(s), number)?))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Line::Code(tokens) => tokens.is_empty(),
            Line::Directive(_) => false,
        }
    }
}

/// Number the lines of a source text starting from 1.
pub fn lines(source: &str) -> impl Iterator<Item = (LineNumber, &str)> {
    source.lines().enumerate().map(|(index, s)| (index + 1, s))
}
