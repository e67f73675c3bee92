use super::{Opcode, Program, Val};
use crate::error;
use crate::lang::{lines, Aliases, Error, Line, Location, Token};
use std::borrow::Cow;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Compile source text into a linked program.
///
/// Alias directives in the source apply to the lines after them. They
/// are applied to a private copy of `aliases` and recorded on the
/// program for the caller to keep.
pub fn compile(source: &str, aliases: &Aliases) -> Result<Program> {
    let mut aliases = Cow::Borrowed(aliases);
    let mut program = Program::new();
    for (number, s) in lines(source) {
        match Line::new(s, number)? {
            Line::Directive(directive) => {
                aliases
                    .to_mut()
                    .apply(&directive)
                    .map_err(|e| e.in_location(Location::new(number, 1)))?;
                program.push_directive(directive);
            }
            Line::Code(tokens) => {
                for token in aliases.expand(tokens)? {
                    program.push(translate(&token)?, token.location);
                }
            }
        }
    }
    debug!(ops = program.len(), "translated");
    program.link()?;
    trace!("linked\n{}", program);
    Ok(program)
}

/// Map one token to its opcode. Reserved words first, then
/// numeric literals, then string literals.
pub fn translate(token: &Token) -> Result<Opcode> {
    if let Some(word) = token.word() {
        return Ok(Opcode::from(word));
    }
    if token.is_numeric() {
        return number(token).map(Opcode::Literal);
    }
    if let Some(s) = token.string_literal() {
        return Ok(Opcode::Literal(Val::String(s.into())));
    }
    Err(malformed(token))
}

fn malformed(token: &Token) -> Error {
    error!(MalformedToken, token.location; format!("`{}`", token.text))
}

fn number(token: &Token) -> Result<Val> {
    match token.text.matches('.').count() {
        0 => match token.text.parse::<i64>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => Err(malformed(token)),
        },
        1 => match token.text.parse::<f64>() {
            Ok(n) => Ok(Val::Float(n)),
            Err(_) => Err(malformed(token)),
        },
        _ => Err(malformed(token)),
    }
}
