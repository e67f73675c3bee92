use super::Location;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
);

/// ## One token of source text
///
/// `quoted` is set when the token was ended by a closing double quote.
/// Escapes inside the quotes have already been applied to `text`,
/// so only the flag can tell `"a"` from `"a\"`.

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub location: Location,
    pub quoted: bool,
}

impl Token {
    pub fn new(text: &str, location: Location) -> Token {
        Token {
            text: text.to_string(),
            location,
            quoted: false,
        }
    }

    pub fn word(&self) -> Option<Word> {
        if self.quoted {
            return None;
        }
        Word::from_string(&self.text)
    }

    /// Interior of a string literal token.
    pub fn string_literal(&self) -> Option<&str> {
        if self.quoted && self.text.len() >= 2 && self.text.starts_with('"') {
            Some(&self.text[1..self.text.len() - 1])
        } else {
            None
        }
    }

    pub fn is_numeric(&self) -> bool {
        !self.quoted && self.text.chars().all(|c| c.is_ascii_digit() || c == '.')
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// ## Reserved words
///
/// Every word maps to exactly one opcode. Anything else in the
/// source must be a numeric or string literal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Equal,
    Less,
    Greater,
    Bang,
    Dup,
    Drop,
    Over,
    Swap,
    Dot,
    Debug,
    If,
    Else,
    End,
    While,
    Do,
    WhileEnd,
    Break,
    Continue,
    Idx,
    SetIdx,
    Set,
    Get,
}

impl Word {
    pub const ALL: [Word; 27] = [
        Word::Plus,
        Word::Minus,
        Word::Star,
        Word::Slash,
        Word::Caret,
        Word::Equal,
        Word::Less,
        Word::Greater,
        Word::Bang,
        Word::Dup,
        Word::Drop,
        Word::Over,
        Word::Swap,
        Word::Dot,
        Word::Debug,
        Word::If,
        Word::Else,
        Word::End,
        Word::While,
        Word::Do,
        Word::WhileEnd,
        Word::Break,
        Word::Continue,
        Word::Idx,
        Word::SetIdx,
        Word::Set,
        Word::Get,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Caret => "^",
            Equal => "=",
            Less => "<",
            Greater => ">",
            Bang => "!",
            Dup => "dup",
            Drop => "drop",
            Over => "over",
            Swap => "swap",
            Dot => ".",
            Debug => "???",
            If => "if",
            Else => "else",
            End => "end",
            While => "while",
            Do => "do",
            WhileEnd => "whileend",
            Break => "break",
            Continue => "continue",
            Idx => "idx",
            SetIdx => "setidx",
            Set => "set",
            Get => "get",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
