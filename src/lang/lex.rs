use super::{Error, LineNumber, Location, Token};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Split one line of source into tokens.
/// Comments must already be gone, see `strip_comment`.
pub fn lex(s: &str, line_number: LineNumber) -> Result<Vec<Token>> {
    Lexer::new(s, line_number).collect()
}

/// Everything from a `//` outside of a quoted region to the end of the line.
pub fn strip_comment(s: &str) -> &str {
    let mut quoted = false;
    let mut escaped = false;
    let mut prev_slash = false;
    for (index, ch) in s.char_indices() {
        if quoted {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                quoted = false;
            }
            continue;
        }
        if ch == '"' {
            quoted = true;
        } else if ch == '/' {
            if prev_slash {
                return &s[..index - 1];
            }
            prev_slash = true;
            continue;
        }
        prev_slash = false;
    }
    s
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: LineNumber,
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.get(self.pos)?.is_whitespace() {
            self.pos += 1;
        }
        Some(self.token())
    }
}

impl Lexer {
    fn new(s: &str, line: LineNumber) -> Lexer {
        Lexer {
            chars: s.chars().collect(),
            pos: 0,
            line,
        }
    }

    fn location(&self, pos: usize) -> Location {
        Location::new(self.line, pos + 1)
    }

    fn token(&mut self) -> Result<Token> {
        let location = self.location(self.pos);
        let mut text = String::new();
        while let Some(&ch) = self.chars.get(self.pos) {
            if ch.is_whitespace() {
                break;
            }
            self.pos += 1;
            text.push(ch);
            if ch == '"' {
                return self.quoted(text, location);
            }
        }
        Ok(Token::new(&text, location))
    }

    fn quoted(&mut self, mut text: String, location: Location) -> Result<Token> {
        let mut escaped = false;
        while let Some(&ch) = self.chars.get(self.pos) {
            self.pos += 1;
            if escaped {
                escaped = false;
                text.push(ch);
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                text.push(ch);
                return Ok(Token {
                    text,
                    location,
                    quoted: true,
                });
            } else {
                text.push(ch);
            }
        }
        Err(error!(UnterminatedString, location; text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        lex(s, 1).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(texts("  1 2\t+ "), ["1", "2", "+"]);
    }

    #[test]
    fn test_columns() {
        let tokens = lex("dup  swap", 4).unwrap();
        assert_eq!(tokens[0].location, Location::new(4, 1));
        assert_eq!(tokens[1].location, Location::new(4, 6));
    }

    #[test]
    fn test_quote_ends_token() {
        assert_eq!(texts("\"ab\"cd"), ["\"ab\"", "cd"]);
    }

    #[test]
    fn test_comment_outside_quotes() {
        assert_eq!(strip_comment("1 2 + // three"), "1 2 + ");
        assert_eq!(strip_comment("\"a//b\" // c"), "\"a//b\" ");
        assert_eq!(strip_comment("1 / 2"), "1 / 2");
        assert_eq!(strip_comment("\"a\\\"//\" x"), "\"a\\\"//\" x");
    }
}
