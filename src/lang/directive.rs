use super::{lex::strip_comment, Error, Location};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Alias directives
///
/// `!alias <name> <body>` and `!unalias <name>` may appear on their own
/// line anywhere in source text. The body is kept as text and is only
/// split into tokens when the alias is expanded.

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Alias { name: String, body: String },
    Unalias(String),
}

impl Directive {
    /// Any line starting with `!`. Elsewhere `!` is the not operator.
    pub fn is_directive(line: &str) -> bool {
        line.starts_with('!')
    }

    pub fn parse(line: &str, location: Location) -> Result<Directive> {
        let line = strip_comment(line).trim_end();
        let (command, rest) = match line.find(char::is_whitespace) {
            Some(idx) => (&line[..idx], line[idx..].trim_start()),
            None => (line, ""),
        };
        match command {
            "!alias" => {
                let (name, body) = match rest.find(char::is_whitespace) {
                    Some(idx) => (&rest[..idx], rest[idx..].trim_start()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(error!(UnknownDirective, location; "!alias <token> <tokens>"));
                }
                Ok(Directive::Alias {
                    name: name.to_string(),
                    body: body.to_string(),
                })
            }
            "!unalias" => {
                if rest.is_empty() {
                    return Err(error!(UnknownDirective, location; "!unalias <token>"));
                }
                Ok(Directive::Unalias(rest.to_string()))
            }
            _ => Err(error!(UnknownDirective, location; command)),
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Directive::Alias { name, body } => write!(f, "!alias {} {}", name, body),
            Directive::Unalias(name) => write!(f, "!unalias {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn loc() -> Location {
        Location::new(1, 1)
    }

    #[test]
    fn test_detection() {
        assert!(Directive::is_directive("!alias x 1"));
        assert!(Directive::is_directive("!bogus"));
        assert!(Directive::is_directive("! 1"));
        assert!(Directive::is_directive("!"));
        assert!(!Directive::is_directive(" !alias x 1"));
        assert!(!Directive::is_directive("1 !"));
    }

    #[test]
    fn test_alias() {
        assert_eq!(
            Directive::parse("!alias sq dup *  // square", loc()),
            Ok(Directive::Alias {
                name: "sq".to_string(),
                body: "dup *".to_string()
            })
        );
    }

    #[test]
    fn test_alias_empty_body() {
        assert_eq!(
            Directive::parse("!alias nop", loc()),
            Ok(Directive::Alias {
                name: "nop".to_string(),
                body: "".to_string()
            })
        );
    }

    #[test]
    fn test_unalias() {
        assert_eq!(
            Directive::parse("!unalias sq", loc()),
            Ok(Directive::Unalias("sq".to_string()))
        );
    }

    #[test]
    fn test_unknown() {
        let e = Directive::parse("!frobnicate 1 2", loc()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownDirective);
        assert_eq!(e.text(), "!frobnicate");
        let e = Directive::parse("! 1", loc()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownDirective);
        assert_eq!(e.text(), "!");
    }
}
