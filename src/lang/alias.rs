use super::{lex, Directive, Error, Token};
use crate::error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// ## Alias table
///
/// Maps a token to the source text it stands for. Expansion is exactly
/// one level deep: the replacement is split into tokens but those tokens
/// are never looked up again, so an alias body that names another alias
/// reaches the translator as a plain token.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aliases {
    table: BTreeMap<String, String>,
}

impl Default for Aliases {
    fn default() -> Aliases {
        let mut aliases = Aliases::empty();
        aliases.insert("sqrt", "0.5 ^");
        aliases
    }
}

impl Aliases {
    pub fn empty() -> Aliases {
        Aliases {
            table: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn insert(&mut self, name: &str, body: &str) -> Option<String> {
        self.table.insert(name.to_string(), body.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.table.remove(name)
    }

    pub fn apply(&mut self, directive: &Directive) -> Result<()> {
        match directive {
            Directive::Alias { name, body } => {
                self.insert(name, body);
                Ok(())
            }
            Directive::Unalias(name) => match self.remove(name) {
                Some(_) => Ok(()),
                None => Err(error!(UndefinedAlias; name)),
            },
        }
    }

    /// Replace every unquoted token naming an alias with the tokens of its body.
    /// Body tokens keep the line of the token they replace.
    pub fn expand(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let mut expanded = Vec::with_capacity(tokens.len());
        for token in tokens {
            let body = if token.quoted {
                None
            } else {
                self.table.get(&token.text)
            };
            match body {
                Some(body) => {
                    let mut body_tokens = lex(body, token.location.line)
                        .map_err(|e| e.in_location(token.location))?;
                    expanded.append(&mut body_tokens);
                }
                None => expanded.push(token),
            }
        }
        Ok(expanded)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Aliases> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| error!(IoError; e.to_string()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, format!("{}\n", self))?;
        Ok(())
    }
}

impl std::fmt::Display for Aliases {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
