use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// ## Stack values
///
/// Values never change once pushed. Sequence operations build new
/// strings and lists; the `Rc` makes `dup` and `over` cheap.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
    List(Rc<[Val]>),
}

impl Val {
    pub fn kind(&self) -> &'static str {
        match self {
            Val::Integer(_) => "INTEGER",
            Val::Float(_) => "FLOAT",
            Val::String(_) => "STRING",
            Val::List(_) => "LIST",
        }
    }

    /// Like `Display` but strings come out quoted and escaped,
    /// the way they would be written in source.
    pub fn repr(&self) -> String {
        match self {
            Val::String(s) => {
                let mut r = String::with_capacity(s.len() + 2);
                r.push('"');
                for ch in s.chars() {
                    if ch == '"' || ch == '\\' {
                        r.push('\\');
                    }
                    r.push(ch);
                }
                r.push('"');
                r
            }
            _ => self.to_string(),
        }
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => write!(f, "{}", format_float(*n)),
            String(s) => write!(f, "{}", s),
            List(l) => {
                let items: Vec<std::string::String> = l.iter().map(|v| v.repr()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Float(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<Vec<Val>> for Val {
    fn from(v: Vec<Val>) -> Val {
        Val::List(v.into())
    }
}

impl TryFrom<&Val> for i64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(*n),
            _ => Err(error!(TypeMismatch; format!("EXPECTED INTEGER, GOT {}", val.kind()))),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch; format!("EXPECTED STRING, GOT {}", val.kind()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_display() {
        assert_eq!(Val::Float(3.0).to_string(), "3.0");
        assert_eq!(Val::Float(2.5).to_string(), "2.5");
        assert_eq!(Val::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Val::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn test_string_display_and_repr() {
        let v = Val::from("say \"hi\"");
        assert_eq!(v.to_string(), "say \"hi\"");
        assert_eq!(v.repr(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_list_display() {
        let v = Val::from(vec![Val::Integer(1), Val::from("a"), Val::Float(1.5)]);
        assert_eq!(v.to_string(), "[1, \"a\", 1.5]");
    }
}
