use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One flat namespace shared by every run of a session.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UnboundName; var_name)),
        }
    }

    pub fn store(&mut self, var_name: Rc<str>, value: Val) -> Result<()> {
        if self.vars.len() > u16::max_value() as usize && !self.vars.contains_key(&var_name) {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        self.vars.insert(var_name, value);
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_overwrite() {
        let mut v = Var::new();
        v.store("x".into(), Val::Integer(1)).unwrap();
        v.store("x".into(), Val::from("one")).unwrap();
        assert_eq!(v.fetch("x"), Ok(Val::from("one")));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_unbound() {
        let v = Var::new();
        let e = v.fetch("nope").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnboundName);
        assert_eq!(e.text(), "nope");
    }
}
