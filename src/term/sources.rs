use crate::lang::Error;

/// ## Loaded source files
///
/// Remembered in load order so `!reloadsrc` replays them the same way.

#[derive(Debug, Default)]
pub struct Sources {
    names: Vec<String>,
}

impl Sources {
    pub fn new() -> Sources {
        Sources::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn insert(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.names.len();
        self.names.retain(|n| n != name);
        len != self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn read(name: &str) -> Result<String, Error> {
        Ok(std::fs::read_to_string(name)?)
    }

    pub fn size(name: &str) -> Option<u64> {
        std::fs::metadata(name).ok().map(|m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_order_and_dedup() {
        let mut s = Sources::new();
        s.insert("b.fs");
        s.insert("a.fs");
        s.insert("b.fs");
        assert_eq!(s.names(), ["b.fs", "a.fs"]);
        assert!(s.remove("b.fs"));
        assert!(!s.remove("b.fs"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let e = Sources::read("/definitely/not/here.fs").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::FileNotFound);
        assert_eq!(Sources::size("/definitely/not/here.fs"), None);
    }
}
