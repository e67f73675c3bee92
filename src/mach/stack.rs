use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; self.overflow_message))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        if let Err(error) = self.overflow_check() {
            self.vec.pop();
            return Err(error);
        }
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the top two, returned in push order: `(second, top)`.
    /// Nothing is popped unless both are there.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Pops the top three in push order. Nothing is popped unless all are there.
    pub fn pop_3(&mut self) -> Result<(T, T, T)> {
        if self.vec.len() < 3 {
            return Err(self.underflow_error());
        }
        let three = self.pop()?;
        let (one, two) = self.pop_2()?;
        Ok((one, two, three))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_pop_2_order() {
        let mut s: Stack<i32> = Stack::new("TEST");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<i32> = Stack::new("TEST");
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    }

    #[test]
    fn test_overflow_keeps_len() {
        let mut s: Stack<u8> = Stack::new("TEST OVERFLOW");
        for _ in 0..u16::max_value() {
            s.push(0).unwrap();
        }
        let e = s.push(0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(e.text(), "TEST OVERFLOW");
        assert_eq!(s.len(), u16::max_value() as usize);
    }

    #[test]
    fn test_short_pop_keeps_values() {
        let mut s: Stack<i32> = Stack::new("TEST");
        s.push(1).unwrap();
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.as_slice(), [1]);
        s.push(2).unwrap();
        assert_eq!(s.pop_3().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.as_slice(), [1, 2]);
        s.push(3).unwrap();
        assert_eq!(s.pop_3().unwrap(), (1, 2, 3));
    }
}
