use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const MAX_SEQUENCE_LEN: usize = 1 << 24;

pub struct Operation {}

fn mismatch(op: &str, lhs: &Val, rhs: &Val) -> Error {
    error!(TypeMismatch; format!("{} {} {}", lhs.kind(), op, rhs.kind()))
}

fn truth(b: bool) -> Val {
    Val::Integer(if b { 1 } else { 0 })
}

/// Resolve a possibly negative index against a sequence length.
fn position(len: usize, index: &Val) -> Result<usize> {
    let i = i64::try_from(index)?;
    let p = if i < 0 { i + len as i64 } else { i };
    if p < 0 || p >= len as i64 {
        return Err(error!(SubscriptOutOfRange; format!("{} NOT IN 0..{}", i, len)));
    }
    Ok(p as usize)
}

fn repeat_len(len: usize, count: i64) -> Result<usize> {
    let count = if count < 0 { 0 } else { count as usize };
    match len.checked_mul(count) {
        Some(n) if n <= MAX_SEQUENCE_LEN => Ok(count),
        _ => Err(error!(OutOfMemory; "SEQUENCE TOO LONG")),
    }
}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 + r)),
            (Float(l), Integer(r)) => Ok(Float(l + r as f64)),
            (Float(l), Float(r)) => Ok(Float(l + r)),
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            (List(l), List(r)) => Ok(List(l.iter().chain(r.iter()).cloned().collect())),
            (l, r) => Err(mismatch("+", &l, &r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 - r)),
            (Float(l), Integer(r)) => Ok(Float(l - r as f64)),
            (Float(l), Float(r)) => Ok(Float(l - r)),
            (l, r) => Err(mismatch("-", &l, &r)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 * r)),
            (Float(l), Integer(r)) => Ok(Float(l * r as f64)),
            (Float(l), Float(r)) => Ok(Float(l * r)),
            (String(s), Integer(n)) | (Integer(n), String(s)) => {
                let count = repeat_len(s.len(), n)?;
                Ok(String(s.repeat(count).into()))
            }
            (List(l), Integer(n)) | (Integer(n), List(l)) => {
                let count = repeat_len(l.len(), n)?;
                Ok(List(
                    std::iter::repeat(l.iter())
                        .take(count)
                        .flatten()
                        .cloned()
                        .collect(),
                ))
            }
            (l, r) => Err(mismatch("*", &l, &r)),
        }
    }

    /// True division. The result is always a float.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let (l, r) = match (lhs, rhs) {
            (Integer(l), Integer(r)) => (l as f64, r as f64),
            (Integer(l), Float(r)) => (l as f64, r),
            (Float(l), Integer(r)) => (l, r as f64),
            (Float(l), Float(r)) => (l, r),
            (l, r) => return Err(mismatch("/", &l, &r)),
        };
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Float(l / r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) if r >= 0 => {
                let n = match (l, u32::try_from(r)) {
                    (_, Ok(exp)) => l.checked_pow(exp),
                    (0, Err(_)) => Some(0),
                    (1, Err(_)) => Some(1),
                    (-1, Err(_)) => Some(if r % 2 == 0 { 1 } else { -1 }),
                    _ => None,
                };
                match n {
                    Some(n) => Ok(Integer(n)),
                    None => Err(error!(Overflow)),
                }
            }
            (Integer(l), Integer(r)) => Ok(Float((l as f64).powf(r as f64))),
            (Integer(l), Float(r)) => Ok(Float((l as f64).powf(r))),
            (Float(l), Integer(r)) => Ok(Float(l.powf(r as f64))),
            (Float(l), Float(r)) => Ok(Float(l.powf(r))),
            (l, r) => Err(mismatch("^", &l, &r)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(truth(Operation::equal_bool(&lhs, &rhs)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(truth(Operation::less_bool(&lhs, &rhs)?))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(truth(Operation::less_bool(&rhs, &lhs)?))
    }

    /// Only a value equal to 1 is true.
    pub fn not(val: Val) -> Result<Val> {
        Ok(truth(!Operation::equal_bool(&val, &Val::Integer(1))))
    }

    /// The branch test of `if` and `do`.
    pub fn is_zero(val: &Val) -> bool {
        Operation::equal_bool(val, &Val::Integer(0))
    }

    /// Numbers compare by value across kinds. Different kinds are
    /// simply unequal, never an error.
    pub fn equal_bool(lhs: &Val, rhs: &Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l == r,
            (Integer(l), Float(r)) => *l as f64 == *r,
            (Float(l), Integer(r)) => *l == *r as f64,
            (Float(l), Float(r)) => l == r,
            (String(l), String(r)) => l == r,
            (List(l), List(r)) => {
                l.len() == r.len()
                    && l.iter().zip(r.iter()).all(|(a, b)| Operation::equal_bool(a, b))
            }
            _ => false,
        }
    }

    pub fn less_bool(lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(l < r),
            (Integer(l), Float(r)) => Ok((*l as f64) < *r),
            (Float(l), Integer(r)) => Ok(*l < *r as f64),
            (Float(l), Float(r)) => Ok(l < r),
            (String(l), String(r)) => Ok(l < r),
            (List(l), List(r)) => {
                for (a, b) in l.iter().zip(r.iter()) {
                    if !Operation::equal_bool(a, b) {
                        return Operation::less_bool(a, b);
                    }
                }
                Ok(l.len() < r.len())
            }
            (l, r) => Err(mismatch("<", l, r)),
        }
    }

    pub fn index(seq: Val, index: Val) -> Result<Val> {
        match seq {
            Val::String(s) => {
                let p = position(s.chars().count(), &index)?;
                match s.chars().nth(p) {
                    Some(ch) => Ok(Val::String(ch.to_string().into())),
                    None => Err(error!(InternalError; "INDEX")),
                }
            }
            Val::List(l) => {
                let p = position(l.len(), &index)?;
                Ok(l[p].clone())
            }
            other => Err(mismatch("idx", &other, &index)),
        }
    }

    /// `seq[:i] + val + seq[i+1:]`. The replacement must be a sequence of
    /// the same kind, so a single element is replaced by a one element list.
    pub fn store_at_index(seq: Val, index: Val, val: Val) -> Result<Val> {
        match (seq, val) {
            (Val::String(s), Val::String(v)) => {
                let chars: Vec<char> = s.chars().collect();
                let p = position(chars.len(), &index)?;
                let mut out: String = chars[..p].iter().collect();
                out.push_str(&v);
                out.extend(chars[p + 1..].iter());
                Ok(Val::String(out.into()))
            }
            (Val::List(l), Val::List(v)) => {
                let p = position(l.len(), &index)?;
                let out: Rc<[Val]> = l[..p]
                    .iter()
                    .chain(v.iter())
                    .chain(l[p + 1..].iter())
                    .cloned()
                    .collect();
                Ok(Val::List(out))
            }
            (s, v) => Err(mismatch("setidx", &s, &v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn list(v: &[i64]) -> Val {
        Val::from(v.iter().map(|n| Val::Integer(*n)).collect::<Vec<Val>>())
    }

    #[test]
    fn test_numeric_tower() {
        assert_eq!(Operation::sum(Val::Integer(1), Val::Integer(2)), Ok(Val::Integer(3)));
        assert_eq!(Operation::sum(Val::Integer(1), Val::Float(0.5)), Ok(Val::Float(1.5)));
        assert_eq!(Operation::divide(Val::Integer(7), Val::Integer(2)), Ok(Val::Float(3.5)));
        assert_eq!(Operation::power(Val::Integer(3), Val::Integer(4)), Ok(Val::Integer(81)));
        assert_eq!(Operation::power(Val::Integer(2), Val::Integer(-1)), Ok(Val::Float(0.5)));
    }

    #[test]
    fn test_power_of_unit_bases() {
        let big = Val::Integer(1 << 40);
        assert_eq!(Operation::power(Val::Integer(1), big.clone()), Ok(Val::Integer(1)));
        assert_eq!(Operation::power(Val::Integer(0), big.clone()), Ok(Val::Integer(0)));
        assert_eq!(Operation::power(Val::Integer(-1), big.clone()), Ok(Val::Integer(1)));
        assert_eq!(
            Operation::power(Val::Integer(-1), Val::Integer((1 << 40) + 1)),
            Ok(Val::Integer(-1))
        );
        let e = Operation::power(Val::Integer(2), big).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_overflow() {
        let e = Operation::sum(i64::MAX.into(), Val::Integer(1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(Val::Integer(1), Val::Float(0.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_string_arithmetic() {
        assert_eq!(Operation::sum("ab".into(), "cd".into()), Ok(Val::from("abcd")));
        assert_eq!(Operation::multiply(Val::Integer(3), "ab".into()), Ok(Val::from("ababab")));
        let e = Operation::subtract("ab".into(), Val::Integer(1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        assert_eq!(e.text(), "STRING - INTEGER");
    }

    #[test]
    fn test_equal_never_fails() {
        assert_eq!(Operation::equal(Val::Integer(1), Val::Float(1.0)), Ok(Val::Integer(1)));
        assert_eq!(Operation::equal("1".into(), Val::Integer(1)), Ok(Val::Integer(0)));
        assert_eq!(Operation::equal(list(&[1, 2]), list(&[1, 2])), Ok(Val::Integer(1)));
    }

    #[test]
    fn test_not_only_one_is_true() {
        assert_eq!(Operation::not(Val::Integer(1)), Ok(Val::Integer(0)));
        assert_eq!(Operation::not(Val::Float(1.0)), Ok(Val::Integer(0)));
        assert_eq!(Operation::not(Val::Integer(2)), Ok(Val::Integer(1)));
        assert_eq!(Operation::not(Val::Integer(0)), Ok(Val::Integer(1)));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Operation::less(Val::Integer(1), Val::Float(2.5)), Ok(Val::Integer(1)));
        assert_eq!(Operation::greater("b".into(), "a".into()), Ok(Val::Integer(1)));
        assert_eq!(Operation::less(list(&[1, 2]), list(&[1, 3])), Ok(Val::Integer(1)));
        assert_eq!(Operation::less(list(&[1]), list(&[1, 0])), Ok(Val::Integer(1)));
        let e = Operation::less("a".into(), Val::Integer(1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_index() {
        assert_eq!(Operation::index("héllo".into(), Val::Integer(1)), Ok(Val::from("é")));
        assert_eq!(Operation::index(list(&[4, 5, 6]), Val::Integer(-1)), Ok(Val::Integer(6)));
        let e = Operation::index(list(&[4]), Val::Integer(1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange);
        let e = Operation::index(list(&[4]), Val::Float(0.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_store_at_index() {
        assert_eq!(
            Operation::store_at_index("cat".into(), Val::Integer(0), "b".into()),
            Ok(Val::from("bat"))
        );
        assert_eq!(
            Operation::store_at_index(list(&[1, 2, 3]), Val::Integer(1), list(&[7, 8])),
            Ok(list(&[1, 7, 8, 3]))
        );
        let e = Operation::store_at_index(list(&[1]), Val::Integer(0), Val::Integer(2)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }
}
