use super::{Address, Val};
use crate::lang::Word;

/// ## Virtual machine instruction set
///
/// The virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `2 3 + .` compiles to `[Literal(2), Literal(3), Add, Dump]`
///
/// Branching opcodes hold `None` until the program is linked.

#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push literal value on to the stack.
    Literal(Val),
    Dup,
    Drop,
    Over,
    Swap,

    // *** Expression operations
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Eq,
    Lt,
    Gt,
    Not,

    // *** Branch control
    /// Pop stack and branch to Address if zero.
    If(Option<Address>),
    /// Unconditional branch past the end of the if-block.
    Else(Option<Address>),
    End,
    /// Marks where the loop condition begins.
    While,
    /// Pop stack and branch out of the loop if zero.
    Do(Option<Address>),
    /// Unconditional branch back to the loop condition.
    WhileEnd(Option<Address>),
    Break(Option<Address>),
    Continue(Option<Address>),

    // *** Sequences and variables
    Index,
    StoreAtIndex,
    Set,
    Get,

    // *** Output
    Dump,
    DumpStack,
}

impl Opcode {
    pub fn target(&self) -> Option<Address> {
        use Opcode::*;
        match self {
            If(a) | Else(a) | Do(a) | WhileEnd(a) | Break(a) | Continue(a) => *a,
            _ => None,
        }
    }
}

impl From<Word> for Opcode {
    fn from(word: Word) -> Opcode {
        match word {
            Word::Plus => Opcode::Add,
            Word::Minus => Opcode::Sub,
            Word::Star => Opcode::Mul,
            Word::Slash => Opcode::Div,
            Word::Caret => Opcode::Pow,
            Word::Equal => Opcode::Eq,
            Word::Less => Opcode::Lt,
            Word::Greater => Opcode::Gt,
            Word::Bang => Opcode::Not,
            Word::Dup => Opcode::Dup,
            Word::Drop => Opcode::Drop,
            Word::Over => Opcode::Over,
            Word::Swap => Opcode::Swap,
            Word::Dot => Opcode::Dump,
            Word::Debug => Opcode::DumpStack,
            Word::If => Opcode::If(None),
            Word::Else => Opcode::Else(None),
            Word::End => Opcode::End,
            Word::While => Opcode::While,
            Word::Do => Opcode::Do(None),
            Word::WhileEnd => Opcode::WhileEnd(None),
            Word::Break => Opcode::Break(None),
            Word::Continue => Opcode::Continue(None),
            Word::Idx => Opcode::Index,
            Word::SetIdx => Opcode::StoreAtIndex,
            Word::Set => Opcode::Set,
            Word::Get => Opcode::Get,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

struct Target(Option<Address>);

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            Some(a) => write!(f, "{}", a),
            None => write!(f, "?"),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Literal(v) => write!(f, "LITERAL({})", v.repr()),
            Dup => write!(f, "DUP"),
            Drop => write!(f, "DROP"),
            Over => write!(f, "OVER"),
            Swap => write!(f, "SWAP"),

            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Pow => write!(f, "POW"),
            Eq => write!(f, "EQ"),
            Lt => write!(f, "LT"),
            Gt => write!(f, "GT"),
            Not => write!(f, "NOT"),

            If(a) => write!(f, "IF({})", Target(*a)),
            Else(a) => write!(f, "ELSE({})", Target(*a)),
            End => write!(f, "END"),
            While => write!(f, "WHILE"),
            Do(a) => write!(f, "DO({})", Target(*a)),
            WhileEnd(a) => write!(f, "WHILEEND({})", Target(*a)),
            Break(a) => write!(f, "BREAK({})", Target(*a)),
            Continue(a) => write!(f, "CONTINUE({})", Target(*a)),

            Index => write!(f, "INDEX"),
            StoreAtIndex => write!(f, "STOREATINDEX"),
            Set => write!(f, "SET"),
            Get => write!(f, "GET"),

            Dump => write!(f, "DUMP"),
            DumpStack => write!(f, "DUMPSTACK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_names() {
        assert_eq!(Opcode::Literal(Val::from("a")).to_string(), "LITERAL(\"a\")");
        assert_eq!(Opcode::If(None).to_string(), "IF(?)");
        assert_eq!(Opcode::WhileEnd(Some(3)).to_string(), "WHILEEND(3)");
    }

    #[test]
    fn test_target() {
        assert_eq!(Opcode::Break(Some(9)).target(), Some(9));
        assert_eq!(Opcode::End.target(), None);
    }
}
