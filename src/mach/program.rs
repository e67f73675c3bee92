use super::{Address, Link, Opcode};
use crate::lang::{Directive, Error, Location};

/// ## One opcode and where it came from

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub location: Location,
}

/// ## A compiled program
///
/// Instructions are addressed by index. Linking fills in branch targets
/// but never changes the length or order of the instructions.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    ops: Vec<Instruction>,
    directives: Vec<Directive>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, opcode: Opcode, location: Location) {
        self.ops.push(Instruction { opcode, location })
    }

    pub fn push_directive(&mut self, directive: Directive) {
        self.directives.push(directive)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.ops.get(addr)
    }

    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    /// Alias directives found in the source, in source order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn link(&mut self) -> Result<(), Error> {
        Link::link(&mut self.ops)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, op) in self.ops.iter().enumerate() {
            writeln!(f, "{:>5} {:<8} {}", addr, op.location.to_string(), op.opcode)?;
        }
        Ok(())
    }
}
