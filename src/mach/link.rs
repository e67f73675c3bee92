use super::{Address, Instruction, Opcode};
use crate::error;
use crate::lang::{Error, Location};

type Result<T> = std::result::Result<T, Error>;

/// ## Branch resolution
///
/// Two linear passes over the whole program. Walking backwards finds
/// the forward targets: by the time an `if` is reached its `else` or
/// `end` has already been seen, likewise a `do` and its `whileend`.
/// Walking forwards finds the backward targets of `whileend` and
/// `continue`. Targets depend only on the order of the opcodes, so
/// linking an already linked program changes nothing.

#[derive(Debug, Default)]
pub struct Link {
    ifs: Vec<Address>,
    whiles: Vec<Address>,
}

fn unbalanced(location: Location, message: &str) -> Error {
    error!(UnbalancedBlock, location; message)
}

impl Link {
    pub fn link(ops: &mut [Instruction]) -> Result<()> {
        let mut this = Link::default();
        this.backward(ops)?;
        this.forward(ops)
    }

    fn backward(&mut self, ops: &mut [Instruction]) -> Result<()> {
        for addr in (0..ops.len()).rev() {
            let location = ops[addr].location;
            match &mut ops[addr].opcode {
                Opcode::End => self.ifs.push(addr),
                Opcode::Else(target) => match self.ifs.pop() {
                    Some(end) => {
                        *target = Some(end + 1);
                        self.ifs.push(addr);
                    }
                    None => return Err(unbalanced(location, "ELSE WITHOUT END")),
                },
                Opcode::If(target) => match self.ifs.pop() {
                    Some(end) => *target = Some(end + 1),
                    None => return Err(unbalanced(location, "IF WITHOUT END")),
                },
                Opcode::WhileEnd(_) => self.whiles.push(addr),
                Opcode::Do(target) => match self.whiles.pop() {
                    Some(end) => *target = Some(end + 1),
                    None => return Err(unbalanced(location, "DO WITHOUT WHILEEND")),
                },
                Opcode::Break(target) => match self.whiles.last() {
                    Some(end) => *target = Some(end + 1),
                    None => return Err(unbalanced(location, "BREAK OUTSIDE WHILE")),
                },
                _ => {}
            }
        }
        if let Some(&addr) = self.ifs.last() {
            let message = match ops[addr].opcode {
                Opcode::Else(_) => "ELSE WITHOUT IF",
                _ => "END WITHOUT IF",
            };
            return Err(unbalanced(ops[addr].location, message));
        }
        if let Some(&addr) = self.whiles.last() {
            return Err(unbalanced(ops[addr].location, "WHILEEND WITHOUT DO"));
        }
        Ok(())
    }

    fn forward(&mut self, ops: &mut [Instruction]) -> Result<()> {
        self.whiles.clear();
        for addr in 0..ops.len() {
            let location = ops[addr].location;
            match &mut ops[addr].opcode {
                Opcode::While => self.whiles.push(addr),
                Opcode::Continue(target) => match self.whiles.last() {
                    Some(start) => *target = Some(start + 1),
                    None => return Err(unbalanced(location, "CONTINUE OUTSIDE WHILE")),
                },
                Opcode::WhileEnd(target) => match self.whiles.pop() {
                    Some(start) => *target = Some(start + 1),
                    None => return Err(unbalanced(location, "WHILEEND WITHOUT WHILE")),
                },
                _ => {}
            }
        }
        if let Some(&addr) = self.whiles.last() {
            return Err(unbalanced(ops[addr].location, "WHILE WITHOUT WHILEEND"));
        }
        Ok(())
    }
}
