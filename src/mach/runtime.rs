use super::{compile, Address, Opcode, Operation, Program, Stack, Val, Var};
use crate::error;
use crate::lang::{Aliases, Error};
use std::convert::TryFrom;
use std::io::Write;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Run a linked program to completion against a stack and variables.
/// Anything the program prints goes to `out`.
pub fn execute<W: Write>(
    program: &Program,
    stack: &mut Stack<Val>,
    vars: &mut Var,
    out: &mut W,
) -> Result<()> {
    Machine::new(program).run(stack, vars, out)
}

/// ## The virtual machine
///
/// Fetch, decode, execute until the instruction pointer runs off the end.
/// A failing instruction stops the run; whatever it and the instructions
/// before it did to the stack and variables stays done.

pub struct Machine<'a> {
    program: &'a Program,
    ip: Address,
    interrupt: Option<&'a AtomicBool>,
}

fn resolved(target: Option<Address>) -> Result<Address> {
    match target {
        Some(addr) => Ok(addr),
        None => Err(error!(InternalError; "UNLINKED BRANCH")),
    }
}

fn binary<F>(stack: &mut Stack<Val>, f: F) -> Result<()>
where
    F: Fn(Val, Val) -> Result<Val>,
{
    let (lhs, rhs) = stack.pop_2()?;
    stack.push(f(lhs, rhs)?)
}

impl<'a> Machine<'a> {
    pub fn new(program: &'a Program) -> Machine<'a> {
        Machine {
            program,
            ip: 0,
            interrupt: None,
        }
    }

    /// Stop with `BREAK` before the next instruction once `flag` is set.
    pub fn with_interrupt(self, flag: &'a AtomicBool) -> Machine<'a> {
        Machine {
            interrupt: Some(flag),
            ..self
        }
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn run<W: Write>(&mut self, stack: &mut Stack<Val>, vars: &mut Var, out: &mut W) -> Result<()> {
        let program = self.program;
        while let Some(op) = program.get(self.ip) {
            if let Some(flag) = self.interrupt {
                if flag.load(Ordering::SeqCst) {
                    return Err(error!(Break, op.location));
                }
            }
            trace!(ip = self.ip, op = %op.opcode, depth = stack.len());
            self.ip = self
                .step(&op.opcode, stack, vars, out)
                .map_err(|e| e.in_location(op.location))?;
        }
        out.flush()?;
        Ok(())
    }

    fn step<W: Write>(
        &self,
        opcode: &Opcode,
        stack: &mut Stack<Val>,
        vars: &mut Var,
        out: &mut W,
    ) -> Result<Address> {
        let next = self.ip + 1;
        match opcode {
            Opcode::Literal(val) => stack.push(val.clone())?,
            Opcode::Dup => {
                let val = stack.pop()?;
                stack.push(val.clone())?;
                stack.push(val)?;
            }
            Opcode::Drop => {
                stack.pop()?;
            }
            Opcode::Over => {
                let (a, b) = stack.pop_2()?;
                stack.push(a.clone())?;
                stack.push(b)?;
                stack.push(a)?;
            }
            Opcode::Swap => {
                let (a, b) = stack.pop_2()?;
                stack.push(b)?;
                stack.push(a)?;
            }

            Opcode::Add => binary(stack, Operation::sum)?,
            Opcode::Sub => binary(stack, Operation::subtract)?,
            Opcode::Mul => binary(stack, Operation::multiply)?,
            Opcode::Div => binary(stack, Operation::divide)?,
            Opcode::Pow => binary(stack, Operation::power)?,
            Opcode::Eq => binary(stack, Operation::equal)?,
            Opcode::Lt => binary(stack, Operation::less)?,
            Opcode::Gt => binary(stack, Operation::greater)?,
            Opcode::Not => {
                let val = stack.pop()?;
                stack.push(Operation::not(val)?)?;
            }

            Opcode::If(target) | Opcode::Do(target) => {
                let cond = stack.pop()?;
                if Operation::is_zero(&cond) {
                    return resolved(*target);
                }
            }
            Opcode::Else(target)
            | Opcode::WhileEnd(target)
            | Opcode::Break(target)
            | Opcode::Continue(target) => return resolved(*target),
            Opcode::End | Opcode::While => {}

            Opcode::Index => binary(stack, Operation::index)?,
            Opcode::StoreAtIndex => {
                let (seq, index, val) = stack.pop_3()?;
                stack.push(Operation::store_at_index(seq, index, val)?)?;
            }
            Opcode::Set => {
                let (val, name) = stack.pop_2()?;
                vars.store(Rc::<str>::try_from(name)?, val)?;
            }
            Opcode::Get => {
                let name = Rc::<str>::try_from(stack.pop()?)?;
                stack.push(vars.fetch(&name)?)?;
            }

            Opcode::Dump => {
                let val = stack.pop()?;
                writeln!(out, "+ {}", val)?;
            }
            Opcode::DumpStack => {
                writeln!(out, "DEBUG")?;
                for (idx, val) in stack.iter().rev().enumerate() {
                    writeln!(out, "! {}: {}", idx, val.repr())?;
                }
                writeln!(out, "DEBUG")?;
            }
        }
        Ok(next)
    }
}

/// ## A session
///
/// The stack, variables and aliases survive from one input to the next.
/// A failed compile leaves all three alone; a failed run keeps whatever
/// it managed to do.

pub struct Runtime {
    stack: Stack<Val>,
    vars: Var,
    aliases: Aliases,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Aliases::default())
    }
}

impl Runtime {
    pub fn new(aliases: Aliases) -> Runtime {
        Runtime {
            stack: Stack::new("STACK OVERFLOW"),
            vars: Var::new(),
            aliases,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut Aliases {
        &mut self.aliases
    }

    /// Handle for a signal handler. Setting it stops the current run.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn compile(&self, source: &str) -> Result<Program> {
        compile(source, &self.aliases)
    }

    pub fn execute<W: Write>(&mut self, program: &Program, out: &mut W) -> Result<()> {
        self.interrupted.store(false, Ordering::SeqCst);
        let mut machine = Machine::new(program).with_interrupt(&self.interrupted);
        let result = machine.run(&mut self.stack, &mut self.vars, out);
        debug!(ip = machine.ip(), depth = self.stack.len(), ok = result.is_ok(), "run finished");
        result
    }

    /// Compile, keep any alias directives, then run.
    pub fn enter<W: Write>(&mut self, source: &str, out: &mut W) -> Result<()> {
        let program = self.compile(source)?;
        for directive in program.directives() {
            self.aliases.apply(directive)?;
        }
        self.execute(&program, out)
    }
}
