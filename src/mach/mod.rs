/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for the language.

*/

pub type Address = usize;

mod compile;
mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use compile::compile;
pub use compile::translate;
pub use link::Link;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Instruction;
pub use program::Program;
pub use runtime::execute;
pub use runtime::Machine;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
