//! # Forth
//!
//! A small stack language with a resident interpreter.
//!
//! Source text is split into tokens, run through a one-level alias
//! expander, translated to opcodes and linked: every `if`, `else`,
//! `do`, `whileend`, `break` and `continue` gets its jump target before
//! anything runs. The linked program then executes against a value
//! stack and a table of named variables that persist between inputs.
//!
//! Begin by opening a terminal and running the executable.
//! ```text
//! S: 0 | A: 1 | C: 0 > 1 2 + .
//! + 3
//! S: 0 | A: 1 | C: 0 > █
//! ```
//!
//! Stop a runaway loop with CTRL-C and leave with CTRL-D or `!quit`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/reference.rs"]
#[allow(non_snake_case)]
pub mod __Reference;

pub mod lang;
pub mod mach;
pub mod term;

pub use mach::{compile, execute};
