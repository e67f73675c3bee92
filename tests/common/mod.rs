#![allow(dead_code)]
use forth::lang::Error;
use forth::mach::{Runtime, Val};
use forth::term::Shell;

/// Run one input and return what it printed, plus the error if any.
pub fn run(runtime: &mut Runtime, source: &str) -> (String, Result<(), Error>) {
    let mut out = Vec::new();
    let result = runtime.enter(source, &mut out);
    (String::from_utf8(out).unwrap(), result)
}

/// Run one input that must succeed and return what it printed.
pub fn exec(runtime: &mut Runtime, source: &str) -> String {
    let (out, result) = run(runtime, source);
    if let Err(error) = result {
        panic!("{} failed: {}", source, error);
    }
    out
}

pub fn stack(runtime: &Runtime) -> Vec<Val> {
    runtime.stack().as_slice().to_vec()
}

pub fn ints(values: &[i64]) -> Vec<Val> {
    values.iter().map(|&n| Val::Integer(n)).collect()
}

pub fn shell(shell: &mut Shell, line: &str) -> String {
    let mut out = Vec::new();
    shell.enter(line, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
