/*!
## Terminal Module

The interactive prompt. Lines starting with one of the commands in
[`Command`] are handled here; everything else is compiled and run
against a single [`Runtime`] that lives as long as the prompt.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

mod command;
mod sources;

pub use command::Command;
pub use sources::Sources;

use crate::lang::{Aliases, Error, ErrorCode};
use crate::mach::Runtime;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use tracing::{debug, info, warn};

/// Startup options, filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub files: Vec<String>,
    pub aliases: PathBuf,
    pub show_stack: bool,
    pub batch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn main(config: Config) {
    let aliases = startup_aliases(&config.aliases);
    let mut shell = Shell::new(Runtime::new(aliases), config.aliases.clone())
        .show_stack(config.show_stack)
        .styled(true);

    let interrupted = shell.runtime().interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "no Ctrl-C handler, runaway loops cannot be stopped");
    }

    let stdout = io::stdout();
    for file in &config.files {
        if let Err(error) = shell.load(file, &mut stdout.lock()) {
            eprintln!("{}", error);
        }
    }
    if config.batch {
        return;
    }
    if let Err(error) = main_loop(&mut shell) {
        eprintln!("{}", error);
    }
}

fn startup_aliases(path: &Path) -> Aliases {
    match Aliases::load(path) {
        Ok(aliases) => {
            info!(path = %path.display(), count = aliases.len(), "aliases loaded");
            aliases
        }
        Err(error) if error.code() == ErrorCode::FileNotFound => {
            info!(path = %path.display(), "no alias file, using defaults");
            Aliases::default()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "alias file ignored");
            Aliases::default()
        }
    }
}

fn main_loop(shell: &mut Shell) -> io::Result<()> {
    let interface = Interface::new("forth")?;
    let stdout = io::stdout();
    loop {
        interface.set_prompt(&shell.prompt())?;
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !string.trim().is_empty() {
            interface.add_history_unique(string.clone());
        }
        if shell.enter(&string, &mut stdout.lock())? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// ## A prompt session
///
/// Owns the runtime and the shell-only state: loaded sources, the
/// previous line and the `showstack` toggle. Output goes to whatever
/// writer the caller hands in.

pub struct Shell {
    runtime: Runtime,
    sources: Sources,
    alias_path: PathBuf,
    show_stack: bool,
    styled: bool,
    last: String,
}

impl Shell {
    pub fn new(runtime: Runtime, alias_path: PathBuf) -> Shell {
        Shell {
            runtime,
            sources: Sources::new(),
            alias_path,
            show_stack: false,
            styled: false,
            last: String::new(),
        }
    }

    pub fn show_stack(self, show_stack: bool) -> Shell {
        Shell { show_stack, ..self }
    }

    /// Print errors in bold.
    pub fn styled(self, styled: bool) -> Shell {
        Shell { styled, ..self }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    pub fn prompt(&self) -> String {
        format!(
            "S: {} | A: {} | C: {} > ",
            self.runtime.stack().len(),
            self.runtime.aliases().len(),
            self.sources.len()
        )
    }

    /// Handle one line of input. Only writing to `out` can fail here;
    /// language errors are printed.
    pub fn enter<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = Command::parse(line);
        if command != Some(Command::Last) {
            self.last = line.to_string();
        }
        debug!(?command, "input");
        match command {
            None => self.run(line, out)?,
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::Last) => {
                let last = self.last.clone();
                self.run(&last, out)?;
            }
            Some(Command::Load(None)) => writeln!(out, "usage: !load <filepath>")?,
            Some(Command::Load(Some(name))) => self.load(&name, out)?,
            Some(Command::Toggle(None)) => writeln!(out, "options: showstack")?,
            Some(Command::Toggle(Some(option))) => {
                if option == "showstack" {
                    self.show_stack = !self.show_stack;
                    writeln!(out, "showstack: {}", self.show_stack)?;
                } else {
                    writeln!(out, "option `{}` does not exist!", option)?;
                }
            }
            Some(Command::Stack) => self.print_stack(out)?,
            Some(Command::Alias(None)) => writeln!(out, "usage: !alias <token> <tokens>")?,
            Some(Command::Alias(Some((name, body)))) => {
                writeln!(out, "! `{}` -> `{}`", name, body)?;
                self.runtime.aliases_mut().insert(&name, &body);
            }
            Some(Command::Unalias(None)) => writeln!(out, "usage: !unalias <token>")?,
            Some(Command::Unalias(Some(name))) => {
                if self.runtime.aliases_mut().remove(&name).is_some() {
                    writeln!(out, "! `{}` unbound", name)?;
                } else {
                    writeln!(out, "! `{}` was not aliased ever!", name)?;
                }
            }
            Some(Command::Aliases) => self.print_aliases(out)?,
            Some(Command::SaveAliases) => {
                match self.runtime.aliases().save(&self.alias_path) {
                    Ok(()) => {
                        info!(path = %self.alias_path.display(), "aliases saved");
                        self.print_aliases(out)?;
                    }
                    Err(error) => self.report(&error, out)?,
                }
            }
            Some(Command::LoadAliases) => match Aliases::load(&self.alias_path) {
                Ok(aliases) => {
                    *self.runtime.aliases_mut() = aliases;
                    self.print_aliases(out)?;
                }
                Err(error) => self.report(&error, out)?,
            },
            Some(Command::Unload(None)) => writeln!(out, "usage: !unload <src>")?,
            Some(Command::Unload(Some(name))) => {
                if self.sources.remove(&name) {
                    writeln!(out, "! `{}` unloaded", name)?;
                } else {
                    writeln!(out, "! `{}` was never loaded!", name)?;
                }
            }
            Some(Command::ReloadSources) => {
                let names = self.sources.names().to_vec();
                for name in names {
                    let result = match Sources::read(&name) {
                        Ok(source) => self.runtime.enter(&source, out),
                        Err(error) => Err(error),
                    };
                    if let Err(error) = result {
                        writeln!(out, "Error in `{}`:", name)?;
                        self.report(&error, out)?;
                    }
                }
            }
            Some(Command::ShowSources) => {
                writeln!(out, "+++")?;
                for name in self.sources.names() {
                    match Sources::size(name) {
                        Some(size) => writeln!(out, "! {} :: {}B", name, size)?,
                        None => writeln!(out, "! {} :: INVALID", name)?,
                    }
                }
                writeln!(out, "+++")?;
            }
            Some(Command::ClearStack) => {
                self.runtime.clear_stack();
                writeln!(out, "cleared!")?;
            }
            Some(Command::Help) => writeln!(out, "{}", command::HELP)?,
        }
        if self.show_stack {
            self.print_stack(out)?;
        }
        Ok(Flow::Continue)
    }

    /// Echo a source file, remember it, then compile and run it.
    pub fn load<W: Write>(&mut self, name: &str, out: &mut W) -> io::Result<()> {
        let source = match Sources::read(name) {
            Ok(source) => source,
            Err(error) => return self.report(&error, out),
        };
        info!(file = name, bytes = source.len(), "loading");
        for line in source.lines() {
            writeln!(out, "! {}", line)?;
        }
        self.sources.insert(name);
        if let Err(error) = self.runtime.enter(&source, out) {
            self.report(&error, out)?;
        }
        Ok(())
    }

    fn run<W: Write>(&mut self, source: &str, out: &mut W) -> io::Result<()> {
        match self.runtime.enter(source, out) {
            Ok(()) => Ok(()),
            Err(error) => self.report(&error, out),
        }
    }

    fn report<W: Write>(&self, error: &Error, out: &mut W) -> io::Result<()> {
        if self.styled {
            writeln!(out, "{}", Style::new().bold().paint(error.to_string()))
        } else {
            writeln!(out, "{}", error)
        }
    }

    fn print_stack<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, val) in self.runtime.stack().iter().rev().enumerate() {
            writeln!(out, "! {}: {}", idx, val.repr())?;
        }
        Ok(())
    }

    fn print_aliases<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "+++")?;
        writeln!(out, "{}", self.runtime.aliases())?;
        writeln!(out, "+++")
    }
}
