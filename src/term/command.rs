/// ## Prompt commands
///
/// These only exist at the prompt. A line that is not one of them is
/// handed to the compiler, which rejects any other `!` word itself.

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Load(Option<String>),
    Toggle(Option<String>),
    Stack,
    Last,
    Alias(Option<(String, String)>),
    Unalias(Option<String>),
    Aliases,
    SaveAliases,
    LoadAliases,
    Unload(Option<String>),
    ReloadSources,
    ShowSources,
    ClearStack,
    Help,
}

fn arg(rest: &str) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim_end();
        if !line.starts_with('!') {
            return None;
        }
        let (word, rest) = match line.find(' ') {
            Some(idx) => (&line[..idx], line[idx + 1..].trim_start()),
            None => (line, ""),
        };
        let command = match word {
            "!quit" => Command::Quit,
            "!load" => Command::Load(arg(rest)),
            "!toggle" => Command::Toggle(arg(rest)),
            "!stack" => Command::Stack,
            "!last" => Command::Last,
            "!alias" => {
                if rest.is_empty() {
                    Command::Alias(None)
                } else {
                    let (name, body) = match rest.find(' ') {
                        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
                        None => (rest, ""),
                    };
                    Command::Alias(Some((name.to_string(), body.to_string())))
                }
            }
            "!unalias" => Command::Unalias(arg(rest)),
            "!aliases" => Command::Aliases,
            "!savealiases" => Command::SaveAliases,
            "!loadaliases" => Command::LoadAliases,
            "!unload" => Command::Unload(arg(rest)),
            "!reloadsrc" => Command::ReloadSources,
            "!showsrc" => Command::ShowSources,
            "!clearstack" => Command::ClearStack,
            "!help" => Command::Help,
            _ => return None,
        };
        Some(command)
    }
}

pub const HELP: &str = "\
This is a repl, type in any code and it will be evaluated.
Commands (these don't work in actual interpreted code, these are repl primitives):
- !stack
  - Prints current stack
- !toggle <option>
  - Toggles <option> (see more by running `!toggle`).
- !load <filepath>
  - Loads file in <filepath> and executes as code
- !quit
  - Exits this program.
- !last
  - Repeats last line in the repl, running it as code.
- !help
  - Prints this message.
- !alias <token> <tokens>
  - Creates alias in preprocessor.
- !unalias <token>
  - Removes alias in preprocessor.
- !aliases
  - Shows all aliases.
- !savealiases
  - Saves all aliases.
- !loadaliases
  - Loads aliases from the alias file.
- !unload <src>
  - Unloads src from memory.
- !reloadsrc
  - Reloads all source files.
- !showsrc
  - Shows all source files.
- !clearstack
  - Clears the stack";
