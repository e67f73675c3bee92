use clap::Parser;
use forth::term;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "forth", version)]
#[command(about = "A small stack language with a resident interpreter")]
struct Cli {
    /// Source files to load and run before the prompt
    files: Vec<String>,

    /// Alias table read at startup and written by !savealiases
    #[arg(long, default_value = "aliases.json")]
    aliases: PathBuf,

    /// Print the stack after every input line
    #[arg(long)]
    showstack: bool,

    /// Run the source files and exit without starting the prompt
    #[arg(long)]
    batch: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    term::main(term::Config {
        files: cli.files,
        aliases: cli.aliases,
        show_stack: cli.showstack,
        batch: cli.batch,
    });
}
