//! cinterns CLI - job and internship application tracker
//!
//! Usage: cinterns [-v...] [--data-file PATH] [COMMAND...]
//!
//! With a command, runs it once and exits. Without, reads commands from
//! stdin until `exit`.

use std::io;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use cinterns::application::Session;
use cinterns::config::Config;
use cinterns::infrastructure::JsonApplicationRepository;
use cinterns::logging;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&cwd))?;

    logging::init(logging::level_filter(config.output.verbosity, cli.verbose));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let data_file = cli
        .data_file
        .clone()
        .unwrap_or(config.storage.data_file);
    tracing::debug!(path = %data_file.display(), "using data file");

    let mut session = Session::start(JsonApplicationRepository::with_path(data_file));

    match cli.command_line() {
        Some(line) => {
            let result = session.execute(&line)?;
            println!("{}", result.feedback);
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session.run(stdin.lock(), io::stdout().lock(), prompt)?;
        }
    }

    Ok(())
}
